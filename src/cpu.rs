//! CPU architectural state and the arithmetic/logic primitives that every
//! instruction handler composes with an addressing-mode resolver.

use crate::flags::Status;
use crate::memory::{Memory, RESET_VECTOR};
use crate::opcodes::OPCODES;

#[derive(Debug, Clone)]
pub struct Cpu {
    pub pc: u16,
    pub sp: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub status: Status,
    /// Remaining cycle budget for the current `execute` call. Decremented by
    /// every bus primitive and addressing-mode resolver as it runs; may go
    /// negative since the dispatch loop only checks it between instructions.
    pub(crate) cycles: i32,
}

impl Cpu {
    pub fn new() -> Self {
        Cpu {
            pc: 0,
            sp: 0,
            a: 0,
            x: 0,
            y: 0,
            status: Status::cleared(),
            cycles: 0,
        }
    }

    /// Zeroes memory and resets architectural state: `PC ← 0xFFFC`,
    /// `SP ← 0xFF`, `A = X = Y = 0`, all flags cleared.
    ///
    /// `PC` is set to the literal address of the reset vector rather than
    /// dereferencing it, since `reset` has just zeroed memory and so has
    /// nothing meaningful to dereference yet; see the design notes on
    /// reset-vector loading for the full rationale.
    pub fn reset(&mut self, memory: &mut Memory) {
        memory.initialize();
        self.pc = RESET_VECTOR;
        self.sp = 0xFF;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.status = Status::cleared();
        self.cycles = 0;
    }

    /// Runs the fetch-decode-dispatch loop until the cycle budget is
    /// exhausted (`cycles <= 0`), then returns the number of cycles
    /// actually spent. The budget may be over-spent by the final
    /// instruction, since the loop only checks between instructions.
    pub fn execute(&mut self, memory: &mut Memory, budget: i32) -> i32 {
        self.cycles = budget;
        while self.cycles > 0 {
            let opcode = self.fetch_byte(memory);
            match OPCODES.get(&opcode) {
                Some(def) => (def.exec)(self, memory, def.mode),
                None => {
                    log::warn!("unimplemented 6502 opcode {opcode:#04x} at {:#06x}", self.pc.wrapping_sub(1));
                }
            }
        }
        budget - self.cycles
    }

    // -- arithmetic / logical primitives (§4.4) ---------------------------

    /// `A ← A + M + C`, updating C, V, N, Z. Decimal mode has no effect on
    /// this crate's arithmetic; the D flag is observable but inert.
    pub(crate) fn adc(&mut self, operand: u8) {
        let carry_in: u16 = if self.status.contains(Status::CARRY) { 1 } else { 0 };
        let sum = self.a as u16 + operand as u16 + carry_in;
        let result = (sum & 0xFF) as u8;
        let same_sign_operands = !((self.a ^ operand) & 0x80 != 0);
        let overflow = same_sign_operands && ((result ^ operand) & 0x80 != 0);
        self.a = result;
        self.status.set_zero_negative(result);
        self.status.set_flag(Status::CARRY, sum > 0xFF);
        self.status.set_flag(Status::OVERFLOW, overflow);
    }

    /// `SBC(M) == ADC(!M)`, one's-complementing the operand.
    pub(crate) fn sbc(&mut self, operand: u8) {
        self.adc(!operand);
    }

    pub(crate) fn and(&mut self, operand: u8) {
        self.a &= operand;
        self.status.set_zero_negative(self.a);
    }

    pub(crate) fn ora(&mut self, operand: u8) {
        self.a |= operand;
        self.status.set_zero_negative(self.a);
    }

    pub(crate) fn eor(&mut self, operand: u8) {
        self.a ^= operand;
        self.status.set_zero_negative(self.a);
    }

    pub(crate) fn asl(&mut self, value: u8) -> u8 {
        self.status.set_flag(Status::CARRY, value & 0x80 != 0);
        let result = value << 1;
        self.status.set_zero_negative(result);
        self.tick(1);
        result
    }

    pub(crate) fn lsr(&mut self, value: u8) -> u8 {
        self.status.set_flag(Status::CARRY, value & 0x01 != 0);
        let result = value >> 1;
        // Bit 7 of the result is always 0, so NEGATIVE is always cleared.
        self.status.set_zero_negative(result);
        self.tick(1);
        result
    }

    pub(crate) fn rol(&mut self, value: u8) -> u8 {
        let new_bit0 = self.status.contains(Status::CARRY) as u8;
        self.status.set_flag(Status::CARRY, value & 0x80 != 0);
        let result = (value << 1) | new_bit0;
        self.status.set_zero_negative(result);
        self.tick(1);
        result
    }

    pub(crate) fn ror(&mut self, value: u8) -> u8 {
        let new_bit7 = if self.status.contains(Status::CARRY) { 0x80 } else { 0 };
        self.status.set_flag(Status::CARRY, value & 0x01 != 0);
        let result = (value >> 1) | new_bit7;
        self.status.set_zero_negative(result);
        self.tick(1);
        result
    }

    /// Shared by `INC` and `DEC`: same RMW tick shape as `asl`/`lsr`/`rol`/`ror`,
    /// the read and write themselves are charged by the caller's bus calls.
    pub(crate) fn inc_mem(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.status.set_zero_negative(result);
        self.tick(1);
        result
    }

    pub(crate) fn dec_mem(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.status.set_zero_negative(result);
        self.tick(1);
        result
    }

    pub(crate) fn bit(&mut self, value: u8) {
        self.status.set_flag(Status::ZERO, (self.a & value) == 0);
        self.status.set_flag(Status::NEGATIVE, value & 0x80 != 0);
        self.status.set_flag(Status::OVERFLOW, value & 0x40 != 0);
    }

    /// `CMP`/`CPX`/`CPY` share this: compares `register` (the actual named
    /// register for the opcode, not always A) against `operand`.
    pub(crate) fn compare(&mut self, register: u8, operand: u8) {
        let result = register.wrapping_sub(operand);
        self.status.set_flag(Status::CARRY, register >= operand);
        self.status.set_flag(Status::ZERO, register == operand);
        self.status.set_flag(Status::NEGATIVE, result & 0x80 != 0);
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Cpu::new()
    }
}
