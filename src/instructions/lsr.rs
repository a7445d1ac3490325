use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::Memory;

pub(crate) fn exec(cpu: &mut Cpu, memory: &mut Memory, mode: AddressingMode) {
    if mode == AddressingMode::Accumulator {
        cpu.a = cpu.lsr(cpu.a);
        return;
    }
    let addr = cpu.operand_address(memory, mode);
    let value = cpu.read_byte(memory, addr);
    let result = cpu.lsr(value);
    cpu.write_byte(memory, addr, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Status;

    #[test]
    fn negative_flag_is_always_cleared() {
        let mut cpu = Cpu::new();
        let mut mem = Memory::new();
        cpu.a = 0b1000_0001;
        exec(&mut cpu, &mut mem, AddressingMode::Accumulator);
        assert_eq!(cpu.a, 0b0100_0000);
        assert!(cpu.status.contains(Status::CARRY), "bit 0 was set");
        assert!(!cpu.status.contains(Status::NEGATIVE));
    }
}
