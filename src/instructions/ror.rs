use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::Memory;

pub(crate) fn exec(cpu: &mut Cpu, memory: &mut Memory, mode: AddressingMode) {
    if mode == AddressingMode::Accumulator {
        cpu.a = cpu.ror(cpu.a);
        return;
    }
    let addr = cpu.operand_address(memory, mode);
    let value = cpu.read_byte(memory, addr);
    let result = cpu.ror(value);
    cpu.write_byte(memory, addr, result);
}
