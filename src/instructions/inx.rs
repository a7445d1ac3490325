use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::Memory;

pub(crate) fn exec(cpu: &mut Cpu, _memory: &mut Memory, _mode: AddressingMode) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zero_negative(cpu.x);
    cpu.tick(1);
}
