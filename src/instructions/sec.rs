use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::flags::Status;
use crate::memory::Memory;

pub(crate) fn exec(cpu: &mut Cpu, _memory: &mut Memory, _mode: AddressingMode) {
    cpu.status.set_flag(Status::CARRY, true);
    cpu.tick(1);
}
