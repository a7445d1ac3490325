use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::flags::Status;
use crate::memory::Memory;

pub(crate) fn exec(cpu: &mut Cpu, _memory: &mut Memory, _mode: AddressingMode) {
    cpu.status.set_flag(Status::INTERRUPT, false);
    cpu.tick(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clears_interrupt_disable() {
        let mut cpu = Cpu::new();
        let mut mem = Memory::new();
        cpu.status.set_flag(Status::INTERRUPT, true);
        exec(&mut cpu, &mut mem, AddressingMode::Implied);
        assert!(!cpu.status.contains(Status::INTERRUPT));
    }
}
