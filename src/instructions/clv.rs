use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::flags::Status;
use crate::memory::Memory;

/// There is no `SEV`; `CLV` is the only instruction that touches `OVERFLOW` directly.
pub(crate) fn exec(cpu: &mut Cpu, _memory: &mut Memory, _mode: AddressingMode) {
    cpu.status.set_flag(Status::OVERFLOW, false);
    cpu.tick(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clears_overflow_flag() {
        let mut cpu = Cpu::new();
        let mut mem = Memory::new();
        cpu.status.set_flag(Status::OVERFLOW, true);
        exec(&mut cpu, &mut mem, AddressingMode::Implied);
        assert!(!cpu.status.contains(Status::OVERFLOW));
    }
}
