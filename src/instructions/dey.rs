use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::Memory;

pub(crate) fn exec(cpu: &mut Cpu, _memory: &mut Memory, _mode: AddressingMode) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zero_negative(cpu.y);
    cpu.tick(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_from_zero_to_0xff() {
        let mut cpu = Cpu::new();
        let mut mem = Memory::new();
        cpu.y = 0x00;
        exec(&mut cpu, &mut mem, AddressingMode::Implied);
        assert_eq!(cpu.y, 0xFF);
        assert!(cpu.status.contains(crate::flags::Status::NEGATIVE));
    }
}
