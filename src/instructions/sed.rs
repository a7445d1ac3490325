use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::flags::Status;
use crate::memory::Memory;

pub(crate) fn exec(cpu: &mut Cpu, _memory: &mut Memory, _mode: AddressingMode) {
    cpu.status.set_flag(Status::DECIMAL, true);
    cpu.tick(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_decimal_flag_but_it_is_otherwise_inert() {
        let mut cpu = Cpu::new();
        let mut mem = Memory::new();
        exec(&mut cpu, &mut mem, AddressingMode::Implied);
        assert!(cpu.status.contains(Status::DECIMAL));

        cpu.a = 0x09;
        cpu.adc(0x01);
        assert_eq!(cpu.a, 0x0A, "D has no effect on ADC in this interpreter");
    }
}
