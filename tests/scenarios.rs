//! End-to-end scenarios driving the public `Cpu`/`Memory` surface exactly as
//! a host would: load bytes, point PC at them (via the reset vector or
//! directly), run `execute`, inspect the result.

use mos6502_core::{Cpu, Memory, Status};

fn cpu_with_reset_vector(start: u16) -> (Cpu, Memory) {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mut memory); // zeroes memory first; vector bytes below must follow
    memory.write(0xFFFC, (start & 0xFF) as u8);
    memory.write(0xFFFD, (start >> 8) as u8);
    cpu.pc = start;
    (cpu, memory)
}

#[test]
fn lda_immediate_zero_flag() {
    let (mut cpu, mut memory) = cpu_with_reset_vector(0xFF00);
    memory.load(0xFF00, &[0xA9, 0x00]).unwrap();
    let spent = cpu.execute(&mut memory, 2);
    assert_eq!(cpu.a, 0);
    assert!(cpu.status.contains(Status::ZERO));
    assert!(!cpu.status.contains(Status::NEGATIVE));
    assert_eq!(spent, 2);
}

#[test]
fn lda_immediate_negative() {
    let (mut cpu, mut memory) = cpu_with_reset_vector(0xFF00);
    memory.load(0xFF00, &[0xA9, 0x80]).unwrap();
    cpu.execute(&mut memory, 2);
    assert_eq!(cpu.a, 0x80);
    assert!(!cpu.status.contains(Status::ZERO));
    assert!(cpu.status.contains(Status::NEGATIVE));
}

#[test]
fn jsr_and_rts_round_trip() {
    let (mut cpu, mut memory) = cpu_with_reset_vector(0x0600);
    memory.load(0x0600, &[0x20, 0x09, 0x06]).unwrap(); // JSR $0609
    memory.load(0x0603, &[0xA9, 0x42]).unwrap(); // LDA #$42
    memory.load(0x0605, &[0x00]).unwrap(); // BRK (never reached in this budget)
    memory.load(0x0609, &[0x60]).unwrap(); // RTS

    // JSR (6) + RTS (6) = 12, leaving PC at 0x0603 with A still 0x00.
    cpu.execute(&mut memory, 12);
    assert_eq!(cpu.pc, 0x0603);
    assert_eq!(cpu.a, 0x00);

    // Two more cycles runs the LDA immediate.
    cpu.execute(&mut memory, 2);
    assert_eq!(cpu.a, 0x42);
}

#[test]
fn adc_with_overflow() {
    let (mut cpu, mut memory) = cpu_with_reset_vector(0xFF00);
    memory.load(0xFF00, &[0x69, 0x50]).unwrap();
    cpu.a = 0x50;
    cpu.execute(&mut memory, 2);
    assert_eq!(cpu.a, 0xA0);
    assert!(cpu.status.contains(Status::NEGATIVE));
    assert!(cpu.status.contains(Status::OVERFLOW));
    assert!(!cpu.status.contains(Status::ZERO));
    assert!(!cpu.status.contains(Status::CARRY));
}

#[test]
fn adc_with_carry_in() {
    let (mut cpu, mut memory) = cpu_with_reset_vector(0xFF00);
    memory.load(0xFF00, &[0x69, 0x01]).unwrap();
    cpu.a = 0x01;
    cpu.status.set_flag(Status::CARRY, true);
    cpu.execute(&mut memory, 2);
    assert_eq!(cpu.a, 0x03);
    assert!(!cpu.status.contains(Status::CARRY));
    assert!(!cpu.status.contains(Status::OVERFLOW));
    assert!(!cpu.status.contains(Status::NEGATIVE));
    assert!(!cpu.status.contains(Status::ZERO));
}

#[test]
fn branch_crossing_a_page_costs_four_cycles() {
    let (mut cpu, mut memory) = cpu_with_reset_vector(0x10FE);
    memory.load(0x10FE, &[0xF0, 0x02]).unwrap(); // BEQ +2
    cpu.status.set_flag(Status::ZERO, true);
    let spent = cpu.execute(&mut memory, 4);
    assert_eq!(cpu.pc, 0x1102);
    assert_eq!(spent, 4, "2 (fetch opcode + offset) + 1 (taken) + 1 (page cross)");
}

#[test]
fn brk_and_rti_round_trip_through_the_irq_vector() {
    let (mut cpu, mut memory) = cpu_with_reset_vector(0x0600);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0xC0);
    memory.load(0x0600, &[0x00]).unwrap(); // BRK
    memory.load(0xC000, &[0x40]).unwrap(); // RTI back out
    cpu.execute(&mut memory, 7);
    assert_eq!(cpu.pc, 0xC000);
    assert!(cpu.status.contains(Status::INTERRUPT));

    cpu.execute(&mut memory, 6);
    assert_eq!(cpu.pc, 0x0602, "RTI restores the address BRK pushed, no +1");
    assert!(!cpu.status.contains(Status::BREAK));
}

#[test]
fn unknown_opcode_is_consumed_and_logged_not_fatal() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut cpu, mut memory) = cpu_with_reset_vector(0xFF00);
    memory.load(0xFF00, &[0x02, 0xA9, 0x07]).unwrap(); // KIL, then LDA #$07
    let spent = cpu.execute(&mut memory, 3);
    assert_eq!(cpu.a, 0x07);
    assert_eq!(spent, 3);
}
