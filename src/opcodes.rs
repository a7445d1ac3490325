//! The 256-entry opcode dispatch table.
//!
//! Maps each of the 151 legal opcode bytes to the addressing mode it uses
//! and the handler that implements it. Unlisted bytes are illegal/undocumented
//! opcodes; `Cpu::execute` reports them via `log::warn!` and moves on (§4.8,
//! §7). There is no `bytes`/`cycles` column here: instruction length and
//! cycle cost both fall out of live addressing-mode resolution (`Cpu::tick`),
//! not a static per-opcode table — see the design notes on why a static table
//! cannot express the page-crossing rule without duplicating that logic.

use phf::phf_map;

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::instructions;
use crate::memory::Memory;

pub(crate) struct OpcodeDef {
    pub name: &'static str,
    pub mode: AddressingMode,
    pub exec: fn(&mut Cpu, &mut Memory, AddressingMode),
}

macro_rules! op {
    ($name:literal, $mode:expr, $module:path) => {
        OpcodeDef {
            name: $name,
            mode: $mode,
            exec: $module,
        }
    };
}

pub(crate) static OPCODES: phf::Map<u8, OpcodeDef> = phf_map! {
    // ADC
    0x69u8 => op!("ADC", AddressingMode::Immediate, instructions::adc::exec),
    0x65u8 => op!("ADC", AddressingMode::ZeroPage, instructions::adc::exec),
    0x75u8 => op!("ADC", AddressingMode::ZeroPageX, instructions::adc::exec),
    0x6Du8 => op!("ADC", AddressingMode::Absolute, instructions::adc::exec),
    0x7Du8 => op!("ADC", AddressingMode::AbsoluteXRead, instructions::adc::exec),
    0x79u8 => op!("ADC", AddressingMode::AbsoluteYRead, instructions::adc::exec),
    0x61u8 => op!("ADC", AddressingMode::IndexedIndirect, instructions::adc::exec),
    0x71u8 => op!("ADC", AddressingMode::IndirectYRead, instructions::adc::exec),

    // AND
    0x29u8 => op!("AND", AddressingMode::Immediate, instructions::and::exec),
    0x25u8 => op!("AND", AddressingMode::ZeroPage, instructions::and::exec),
    0x35u8 => op!("AND", AddressingMode::ZeroPageX, instructions::and::exec),
    0x2Du8 => op!("AND", AddressingMode::Absolute, instructions::and::exec),
    0x3Du8 => op!("AND", AddressingMode::AbsoluteXRead, instructions::and::exec),
    0x39u8 => op!("AND", AddressingMode::AbsoluteYRead, instructions::and::exec),
    0x21u8 => op!("AND", AddressingMode::IndexedIndirect, instructions::and::exec),
    0x31u8 => op!("AND", AddressingMode::IndirectYRead, instructions::and::exec),

    // ASL
    0x0Au8 => op!("ASL", AddressingMode::Accumulator, instructions::asl::exec),
    0x06u8 => op!("ASL", AddressingMode::ZeroPage, instructions::asl::exec),
    0x16u8 => op!("ASL", AddressingMode::ZeroPageX, instructions::asl::exec),
    0x0Eu8 => op!("ASL", AddressingMode::Absolute, instructions::asl::exec),
    0x1Eu8 => op!("ASL", AddressingMode::AbsoluteXWrite, instructions::asl::exec),

    // Branches
    0x90u8 => op!("BCC", AddressingMode::Relative, instructions::bcc::exec),
    0xB0u8 => op!("BCS", AddressingMode::Relative, instructions::bcs::exec),
    0xF0u8 => op!("BEQ", AddressingMode::Relative, instructions::beq::exec),
    0x30u8 => op!("BMI", AddressingMode::Relative, instructions::bmi::exec),
    0xD0u8 => op!("BNE", AddressingMode::Relative, instructions::bne::exec),
    0x10u8 => op!("BPL", AddressingMode::Relative, instructions::bpl::exec),
    0x50u8 => op!("BVC", AddressingMode::Relative, instructions::bvc::exec),
    0x70u8 => op!("BVS", AddressingMode::Relative, instructions::bvs::exec),

    // BIT
    0x24u8 => op!("BIT", AddressingMode::ZeroPage, instructions::bit::exec),
    0x2Cu8 => op!("BIT", AddressingMode::Absolute, instructions::bit::exec),

    // BRK
    0x00u8 => op!("BRK", AddressingMode::Implied, instructions::brk::exec),

    // Flag instructions
    0x18u8 => op!("CLC", AddressingMode::Implied, instructions::clc::exec),
    0xD8u8 => op!("CLD", AddressingMode::Implied, instructions::cld::exec),
    0x58u8 => op!("CLI", AddressingMode::Implied, instructions::cli::exec),
    0xB8u8 => op!("CLV", AddressingMode::Implied, instructions::clv::exec),
    0x38u8 => op!("SEC", AddressingMode::Implied, instructions::sec::exec),
    0xF8u8 => op!("SED", AddressingMode::Implied, instructions::sed::exec),
    0x78u8 => op!("SEI", AddressingMode::Implied, instructions::sei::exec),

    // CMP
    0xC9u8 => op!("CMP", AddressingMode::Immediate, instructions::cmp::exec),
    0xC5u8 => op!("CMP", AddressingMode::ZeroPage, instructions::cmp::exec),
    0xD5u8 => op!("CMP", AddressingMode::ZeroPageX, instructions::cmp::exec),
    0xCDu8 => op!("CMP", AddressingMode::Absolute, instructions::cmp::exec),
    0xDDu8 => op!("CMP", AddressingMode::AbsoluteXRead, instructions::cmp::exec),
    0xD9u8 => op!("CMP", AddressingMode::AbsoluteYRead, instructions::cmp::exec),
    0xC1u8 => op!("CMP", AddressingMode::IndexedIndirect, instructions::cmp::exec),
    0xD1u8 => op!("CMP", AddressingMode::IndirectYRead, instructions::cmp::exec),

    // CPX / CPY
    0xE0u8 => op!("CPX", AddressingMode::Immediate, instructions::cpx::exec),
    0xE4u8 => op!("CPX", AddressingMode::ZeroPage, instructions::cpx::exec),
    0xECu8 => op!("CPX", AddressingMode::Absolute, instructions::cpx::exec),
    0xC0u8 => op!("CPY", AddressingMode::Immediate, instructions::cpy::exec),
    0xC4u8 => op!("CPY", AddressingMode::ZeroPage, instructions::cpy::exec),
    0xCCu8 => op!("CPY", AddressingMode::Absolute, instructions::cpy::exec),

    // DEC
    0xC6u8 => op!("DEC", AddressingMode::ZeroPage, instructions::dec::exec),
    0xD6u8 => op!("DEC", AddressingMode::ZeroPageX, instructions::dec::exec),
    0xCEu8 => op!("DEC", AddressingMode::Absolute, instructions::dec::exec),
    0xDEu8 => op!("DEC", AddressingMode::AbsoluteXWrite, instructions::dec::exec),

    // DEX / DEY / INX / INY
    0xCAu8 => op!("DEX", AddressingMode::Implied, instructions::dex::exec),
    0x88u8 => op!("DEY", AddressingMode::Implied, instructions::dey::exec),
    0xE8u8 => op!("INX", AddressingMode::Implied, instructions::inx::exec),
    0xC8u8 => op!("INY", AddressingMode::Implied, instructions::iny::exec),

    // EOR
    0x49u8 => op!("EOR", AddressingMode::Immediate, instructions::eor::exec),
    0x45u8 => op!("EOR", AddressingMode::ZeroPage, instructions::eor::exec),
    0x55u8 => op!("EOR", AddressingMode::ZeroPageX, instructions::eor::exec),
    0x4Du8 => op!("EOR", AddressingMode::Absolute, instructions::eor::exec),
    0x5Du8 => op!("EOR", AddressingMode::AbsoluteXRead, instructions::eor::exec),
    0x59u8 => op!("EOR", AddressingMode::AbsoluteYRead, instructions::eor::exec),
    0x41u8 => op!("EOR", AddressingMode::IndexedIndirect, instructions::eor::exec),
    0x51u8 => op!("EOR", AddressingMode::IndirectYRead, instructions::eor::exec),

    // INC
    0xE6u8 => op!("INC", AddressingMode::ZeroPage, instructions::inc::exec),
    0xF6u8 => op!("INC", AddressingMode::ZeroPageX, instructions::inc::exec),
    0xEEu8 => op!("INC", AddressingMode::Absolute, instructions::inc::exec),
    0xFEu8 => op!("INC", AddressingMode::AbsoluteXWrite, instructions::inc::exec),

    // JMP / JSR
    0x4Cu8 => op!("JMP", AddressingMode::Absolute, instructions::jmp::exec),
    0x6Cu8 => op!("JMP", AddressingMode::Indirect, instructions::jmp::exec),
    0x20u8 => op!("JSR", AddressingMode::Absolute, instructions::jsr::exec),

    // LDA
    0xA9u8 => op!("LDA", AddressingMode::Immediate, instructions::lda::exec),
    0xA5u8 => op!("LDA", AddressingMode::ZeroPage, instructions::lda::exec),
    0xB5u8 => op!("LDA", AddressingMode::ZeroPageX, instructions::lda::exec),
    0xADu8 => op!("LDA", AddressingMode::Absolute, instructions::lda::exec),
    0xBDu8 => op!("LDA", AddressingMode::AbsoluteXRead, instructions::lda::exec),
    0xB9u8 => op!("LDA", AddressingMode::AbsoluteYRead, instructions::lda::exec),
    0xA1u8 => op!("LDA", AddressingMode::IndexedIndirect, instructions::lda::exec),
    0xB1u8 => op!("LDA", AddressingMode::IndirectYRead, instructions::lda::exec),

    // LDX
    0xA2u8 => op!("LDX", AddressingMode::Immediate, instructions::ldx::exec),
    0xA6u8 => op!("LDX", AddressingMode::ZeroPage, instructions::ldx::exec),
    0xB6u8 => op!("LDX", AddressingMode::ZeroPageY, instructions::ldx::exec),
    0xAEu8 => op!("LDX", AddressingMode::Absolute, instructions::ldx::exec),
    0xBEu8 => op!("LDX", AddressingMode::AbsoluteYRead, instructions::ldx::exec),

    // LDY
    0xA0u8 => op!("LDY", AddressingMode::Immediate, instructions::ldy::exec),
    0xA4u8 => op!("LDY", AddressingMode::ZeroPage, instructions::ldy::exec),
    0xB4u8 => op!("LDY", AddressingMode::ZeroPageX, instructions::ldy::exec),
    0xACu8 => op!("LDY", AddressingMode::Absolute, instructions::ldy::exec),
    0xBCu8 => op!("LDY", AddressingMode::AbsoluteXRead, instructions::ldy::exec),

    // LSR
    0x4Au8 => op!("LSR", AddressingMode::Accumulator, instructions::lsr::exec),
    0x46u8 => op!("LSR", AddressingMode::ZeroPage, instructions::lsr::exec),
    0x56u8 => op!("LSR", AddressingMode::ZeroPageX, instructions::lsr::exec),
    0x4Eu8 => op!("LSR", AddressingMode::Absolute, instructions::lsr::exec),
    0x5Eu8 => op!("LSR", AddressingMode::AbsoluteXWrite, instructions::lsr::exec),

    // NOP
    0xEAu8 => op!("NOP", AddressingMode::Implied, instructions::nop::exec),

    // ORA
    0x09u8 => op!("ORA", AddressingMode::Immediate, instructions::ora::exec),
    0x05u8 => op!("ORA", AddressingMode::ZeroPage, instructions::ora::exec),
    0x15u8 => op!("ORA", AddressingMode::ZeroPageX, instructions::ora::exec),
    0x0Du8 => op!("ORA", AddressingMode::Absolute, instructions::ora::exec),
    0x1Du8 => op!("ORA", AddressingMode::AbsoluteXRead, instructions::ora::exec),
    0x19u8 => op!("ORA", AddressingMode::AbsoluteYRead, instructions::ora::exec),
    0x01u8 => op!("ORA", AddressingMode::IndexedIndirect, instructions::ora::exec),
    0x11u8 => op!("ORA", AddressingMode::IndirectYRead, instructions::ora::exec),

    // Stack
    0x48u8 => op!("PHA", AddressingMode::Implied, instructions::pha::exec),
    0x08u8 => op!("PHP", AddressingMode::Implied, instructions::php::exec),
    0x68u8 => op!("PLA", AddressingMode::Implied, instructions::pla::exec),
    0x28u8 => op!("PLP", AddressingMode::Implied, instructions::plp::exec),

    // ROL
    0x2Au8 => op!("ROL", AddressingMode::Accumulator, instructions::rol::exec),
    0x26u8 => op!("ROL", AddressingMode::ZeroPage, instructions::rol::exec),
    0x36u8 => op!("ROL", AddressingMode::ZeroPageX, instructions::rol::exec),
    0x2Eu8 => op!("ROL", AddressingMode::Absolute, instructions::rol::exec),
    0x3Eu8 => op!("ROL", AddressingMode::AbsoluteXWrite, instructions::rol::exec),

    // ROR
    0x6Au8 => op!("ROR", AddressingMode::Accumulator, instructions::ror::exec),
    0x66u8 => op!("ROR", AddressingMode::ZeroPage, instructions::ror::exec),
    0x76u8 => op!("ROR", AddressingMode::ZeroPageX, instructions::ror::exec),
    0x6Eu8 => op!("ROR", AddressingMode::Absolute, instructions::ror::exec),
    0x7Eu8 => op!("ROR", AddressingMode::AbsoluteXWrite, instructions::ror::exec),

    // RTI / RTS
    0x40u8 => op!("RTI", AddressingMode::Implied, instructions::rti::exec),
    0x60u8 => op!("RTS", AddressingMode::Implied, instructions::rts::exec),

    // SBC
    0xE9u8 => op!("SBC", AddressingMode::Immediate, instructions::sbc::exec),
    0xE5u8 => op!("SBC", AddressingMode::ZeroPage, instructions::sbc::exec),
    0xF5u8 => op!("SBC", AddressingMode::ZeroPageX, instructions::sbc::exec),
    0xEDu8 => op!("SBC", AddressingMode::Absolute, instructions::sbc::exec),
    0xFDu8 => op!("SBC", AddressingMode::AbsoluteXRead, instructions::sbc::exec),
    0xF9u8 => op!("SBC", AddressingMode::AbsoluteYRead, instructions::sbc::exec),
    0xE1u8 => op!("SBC", AddressingMode::IndexedIndirect, instructions::sbc::exec),
    0xF1u8 => op!("SBC", AddressingMode::IndirectYRead, instructions::sbc::exec),

    // STA
    0x85u8 => op!("STA", AddressingMode::ZeroPage, instructions::sta::exec),
    0x95u8 => op!("STA", AddressingMode::ZeroPageX, instructions::sta::exec),
    0x8Du8 => op!("STA", AddressingMode::Absolute, instructions::sta::exec),
    0x9Du8 => op!("STA", AddressingMode::AbsoluteXWrite, instructions::sta::exec),
    0x99u8 => op!("STA", AddressingMode::AbsoluteYWrite, instructions::sta::exec),
    0x81u8 => op!("STA", AddressingMode::IndexedIndirect, instructions::sta::exec),
    0x91u8 => op!("STA", AddressingMode::IndirectYWrite, instructions::sta::exec),

    // STX / STY
    0x86u8 => op!("STX", AddressingMode::ZeroPage, instructions::stx::exec),
    0x96u8 => op!("STX", AddressingMode::ZeroPageY, instructions::stx::exec),
    0x8Eu8 => op!("STX", AddressingMode::Absolute, instructions::stx::exec),
    0x84u8 => op!("STY", AddressingMode::ZeroPage, instructions::sty::exec),
    0x94u8 => op!("STY", AddressingMode::ZeroPageX, instructions::sty::exec),
    0x8Cu8 => op!("STY", AddressingMode::Absolute, instructions::sty::exec),

    // Register transfers
    0xAAu8 => op!("TAX", AddressingMode::Implied, instructions::tax::exec),
    0xA8u8 => op!("TAY", AddressingMode::Implied, instructions::tay::exec),
    0xBAu8 => op!("TSX", AddressingMode::Implied, instructions::tsx::exec),
    0x8Au8 => op!("TXA", AddressingMode::Implied, instructions::txa::exec),
    0x9Au8 => op!("TXS", AddressingMode::Implied, instructions::txs::exec),
    0x98u8 => op!("TYA", AddressingMode::Implied, instructions::tya::exec),
};
