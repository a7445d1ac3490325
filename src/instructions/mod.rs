//! One module per mnemonic. Each exposes `pub(crate) fn exec(cpu, memory, mode)`,
//! composing an addressing-mode resolver (`Cpu::operand_address` /
//! `Cpu::read_operand`) with the arithmetic/logic primitives on `Cpu`.
//! The opcode table in `crate::opcodes` is what actually ties a byte value
//! and an [`AddressingMode`](crate::addressing::AddressingMode) to one of these.

pub(crate) mod adc;
pub(crate) mod and;
pub(crate) mod asl;
pub(crate) mod bcc;
pub(crate) mod bcs;
pub(crate) mod beq;
pub(crate) mod bit;
pub(crate) mod bmi;
pub(crate) mod bne;
pub(crate) mod bpl;
pub(crate) mod brk;
pub(crate) mod bvc;
pub(crate) mod bvs;
pub(crate) mod clc;
pub(crate) mod cld;
pub(crate) mod cli;
pub(crate) mod clv;
pub(crate) mod cmp;
pub(crate) mod cpx;
pub(crate) mod cpy;
pub(crate) mod dec;
pub(crate) mod dex;
pub(crate) mod dey;
pub(crate) mod eor;
pub(crate) mod inc;
pub(crate) mod inx;
pub(crate) mod iny;
pub(crate) mod jmp;
pub(crate) mod jsr;
pub(crate) mod lda;
pub(crate) mod ldx;
pub(crate) mod ldy;
pub(crate) mod lsr;
pub(crate) mod nop;
pub(crate) mod ora;
pub(crate) mod pha;
pub(crate) mod php;
pub(crate) mod pla;
pub(crate) mod plp;
pub(crate) mod rol;
pub(crate) mod ror;
pub(crate) mod rti;
pub(crate) mod rts;
pub(crate) mod sbc;
pub(crate) mod sec;
pub(crate) mod sed;
pub(crate) mod sei;
pub(crate) mod sta;
pub(crate) mod stx;
pub(crate) mod sty;
pub(crate) mod tax;
pub(crate) mod tay;
pub(crate) mod tsx;
pub(crate) mod txa;
pub(crate) mod txs;
pub(crate) mod tya;
