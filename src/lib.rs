//! A cycle-counted software interpreter for the MOS 6502.
//!
//! [`Cpu::execute`] fetches, decodes, and dispatches opcodes against a flat
//! 64 KiB [`Memory`] until a caller-supplied cycle budget is exhausted. The
//! 151 legal opcodes and their thirteen addressing modes are implemented in
//! [`instructions`], wired up through the dispatch table in [`opcodes`].
//!
//! ROM loading, bus mapping, and any host entry point are outside this
//! crate's scope — it interprets instructions against whatever memory image
//! the caller has already assembled.

pub mod addressing;
pub mod cpu;
pub mod flags;
pub mod memory;
mod instructions;
mod opcodes;

pub use addressing::AddressingMode;
pub use cpu::Cpu;
pub use flags::Status;
pub use memory::{LoadError, Memory, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
