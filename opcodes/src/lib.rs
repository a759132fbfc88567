mod mcode;
mod opcodes;

pub use mcode::{Condition, MCode, R16, R8};
pub use opcodes::Opcode;
