// Soarer's Converter config disassembler - shared library
// Symbol tables for keycodes and macro opcodes

pub mod protocol;

pub use protocol::SoarerSymbols;
pub use soarer_config::{DecodeReport, Disassembler, LineSink};
