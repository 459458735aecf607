//! Decoder for the binary configuration files loaded by Soarer's Converter
//! keyboard firmware.
//!
//! A file is a 6-byte header followed by length-prefixed blocks (layer
//! definitions, remaps, macros, device config, key matrix). The
//! [`Disassembler`] renders it back into the declarative script the firmware
//! tooling compiles from, with diagnostics emitted as `#` comment lines.
//!
//! ```ignore
//! use soarer_config::Disassembler;
//!
//! let mut text = String::new();
//! let report = Disassembler::new(&symbols).decode_file(&bytes, &mut text);
//! if report.had_error {
//!     eprintln!("errors encountered");
//! }
//! ```

pub mod bitfield;
pub mod block;
pub mod error;
pub mod file;
pub mod header;
pub mod reader;
pub mod sink;
pub mod symbols;

pub use bitfield::{mods, PolarPortPin, PortPin, PortPinRange};
pub use block::{BlockFrame, BlockKind};
pub use error::DecodeError;
pub use file::{DecodeReport, Disassembler};
pub use header::FileHeader;
pub use sink::LineSink;
pub use symbols::{ArgKind, Symbols};
