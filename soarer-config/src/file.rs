//! Whole-file decoding: header, then blocks until the buffer is exhausted.

use tracing::{debug, info};

use crate::block::{self, report};
use crate::error::DecodeError;
use crate::header::{force_protocol_name, force_set_name, FileHeader};
use crate::reader::ByteReader;
use crate::sink::LineSink;
use crate::symbols::Symbols;

/// Outcome of a decode; the details are in the rendered diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Any block (or the header) produced a diagnostic.
    pub had_error: bool,
    /// Blocks handed to a block decoder.
    pub blocks: usize,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        !self.had_error
    }
}

/// Renders a binary configuration as script text.
pub struct Disassembler<'a> {
    symbols: &'a dyn Symbols,
    hex_dump_unknown: bool,
}

impl<'a> Disassembler<'a> {
    pub fn new(symbols: &'a dyn Symbols) -> Self {
        Self {
            symbols,
            hex_dump_unknown: true,
        }
    }

    /// Dump the body of unrecognized block types as hex comments.
    pub fn with_hex_dump(mut self, enabled: bool) -> Self {
        self.hex_dump_unknown = enabled;
        self
    }

    /// Decode a single block spanning exactly its declared length.
    pub fn decode_block(&self, block: &[u8], out: &mut dyn LineSink) -> bool {
        block::decode_block(block, self.symbols, self.hex_dump_unknown, out)
    }

    fn decode_header(&self, header: &FileHeader, out: &mut dyn LineSink) -> bool {
        let [sig1, sig2] = header.signature;
        out.comment(&format!(
            "signature: {} {}",
            signature_byte(sig1),
            signature_byte(sig2)
        ));
        out.comment(&format!("version: {} {}", header.version[0], header.version[1]));

        let mut had_error = false;
        if let Some(set) = header.force_set() {
            match force_set_name(set) {
                Some(name) => out.line(&format!("force {name}")),
                None => {
                    out.line("force ERROR");
                    report(
                        &DecodeError::InvalidForce {
                            field: "set",
                            value: set,
                        },
                        out,
                    );
                    had_error = true;
                }
            }
        }
        if let Some(protocol) = header.force_protocol() {
            match force_protocol_name(protocol) {
                Some(name) => out.line(&format!("force {name}")),
                None => {
                    out.line("force ERROR");
                    report(
                        &DecodeError::InvalidForce {
                            field: "protocol",
                            value: protocol,
                        },
                        out,
                    );
                    had_error = true;
                }
            }
        }
        had_error
    }

    /// Decode a complete file.
    ///
    /// Decoding is best-effort: a bad block is reported and skipped using its
    /// declared length. Only a zero or overrunning block length stops early.
    pub fn decode_file(&self, buf: &[u8], out: &mut dyn LineSink) -> DecodeReport {
        let mut summary = DecodeReport::default();
        out.comment(&format!("length: {}", buf.len()));

        let mut r = ByteReader::new(buf);
        let header = match r.read::<FileHeader>() {
            Ok(header) => header,
            Err(_) => {
                report(&DecodeError::FileTooShort { len: buf.len() }, out);
                summary.had_error = true;
                return summary;
            }
        };
        summary.had_error |= self.decode_header(header, out);

        while let Ok(length) = r.peek_u8() {
            let offset = r.position();
            let declared = usize::from(length);
            if declared == 0 {
                report(&DecodeError::ZeroLengthBlock { offset }, out);
                summary.had_error = true;
                break;
            }
            let block = match r.take(declared) {
                Ok(block) => block,
                Err(_) => {
                    report(
                        &DecodeError::BlockOverrun {
                            offset,
                            declared,
                            available: r.remaining(),
                        },
                        out,
                    );
                    summary.had_error = true;
                    break;
                }
            };
            debug!(offset, declared, "block frame");
            summary.had_error |= self.decode_block(block, out);
            summary.blocks += 1;
        }

        info!(
            blocks = summary.blocks,
            had_error = summary.had_error,
            "decode finished"
        );
        summary
    }
}

/// Printable ASCII as-is, anything else as two hex digits.
fn signature_byte(b: u8) -> String {
    if b.is_ascii_graphic() {
        char::from(b).to_string()
    } else {
        format!("{b:02X}")
    }
}
