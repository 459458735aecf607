//! Block framing and dispatch.
//!
//! Every block starts with a length byte (counting itself) and a type byte:
//!
//! ```text
//! bit  7      6        5..3      2..0
//!      has_id has_set  selector  type
//! ```
//!
//! followed by the optional set mask (1 byte) and keyboard id (2 bytes, LE).

pub mod config;
pub mod layer;
pub mod macros;
pub mod matrix;
pub mod remap;

use std::fmt;

use tracing::{debug, warn};

use crate::error::{DecodeError, Result};
use crate::reader::ByteReader;
use crate::sink::LineSink;
use crate::symbols::Symbols;

const HAS_SET: u8 = 0x40;
const HAS_ID: u8 = 0x80;

/// Scan-code set names, indexed by bit in a block's set mask.
pub static SET_NAMES: [&str; 8] = [
    "set1",
    "set2",
    "set3",
    "set2ext",
    "INVALIDSET",
    "INVALIDSET",
    "INVALIDSET",
    "INVALIDSET",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Layer,
    Remap,
    Macro,
    Config,
    Matrix,
    Unknown(u8),
}

impl BlockKind {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Self::Layer,
            1 => Self::Remap,
            2 => Self::Macro,
            3 => Self::Config,
            4 => Self::Matrix,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layer => f.write_str("layer"),
            Self::Remap => f.write_str("remap"),
            Self::Macro => f.write_str("macro"),
            Self::Config => f.write_str("config"),
            Self::Matrix => f.write_str("matrix"),
            Self::Unknown(n) => write!(f, "unknown({n})"),
        }
    }
}

/// Decoded block header: the length byte, type byte and optional filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFrame {
    pub length: u8,
    pub kind: BlockKind,
    /// `ifselect` group, 0 = any.
    pub selector: u8,
    /// `ifset` mask, present when the has-set flag is set.
    pub set_mask: Option<u8>,
    /// `ifkeyboard` id, present when the has-id flag is set.
    pub keyboard_id: Option<u16>,
}

impl BlockFrame {
    pub fn parse(r: &mut ByteReader<'_>) -> Result<Self> {
        let head = r.take(2)?;
        let (length, type_byte) = (head[0], head[1]);
        let optional =
            usize::from(type_byte & HAS_SET != 0) + 2 * usize::from(type_byte & HAS_ID != 0);
        if r.remaining() < optional {
            return Err(DecodeError::Truncated {
                needed: optional,
                available: r.remaining(),
            });
        }
        let set_mask = if type_byte & HAS_SET != 0 {
            Some(r.u8()?)
        } else {
            None
        };
        let keyboard_id = if type_byte & HAS_ID != 0 {
            Some(r.u16_le()?)
        } else {
            None
        };
        Ok(Self {
            length,
            kind: BlockKind::from_bits(type_byte),
            selector: (type_byte >> 3) & 0x07,
            set_mask,
            keyboard_id,
        })
    }

    /// Emit the `ifset`, `ifkeyboard` and `ifselect` directives.
    pub fn render_filters(&self, out: &mut dyn LineSink) {
        out.line(&format!("ifset {}", set_names(self.set_mask.unwrap_or(0))));
        match self.keyboard_id {
            Some(id) => out.line(&format!("ifkeyboard {id:04X}")),
            None => out.line("ifkeyboard any"),
        }
        match self.selector {
            0 => out.line("ifselect any"),
            n => out.line(&format!("ifselect {n}")),
        }
    }
}

/// Names of the sets in `mask`, low bit first, or `any` for an empty mask.
pub fn set_names(mask: u8) -> String {
    if mask == 0 {
        return "any".to_owned();
    }
    SET_NAMES
        .iter()
        .enumerate()
        .filter(|&(i, _)| mask & (1u8 << i) != 0)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an error as a diagnostic comment.
pub(crate) fn report(err: &DecodeError, out: &mut dyn LineSink) {
    warn!(%err, "decode diagnostic");
    out.comment(&format!("ERROR: {err}"));
}

fn hex_dump(body: &[u8], out: &mut dyn LineSink) {
    for chunk in body.chunks(16) {
        let bytes: Vec<String> = chunk.iter().map(|b| format!("{b:02X}")).collect();
        out.comment(&bytes.join(" "));
    }
}

/// Decode one block; `block` spans exactly its declared length.
///
/// Returns `true` if a diagnostic was emitted. Once the filter directives
/// are out, the block is always closed with `end`.
pub fn decode_block(
    block: &[u8],
    symbols: &dyn Symbols,
    hex_dump_unknown: bool,
    out: &mut dyn LineSink,
) -> bool {
    if block.len() < 2 {
        report(
            &DecodeError::Truncated {
                needed: 2,
                available: block.len(),
            },
            out,
        );
        return true;
    }
    out.line("");
    out.comment(&format!("block length: {}", block[0]));

    let mut r = ByteReader::new(block);
    let frame = match BlockFrame::parse(&mut r) {
        Ok(frame) => frame,
        Err(err) => {
            report(&err, out);
            return true;
        }
    };
    debug!(kind = %frame.kind, length = frame.length, "block");
    frame.render_filters(out);

    let body = r.rest();
    let result = match frame.kind {
        BlockKind::Layer => layer::decode(body, out),
        BlockKind::Remap => remap::decode(body, symbols, out),
        BlockKind::Macro => macros::decode(body, symbols, out),
        BlockKind::Config => config::decode(body, out),
        BlockKind::Matrix => matrix::decode(body, symbols, out),
        BlockKind::Unknown(kind) => Err(DecodeError::UnknownBlockType(kind)),
    };
    let had_error = match result {
        Ok(()) => false,
        Err(err) => {
            report(&err, out);
            if matches!(err, DecodeError::UnknownBlockType(_)) && hex_dump_unknown {
                hex_dump(body, out);
            }
            true
        }
    };
    out.line("end");
    had_error
}
