//! `matrix`: key-matrix scan wiring and the keycode at each intersection.
//!
//! Layout: a 7-byte [`MatrixHeader`], a 3-byte [`MuxDescriptor`] when mux
//! strobes are used, then the strobe, sense and unstrobed pin arrays, then
//! the keycodes row by row (mux-strobe rows, strobe rows, one per unstrobed
//! pin).

use tracing::debug;
use zerocopy::{FromBytes, Immutable, KnownLayout};

use crate::bitfield::{PolarPortPin, PortPin, PortPinRange};
use crate::error::{DecodeError, Result};
use crate::reader::ByteReader;
use crate::sink::LineSink;
use crate::symbols::Symbols;

/// Marks an optional mux pin as not connected.
pub const NO_PIN: u8 = 0xFF;

#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct MatrixHeader {
    pub scan_flags: u8,
    pub debounce_flags: u8,
    pub sense_delay: u8,
    pub mux_strobes: u8,
    pub strobes: u8,
    pub senses: u8,
    pub unstrobed: u8,
}

impl MatrixHeader {
    pub fn scan_rate(&self) -> u8 {
        (self.scan_flags & 0x07) + 1
    }

    pub fn strobe_mode(&self) -> u8 {
        (self.scan_flags >> 3) & 0x07
    }

    pub fn sense_polarity(&self) -> u8 {
        (self.scan_flags >> 6) & 0x01
    }

    pub fn debounce(&self) -> u8 {
        self.debounce_flags & 0x07
    }

    pub fn blocking(&self) -> u8 {
        (self.debounce_flags >> 4) & 0x01
    }

    pub fn debounce_method(&self) -> u8 {
        (self.debounce_flags >> 5) & 0x01
    }

    /// Keycodes that follow the pin arrays.
    pub fn key_count(&self) -> usize {
        (usize::from(self.mux_strobes) + usize::from(self.strobes)) * usize::from(self.senses)
            + usize::from(self.unstrobed)
    }
}

#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct MuxDescriptor {
    pub port: u8,
    pub enable: u8,
    pub gate: u8,
}

fn key_row(codes: &[u8], symbols: &dyn Symbols) -> String {
    codes
        .iter()
        .map(|&code| format!(" {}", symbols.key_name(code)))
        .collect()
}

pub fn decode(body: &[u8], symbols: &dyn Symbols, out: &mut dyn LineSink) -> Result<()> {
    out.line("matrix");
    let mut r = ByteReader::new(body);
    let header = *r.read::<MatrixHeader>()?;
    let mux = if header.mux_strobes > 0 {
        Some(*r.read::<MuxDescriptor>()?)
    } else {
        None
    };

    let strobe_count = usize::from(header.strobes);
    let sense_count = usize::from(header.senses);
    let unstrobed_count = usize::from(header.unstrobed);
    let needed = strobe_count + sense_count + unstrobed_count + header.key_count();
    if r.remaining() < needed {
        return Err(DecodeError::Truncated {
            needed,
            available: r.remaining(),
        });
    }
    debug!(?header, needed, "matrix layout");
    let strobes = r.take(strobe_count)?;
    let senses = r.take(sense_count)?;
    let unstrobed = r.take(unstrobed_count)?;
    let keys = r.take(header.key_count())?;

    out.line(&format!("\tscanrate {}", header.scan_rate()));
    out.line(&format!("\tstrobe_mode {}", header.strobe_mode()));
    out.line(&format!("\tsense_polarity {}", header.sense_polarity()));
    out.line(&format!("\tdebounce {}", header.debounce()));
    out.line(&format!("\tblocking {}", header.blocking()));
    out.line(&format!("\tdebounce_method {}", header.debounce_method()));
    out.line(&format!("\tsense_delay {}", header.sense_delay));

    if let Some(mux) = mux {
        out.line(&format!(
            "\tmuxstrobe_port {}",
            PortPinRange::new(mux.port, header.mux_strobes)
        ));
        if mux.enable != NO_PIN {
            out.line(&format!("\tmuxstrobe_enable {}", PolarPortPin(mux.enable)));
        }
        if mux.gate != NO_PIN {
            out.line(&format!("\tmuxstrobe_gate {}", PolarPortPin(mux.gate)));
        }
    }

    if !senses.is_empty() {
        let pins: Vec<String> = senses.iter().map(|&p| PortPin(p).to_string()).collect();
        out.line(&format!("\tsense {}", pins.join(" ")));
    }

    // rows are zero-width when there are no sense lines
    let mut keys = ByteReader::new(keys);
    for row in 0..header.mux_strobes {
        let codes = keys.take(sense_count)?;
        out.line(&format!("\tmuxstrobe {row}{}", key_row(codes, symbols)));
    }
    for &strobe in strobes {
        let codes = keys.take(sense_count)?;
        out.line(&format!(
            "\tstrobe {}{}",
            PortPin(strobe),
            key_row(codes, symbols)
        ));
    }
    for &pin in unstrobed {
        let code = keys.u8()?;
        out.line(&format!(
            "\tunstrobed {} {}",
            PolarPortPin(pin),
            symbols.key_name(code)
        ));
    }
    Ok(())
}
