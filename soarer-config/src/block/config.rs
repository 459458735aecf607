//! Device-config block: per-keyboard settings such as lock-LED pins.
//!
//! Config items are top-level directives in the script, so the block keyword
//! itself is emitted as a comment.

use tracing::warn;

use crate::bitfield::PolarPortPin;
use crate::error::Result;
use crate::reader::ByteReader;
use crate::sink::LineSink;

pub const LED_CAPS: u8 = 1;
pub const LED_SCROLL: u8 = 2;
pub const LED_NUM: u8 = 3;

/// How an item's raw value byte is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `+PB3` / `-PB3`
    PolarizedPin,
}

impl ValueFormat {
    pub fn render(self, value: u8) -> String {
        match self {
            Self::PolarizedPin => PolarPortPin(value).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigItem {
    pub code: u8,
    pub name: &'static str,
    pub format: ValueFormat,
}

pub static CONFIG_ITEMS: &[ConfigItem] = &[
    ConfigItem {
        code: LED_CAPS,
        name: "led caps",
        format: ValueFormat::PolarizedPin,
    },
    ConfigItem {
        code: LED_SCROLL,
        name: "led scroll",
        format: ValueFormat::PolarizedPin,
    },
    ConfigItem {
        code: LED_NUM,
        name: "led num",
        format: ValueFormat::PolarizedPin,
    },
];

pub fn lookup(code: u8) -> Option<&'static ConfigItem> {
    CONFIG_ITEMS.iter().find(|item| item.code == code)
}

/// Body: count, then `count` pairs of (item code, value).
///
/// Unrecognized item codes are reported and skipped.
pub fn decode(body: &[u8], out: &mut dyn LineSink) -> Result<()> {
    out.comment("configblock");
    let mut r = ByteReader::new(body);
    let count = r.u8()?;
    out.comment(&format!("config count: {count}"));
    r.expect_exact(usize::from(count) * 2)?;
    for _ in 0..count {
        let code = r.u8()?;
        let value = r.u8()?;
        match lookup(code) {
            Some(item) => out.line(&format!("\t{} {}", item.name, item.format.render(value))),
            None => {
                warn!(code, "unrecognized config item");
                out.comment(&format!("WARNING: config item unrecognized: {code:02X}"));
            }
        }
    }
    Ok(())
}
