//! Bit-field codecs shared by the block decoders.
//!
//! Pins are packed as `0b_0p_ppp_nnn`: bits 0-2 pin number, bits 3-5 port
//! index (`A` + n), bit 6 polarity where it applies.

use std::fmt;

/// Modifier bitmask layout, identical to the HID boot-report modifier byte.
pub mod mods {
    pub const LCTRL: u8 = 0x01;
    pub const LSHIFT: u8 = 0x02;
    pub const LALT: u8 = 0x04;
    pub const LGUI: u8 = 0x08;
    pub const RCTRL: u8 = 0x10;
    pub const RSHIFT: u8 = 0x20;
    pub const RALT: u8 = 0x40;
    pub const RGUI: u8 = 0x80;

    /// Side-agnostic names, indexed by bit position within either nibble.
    pub static GENERIC_NAMES: [&str; 4] = ["ctrl", "shift", "alt", "gui"];

    /// Hand-specific names, indexed by bit position.
    pub static HANDED_NAMES: [&str; 8] = [
        "lctrl", "lshift", "lalt", "lgui", "rctrl", "rshift", "ralt", "rgui",
    ];

    /// Names of every hand-specific modifier set in `bits`, low bit first.
    pub fn handed_names(bits: u8) -> impl Iterator<Item = &'static str> {
        HANDED_NAMES
            .iter()
            .enumerate()
            .filter(move |&(i, _)| bits & (1u8 << i) != 0)
            .map(|(_, name)| *name)
    }
}

fn port_letter(value: u8) -> char {
    char::from(b'A' + ((value >> 3) & 0x07))
}

fn pin_number(value: u8) -> u8 {
    value & 0x07
}

/// A microcontroller pin, rendered `P<port><pin>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortPin(pub u8);

impl PortPin {
    pub fn port(self) -> char {
        port_letter(self.0)
    }

    pub fn pin(self) -> u8 {
        pin_number(self.0)
    }
}

impl fmt::Display for PortPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port(), self.pin())
    }
}

/// A pin with an active-high (`+`) or active-low (`-`) polarity in bit 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolarPortPin(pub u8);

impl PolarPortPin {
    pub fn active_high(self) -> bool {
        self.0 & 0x40 != 0
    }

    pub fn pin(self) -> PortPin {
        PortPin(self.0)
    }
}

impl fmt::Display for PolarPortPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.active_high() { '+' } else { '-' };
        write!(f, "{sign}{}", self.pin())
    }
}

/// A contiguous run of pins on one port wide enough to binary-encode
/// `count` lines, rendered `P<port><high>:<low>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortPinRange {
    pub base: PortPin,
    pub count: u8,
}

impl PortPinRange {
    pub fn new(base: u8, count: u8) -> Self {
        Self {
            base: PortPin(base),
            count,
        }
    }

    /// Address bits needed to select one of `count` lines.
    pub fn width(self) -> u8 {
        let mut n = self.count.saturating_sub(1);
        let mut bits = 0;
        while n != 0 {
            n >>= 1;
            bits += 1;
        }
        bits
    }

    /// Highest pin of the run; a zero-width run collapses onto the base pin.
    pub fn high_pin(self) -> u8 {
        self.base.pin() + self.width().saturating_sub(1)
    }
}

impl fmt::Display for PortPinRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{}{}:{}",
            self.base.port(),
            self.high_pin(),
            self.base.pin()
        )
    }
}
