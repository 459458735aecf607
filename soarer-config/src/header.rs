//! Fixed file header.

use zerocopy::{FromBytes, Immutable, KnownLayout};

/// Size of [`FileHeader`] on the wire.
pub const HEADER_LEN: usize = 6;

/// The six bytes at the start of every configuration file.
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub version: [u8; 2],
    /// Low nibble: scan-set override. High nibble: protocol override.
    pub force: u8,
    _reserved: u8,
}

impl FileHeader {
    /// Forced scan-code set, if one is requested.
    pub fn force_set(&self) -> Option<u8> {
        Some(self.force & 0x0F).filter(|&v| v != 0)
    }

    /// Forced keyboard protocol, if one is requested.
    pub fn force_protocol(&self) -> Option<u8> {
        Some(self.force >> 4).filter(|&v| v != 0)
    }
}

pub fn force_set_name(value: u8) -> Option<&'static str> {
    match value {
        1 => Some("set1"),
        2 => Some("set2"),
        3 => Some("set3"),
        4 => Some("set2ext"),
        _ => None,
    }
}

pub fn force_protocol_name(value: u8) -> Option<&'static str> {
    match value {
        1 => Some("xt"),
        2 => Some("at"),
        _ => None,
    }
}
