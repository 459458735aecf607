// Soarer's Converter symbol tables
// Keycode names follow the converter's script vocabulary

use std::borrow::Cow;

use soarer_config::{ArgKind, Symbols};

/// HID keyboard usage codes and the converter's extended codes
pub mod hid {
    /// Script name of a keycode, `None` if the code is unassigned
    #[rustfmt::skip]
    pub fn key_name(code: u8) -> Option<&'static str> {
        let name = match code {
            0x00 => "UNASSIGNED", 0x01 => "OVERRUN_ERROR", 0x02 => "POST_FAIL",
            0x03 => "ERROR_UNDEFINED",
            0x04 => "A", 0x05 => "B", 0x06 => "C", 0x07 => "D",
            0x08 => "E", 0x09 => "F", 0x0A => "G", 0x0B => "H",
            0x0C => "I", 0x0D => "J", 0x0E => "K", 0x0F => "L",
            0x10 => "M", 0x11 => "N", 0x12 => "O", 0x13 => "P",
            0x14 => "Q", 0x15 => "R", 0x16 => "S", 0x17 => "T",
            0x18 => "U", 0x19 => "V", 0x1A => "W", 0x1B => "X",
            0x1C => "Y", 0x1D => "Z",
            0x1E => "1", 0x1F => "2", 0x20 => "3", 0x21 => "4",
            0x22 => "5", 0x23 => "6", 0x24 => "7", 0x25 => "8",
            0x26 => "9", 0x27 => "0",
            0x28 => "ENTER", 0x29 => "ESC", 0x2A => "BACKSPACE",
            0x2B => "TAB", 0x2C => "SPACE", 0x2D => "MINUS", 0x2E => "EQUAL",
            0x2F => "LEFT_BRACE", 0x30 => "RIGHT_BRACE", 0x31 => "BACKSLASH",
            0x32 => "EUROPE_1", 0x33 => "SEMICOLON", 0x34 => "QUOTE",
            0x35 => "BACK_QUOTE", 0x36 => "COMMA", 0x37 => "PERIOD",
            0x38 => "SLASH", 0x39 => "CAPS_LOCK",
            0x3A => "F1", 0x3B => "F2", 0x3C => "F3", 0x3D => "F4",
            0x3E => "F5", 0x3F => "F6", 0x40 => "F7", 0x41 => "F8",
            0x42 => "F9", 0x43 => "F10", 0x44 => "F11", 0x45 => "F12",
            0x46 => "PRINTSCREEN", 0x47 => "SCROLL_LOCK", 0x48 => "PAUSE",
            0x49 => "INSERT", 0x4A => "HOME", 0x4B => "PAGE_UP",
            0x4C => "DELETE", 0x4D => "END", 0x4E => "PAGE_DOWN",
            0x4F => "RIGHT", 0x50 => "LEFT", 0x51 => "DOWN", 0x52 => "UP",
            0x53 => "NUM_LOCK", 0x54 => "PAD_SLASH", 0x55 => "PAD_ASTERIX",
            0x56 => "PAD_MINUS", 0x57 => "PAD_PLUS", 0x58 => "PAD_ENTER",
            0x59 => "PAD_1", 0x5A => "PAD_2", 0x5B => "PAD_3", 0x5C => "PAD_4",
            0x5D => "PAD_5", 0x5E => "PAD_6", 0x5F => "PAD_7", 0x60 => "PAD_8",
            0x61 => "PAD_9", 0x62 => "PAD_0", 0x63 => "PAD_PERIOD",
            0x64 => "EUROPE_2", 0x65 => "APP", 0x66 => "POWER",
            0x67 => "PAD_EQUALS",
            0x68 => "F13", 0x69 => "F14", 0x6A => "F15", 0x6B => "F16",
            0x6C => "F17", 0x6D => "F18", 0x6E => "F19", 0x6F => "F20",
            0x70 => "F21", 0x71 => "F22", 0x72 => "F23", 0x73 => "F24",
            0x74 => "EXECUTE", 0x75 => "HELP", 0x76 => "MENU", 0x77 => "SELECT",
            0x78 => "STOP", 0x79 => "AGAIN", 0x7A => "UNDO", 0x7B => "CUT",
            0x7C => "COPY", 0x7D => "PASTE", 0x7E => "FIND", 0x7F => "MUTE",
            0x80 => "VOLUME_UP", 0x81 => "VOLUME_DOWN",
            0x82 => "LOCKING_CAPS_LOCK", 0x83 => "LOCKING_NUM_LOCK",
            0x84 => "LOCKING_SCROLL_LOCK", 0x85 => "PAD_COMMA",
            0x86 => "PAD_EQUALS_AS400",
            0x87 => "INTERNATIONAL_1", 0x88 => "INTERNATIONAL_2",
            0x89 => "INTERNATIONAL_3", 0x8A => "INTERNATIONAL_4",
            0x8B => "INTERNATIONAL_5", 0x8C => "INTERNATIONAL_6",
            0x8D => "INTERNATIONAL_7", 0x8E => "INTERNATIONAL_8",
            0x8F => "INTERNATIONAL_9",
            0x90 => "LANG_1", 0x91 => "LANG_2", 0x92 => "LANG_3",
            0x93 => "LANG_4", 0x94 => "LANG_5", 0x95 => "LANG_6",
            0x96 => "LANG_7", 0x97 => "LANG_8", 0x98 => "LANG_9",
            0x99 => "ALT_ERASE", 0x9A => "SYSREQ", 0x9B => "CANCEL",
            0x9C => "CLEAR", 0x9D => "PRIOR", 0x9E => "RETURN",
            0x9F => "SEPARATOR", 0xA0 => "OUT", 0xA1 => "OPER",
            0xA2 => "CLEAR_AGAIN", 0xA3 => "CRSEL_PROPS", 0xA4 => "EXSEL",

            // Converter extensions in the reserved range
            0xA8 => "SYSTEM_POWER", 0xA9 => "SYSTEM_SLEEP", 0xAA => "SYSTEM_WAKE",
            0xAB => "AUX1", 0xAC => "AUX2",
            0xB0 => "MEDIA_NEXT_TRACK", 0xB1 => "MEDIA_PREV_TRACK",
            0xB2 => "MEDIA_STOP", 0xB3 => "MEDIA_PLAY_PAUSE",
            0xB4 => "MEDIA_MUTE", 0xB5 => "MEDIA_BASS_BOOST",
            0xB6 => "MEDIA_LOUDNESS", 0xB7 => "MEDIA_VOLUME_UP",
            0xB8 => "MEDIA_VOLUME_DOWN", 0xB9 => "MEDIA_BASS_UP",
            0xBA => "MEDIA_BASS_DOWN", 0xBB => "MEDIA_TREBLE_UP",
            0xBC => "MEDIA_TREBLE_DOWN", 0xBD => "MEDIA_MEDIA_SELECT",
            0xBE => "MEDIA_MAIL", 0xBF => "MEDIA_CALCULATOR",
            0xC0 => "MEDIA_MY_COMPUTER", 0xC1 => "MEDIA_WWW_SEARCH",
            0xC2 => "MEDIA_WWW_HOME", 0xC3 => "MEDIA_WWW_BACK",
            0xC4 => "MEDIA_WWW_FORWARD", 0xC5 => "MEDIA_WWW_STOP",
            0xC6 => "MEDIA_WWW_REFRESH", 0xC7 => "MEDIA_WWW_FAVORITES",
            0xC8 => "MEDIA_EJECT", 0xC9 => "MEDIA_SCREENSAVE",
            0xCA => "MEDIA_REC", 0xCB => "MEDIA_REWIND", 0xCC => "MEDIA_MINIMIZE",

            0xE0 => "LCTRL", 0xE1 => "LSHIFT", 0xE2 => "LALT", 0xE3 => "LGUI",
            0xE4 => "RCTRL", 0xE5 => "RSHIFT", 0xE6 => "RALT", 0xE7 => "RGUI",

            0xE8 => "SELECT_0", 0xE9 => "SELECT_1", 0xEA => "SELECT_2",
            0xEB => "SELECT_3", 0xEC => "SELECT_4", 0xED => "SELECT_5",
            0xEE => "SELECT_6", 0xEF => "SELECT_7",
            0xF1 => "FN1", 0xF2 => "FN2", 0xF3 => "FN3", 0xF4 => "FN4",
            0xF5 => "FN5", 0xF6 => "FN6", 0xF7 => "FN7", 0xF8 => "FN8",
            _ => return None,
        };
        Some(name)
    }
}

/// Macro step opcodes (low 7 bits of the step's opcode byte)
pub mod macro_op {
    use soarer_config::ArgKind;

    pub const NOP: u8 = 0;
    pub const PRESS: u8 = 1;
    pub const MAKE: u8 = 2;
    pub const BREAK: u8 = 3;
    pub const ASSIGN_META: u8 = 4;
    pub const SET_META: u8 = 5;
    pub const CLEAR_META: u8 = 6;
    pub const TOGGLE_META: u8 = 7;
    pub const POP_META: u8 = 8;
    pub const POP_ALL_META: u8 = 9;
    pub const DELAY: u8 = 10;
    pub const CLEAR_ALL: u8 = 11;
    pub const BOOT: u8 = 12;

    pub fn name(op: u8) -> Option<&'static str> {
        match op {
            NOP => Some("NOP"),
            PRESS => Some("PRESS"),
            MAKE => Some("MAKE"),
            BREAK => Some("BREAK"),
            ASSIGN_META => Some("ASSIGN_META"),
            SET_META => Some("SET_META"),
            CLEAR_META => Some("CLEAR_META"),
            TOGGLE_META => Some("TOGGLE_META"),
            POP_META => Some("POP_META"),
            POP_ALL_META => Some("POP_ALL_META"),
            DELAY => Some("DELAY"),
            CLEAR_ALL => Some("CLEAR_ALL"),
            BOOT => Some("BOOT"),
            _ => None,
        }
    }

    pub fn arg_kind(op: u8) -> Option<ArgKind> {
        match op {
            PRESS | MAKE | BREAK => Some(ArgKind::Keycode),
            ASSIGN_META | SET_META | CLEAR_META | TOGGLE_META => Some(ArgKind::Modifiers),
            DELAY => Some(ArgKind::Delay),
            NOP | POP_META | POP_ALL_META | CLEAR_ALL | BOOT => Some(ArgKind::Nothing),
            _ => None,
        }
    }
}

/// The converter's own symbol tables; unknown codes render as hex
#[derive(Debug, Clone, Copy, Default)]
pub struct SoarerSymbols;

impl Symbols for SoarerSymbols {
    fn key_name(&self, code: u8) -> Cow<'static, str> {
        match hid::key_name(code) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("0x{code:02X}")),
        }
    }

    fn macro_op_name(&self, op: u8) -> Cow<'static, str> {
        match macro_op::name(op) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("OP_0x{op:02X}")),
        }
    }

    fn macro_arg_kind(&self, op: u8) -> Option<ArgKind> {
        macro_op::arg_kind(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(hid::key_name(0x04), Some("A"));
        assert_eq!(hid::key_name(0x39), Some("CAPS_LOCK"));
        assert_eq!(hid::key_name(0xE3), Some("LGUI"));
        assert_eq!(hid::key_name(0xF1), Some("FN1"));
        assert_eq!(hid::key_name(0xA5), None);
    }

    #[test]
    fn test_unknown_key_renders_hex() {
        assert_eq!(SoarerSymbols.key_name(0xA5), "0xA5");
        assert_eq!(SoarerSymbols.key_name(0x29), "ESC");
    }

    #[test]
    fn test_macro_ops() {
        assert_eq!(SoarerSymbols.macro_op_name(macro_op::PRESS), "PRESS");
        assert_eq!(SoarerSymbols.macro_op_name(0x7F), "OP_0x7F");
        assert_eq!(
            SoarerSymbols.macro_arg_kind(macro_op::TOGGLE_META),
            Some(ArgKind::Modifiers)
        );
        assert_eq!(SoarerSymbols.macro_arg_kind(macro_op::DELAY), Some(ArgKind::Delay));
        assert_eq!(SoarerSymbols.macro_arg_kind(macro_op::BOOT), Some(ArgKind::Nothing));
        assert_eq!(SoarerSymbols.macro_arg_kind(0x7F), None);
    }

    #[test]
    fn test_every_named_op_has_an_arg_kind() {
        for op in 0..0x80 {
            assert_eq!(macro_op::name(op).is_some(), macro_op::arg_kind(op).is_some());
        }
    }
}
