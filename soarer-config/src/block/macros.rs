//! `macroblock`: keystroke macros bound to a trigger key and modifier state.
//!
//! Each record is a 5-byte [`MacroHeader`] followed by the press steps and
//! then the release steps, two bytes per step.

use std::borrow::Cow;

use tracing::debug;
use zerocopy::{FromBytes, Immutable, KnownLayout};

use crate::bitfield::mods;
use crate::error::Result;
use crate::reader::ByteReader;
use crate::sink::LineSink;
use crate::symbols::{ArgKind, Symbols};

/// Opcode bit requesting the current modifiers be pushed before the step runs.
pub const PUSH_META: u8 = 0x80;

const STEP_COUNT_MASK: u8 = 0x3F;
const RESTORE_META: u8 = 0x40;

#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct MacroHeader {
    pub trigger: u8,
    pub desired_meta: u8,
    pub matched_meta: u8,
    pub press_flags: u8,
    pub release_flags: u8,
}

impl MacroHeader {
    pub fn press_steps(&self) -> usize {
        usize::from(self.press_flags & STEP_COUNT_MASK)
    }

    pub fn release_steps(&self) -> usize {
        usize::from(self.release_flags & STEP_COUNT_MASK)
    }

    /// Whether modifiers pushed during the press phase are restored on release.
    pub fn restores_meta(&self) -> bool {
        self.release_flags & RESTORE_META != 0
    }

    /// Total encoded size of the record this header introduces.
    pub fn record_len(&self) -> usize {
        std::mem::size_of::<Self>() + 2 * (self.press_steps() + self.release_steps())
    }
}

/// Describe which modifier state triggers a macro.
///
/// A desired-but-unmatched right-hand bit means "either hand" and is rendered
/// with the generic name, consuming both hand bits. Remaining matched bits
/// are rendered by hand, with a leading `-` when the modifier must be up.
pub fn match_description(desired: u8, matched: u8) -> Vec<String> {
    let mut desired = desired;
    let mut matched = matched;
    let unhanded = desired & !matched & 0xF0;
    let mut tokens = Vec::new();

    for (i, name) in mods::GENERIC_NAMES.iter().enumerate() {
        let mask = (1u8 << (i + 4)) | (1u8 << i);
        if unhanded & mask != 0 {
            tokens.push((*name).to_owned());
            desired &= !mask;
            matched &= !mask;
        }
    }

    for (i, name) in mods::HANDED_NAMES.iter().enumerate() {
        let mask = 1u8 << i;
        if matched & mask != 0 {
            if desired & mask == 0 {
                tokens.push(format!("-{name}"));
            } else {
                tokens.push((*name).to_owned());
            }
        }
    }
    tokens
}

/// Render one step as `[PUSH_META] <op> [arg...]`.
pub fn render_step(op_byte: u8, arg: u8, symbols: &dyn Symbols) -> String {
    let op = op_byte & !PUSH_META;
    let mut tokens: Vec<Cow<'static, str>> = Vec::new();
    if op_byte & PUSH_META != 0 {
        tokens.push("PUSH_META".into());
    }
    tokens.push(symbols.macro_op_name(op));
    match symbols.macro_arg_kind(op) {
        Some(ArgKind::Nothing) => {}
        Some(ArgKind::Keycode) => tokens.push(symbols.key_name(arg)),
        Some(ArgKind::Modifiers) => tokens.extend(mods::handed_names(arg).map(Cow::Borrowed)),
        Some(ArgKind::Delay) => tokens.push(arg.to_string().into()),
        None => tokens.push("INVALID".into()),
    }
    tokens.join(" ")
}

fn decode_steps(
    r: &mut ByteReader<'_>,
    count: usize,
    symbols: &dyn Symbols,
    out: &mut dyn LineSink,
) -> Result<()> {
    for _ in 0..count {
        let op = r.u8()?;
        let arg = r.u8()?;
        out.line(&format!("\t{}", render_step(op, arg, symbols)));
    }
    Ok(())
}

/// Decode a single record; `record` must span exactly one macro.
pub fn decode_record(record: &[u8], symbols: &dyn Symbols, out: &mut dyn LineSink) -> Result<()> {
    let mut r = ByteReader::new(record);
    let header = *r.read::<MacroHeader>()?;

    let mut head: Vec<Cow<'static, str>> = vec![symbols.key_name(header.trigger)];
    head.extend(
        match_description(header.desired_meta, header.matched_meta)
            .into_iter()
            .map(Cow::Owned),
    );
    out.line(&format!(
        "macro {} # {:02X} {:02X}",
        head.join(" "),
        header.desired_meta,
        header.matched_meta
    ));

    decode_steps(&mut r, header.press_steps(), symbols, out)?;
    if header.release_steps() > 0 {
        if header.restores_meta() {
            out.line("onbreak");
        } else {
            out.line("onbreak norestoremeta");
        }
        decode_steps(&mut r, header.release_steps(), symbols, out)?;
    }
    out.line("endmacro");
    Ok(())
}

/// Body: count, then `count` variable-length macro records.
pub fn decode(body: &[u8], symbols: &dyn Symbols, out: &mut dyn LineSink) -> Result<()> {
    out.line("macroblock");
    let mut r = ByteReader::new(body);
    let count = r.u8()?;
    out.comment(&format!("macro count: {count}"));
    for index in 0..count {
        let record_len = r.peek::<MacroHeader>()?.record_len();
        debug!(index, record_len, "macro record");
        let record = r.take(record_len)?;
        decode_record(record, symbols, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::symbols::stub::StubSymbols;

    #[test]
    fn header_size_and_record_len() {
        assert_eq!(std::mem::size_of::<MacroHeader>(), 5);
        let header = MacroHeader::read_from_bytes(&[0x04, 0, 0, 0xC2, 0x41]).unwrap();
        assert_eq!(header.press_steps(), 2);
        assert_eq!(header.release_steps(), 1);
        assert!(header.restores_meta());
        assert_eq!(header.record_len(), 11);
    }

    #[test]
    fn unmatched_desired_uses_generic_name() {
        assert_eq!(match_description(mods::LCTRL | mods::RCTRL, 0), ["ctrl"]);
        assert_eq!(
            match_description(mods::LSHIFT | mods::RSHIFT | mods::LGUI | mods::RGUI, 0),
            ["shift", "gui"]
        );
    }

    #[test]
    fn generic_consumes_both_hands() {
        // rctrl desired but unmatched, lctrl matched: only the generic survives
        assert_eq!(
            match_description(mods::LCTRL | mods::RCTRL, mods::LCTRL),
            ["ctrl"]
        );
    }

    #[test]
    fn matched_without_desired_is_exclusion() {
        assert_eq!(
            match_description(mods::LSHIFT, mods::LSHIFT | mods::RALT),
            ["lshift", "-ralt"]
        );
        assert_eq!(match_description(0, mods::LGUI), ["-lgui"]);
        assert!(match_description(0, 0).is_empty());
    }

    #[test]
    fn match_description_is_stable() {
        for desired in [0x00, 0x11, 0x5A, 0xFF] {
            for matched in [0x00, 0x0F, 0xF0, 0xA5] {
                let first = match_description(desired, matched);
                assert_eq!(first, match_description(desired, matched));
                let mut seen = first.clone();
                seen.sort();
                seen.dedup();
                assert_eq!(seen.len(), first.len());
            }
        }
    }

    #[test]
    fn steps_render_by_argument_kind() {
        let s = &StubSymbols;
        assert_eq!(render_step(1, 0x04, s), "PRESS A");
        assert_eq!(render_step(0x80 | 1, 0x05, s), "PUSH_META PRESS B");
        assert_eq!(render_step(5, mods::LSHIFT | mods::RALT, s), "SET_META lshift ralt");
        assert_eq!(render_step(10, 250, s), "DELAY 250");
        assert_eq!(render_step(0, 0x99, s), "NOP");
        assert_eq!(render_step(0x33, 1, s), "OP_0x33 INVALID");
    }

    #[test]
    fn record_with_release_phase() {
        let mut out: Vec<String> = Vec::new();
        let body = [
            1, // count
            0x04, 0x11, 0x00, 0x02, 0x01, // A, ctrl, 2 press, 1 release, no restore
            1, 0x05, 10, 20, // PRESS B, DELAY 20
            5, 0x00, // SET_META
        ];
        decode(&body, &StubSymbols, &mut out).unwrap();
        assert_eq!(
            out,
            [
                "macroblock",
                "# macro count: 1",
                "macro A ctrl # 11 00",
                "\tPRESS B",
                "\tDELAY 20",
                "onbreak norestoremeta",
                "\tSET_META",
                "endmacro",
            ]
        );
    }

    #[test]
    fn restore_flag_drops_qualifier() {
        let mut out: Vec<String> = Vec::new();
        decode(&[1, 0x04, 0, 0, 0, 0x41, 0, 0], &StubSymbols, &mut out).unwrap();
        assert_eq!(out[2], "macro A # 00 00");
        assert_eq!(out[3], "onbreak");
        assert_eq!(out[4], "\tNOP");
    }

    #[test]
    fn short_record_is_truncated_and_stops_block() {
        let mut out: Vec<String> = Vec::new();
        // first record complete, second declares 2+1 steps (11 bytes) but has 10
        let mut body = vec![2, 0x04, 0, 0, 0, 0];
        body.extend_from_slice(&[0x05, 0, 0, 2, 1, 1, 4, 1, 4, 1]);
        let err = decode(&body, &StubSymbols, &mut out).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                needed: 11,
                available: 10
            }
        );
        assert_eq!(out, ["macroblock", "# macro count: 2", "macro A # 00 00", "endmacro"]);
    }

    #[test]
    fn partial_header_is_truncated() {
        let mut out: Vec<String> = Vec::new();
        let err = decode(&[1, 0x04, 0, 0], &StubSymbols, &mut out).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                needed: 5,
                available: 3
            }
        );
    }
}
