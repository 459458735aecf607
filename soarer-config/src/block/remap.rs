//! `remapblock`: keycode substitutions on one layer.

use crate::error::Result;
use crate::reader::ByteReader;
use crate::sink::LineSink;
use crate::symbols::Symbols;

/// Body: layer, count, then `count` pairs of (from, to) keycodes.
pub fn decode(body: &[u8], symbols: &dyn Symbols, out: &mut dyn LineSink) -> Result<()> {
    out.line("remapblock");
    let mut r = ByteReader::new(body);
    let head = r.take(2)?;
    let (layer, count) = (head[0], head[1]);
    out.line(&format!("layer {layer}"));
    out.comment(&format!("count: {count}"));
    r.expect_exact(usize::from(count) * 2)?;
    for _ in 0..count {
        let from = r.u8()?;
        let to = r.u8()?;
        out.line(&format!(
            "\t{} {}",
            symbols.key_name(from),
            symbols.key_name(to)
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::symbols::stub::StubSymbols;

    #[test]
    fn pairs_resolve_through_symbols() {
        let mut out: Vec<String> = Vec::new();
        decode(&[1, 2, 0x04, 0x05, 0x39, 0xE0], &StubSymbols, &mut out).unwrap();
        assert_eq!(
            out,
            [
                "remapblock",
                "layer 1",
                "# count: 2",
                "\tA B",
                "\tCAPS_LOCK 0xE0"
            ]
        );
    }

    #[test]
    fn layer_without_count_is_truncated() {
        let mut out: Vec<String> = Vec::new();
        assert!(matches!(
            decode(&[1], &StubSymbols, &mut out),
            Err(DecodeError::Truncated { needed: 2, .. })
        ));
        assert_eq!(out, ["remapblock"]);
    }

    #[test]
    fn odd_trailing_byte_is_mismatch() {
        let mut out: Vec<String> = Vec::new();
        let err = decode(&[0, 1, 0x04, 0x05, 0x06], &StubSymbols, &mut out).unwrap_err();
        assert_eq!(
            err,
            DecodeError::SizeMismatch {
                expected: 2,
                actual: 3
            }
        );
    }
}
