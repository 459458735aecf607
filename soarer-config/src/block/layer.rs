//! `layerblock`: which Fn-key combinations select which layer.

use crate::error::Result;
use crate::reader::ByteReader;
use crate::sink::LineSink;

/// Body: count, then `count` pairs of (fn-key mask, layer).
pub fn decode(body: &[u8], out: &mut dyn LineSink) -> Result<()> {
    out.line("layerblock");
    let mut r = ByteReader::new(body);
    let count = r.u8()?;
    out.comment(&format!("count: {count}"));
    r.expect_exact(usize::from(count) * 2)?;
    for _ in 0..count {
        let fn_mask = r.u8()?;
        let layer = r.u8()?;
        let mut tokens: Vec<String> = (0..8u8)
            .filter(|&bit| fn_mask & (1 << bit) != 0)
            .map(|bit| format!("fn{}", bit + 1))
            .collect();
        tokens.push(layer.to_string());
        out.line(&format!("\t{}", tokens.join(" ")));
    }
    Ok(())
}
