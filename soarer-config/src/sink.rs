//! Output sink for rendered script lines.

/// Append-only destination for rendered lines.
///
/// Lines are passed without a trailing newline; the sink decides how to
/// terminate them.
pub trait LineSink {
    fn line(&mut self, line: &str);

    /// Emit a `# `-prefixed comment line.
    fn comment(&mut self, text: &str) {
        self.line(&format!("# {text}"));
    }
}

impl LineSink for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// Newline-terminated text, ready to be written out in one go.
impl LineSink for String {
    fn line(&mut self, line: &str) {
        self.push_str(line);
        self.push('\n');
    }
}
