//! Indentation-aware line buffer used by the renderer.

pub(super) struct SourceWriter {
    buffer: String,
    indent: usize,
    unit: String,
}

impl SourceWriter {
    pub(super) fn new(indent_width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent: 0,
            unit: " ".repeat(indent_width),
        }
    }

    pub(super) const fn indent(&mut self) {
        self.indent += 1;
    }

    pub(super) const fn outdent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub(super) fn line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.buffer.push_str(&self.unit);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    pub(super) fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Writes `{` at the current level and indents.
    pub(super) fn open_block(&mut self) {
        self.line("{");
        self.indent();
    }

    /// Outdents and writes `}`.
    pub(super) fn close_block(&mut self) {
        self.outdent();
        self.line("}");
    }

    pub(super) fn finish(self) -> String {
        self.buffer
    }
}
