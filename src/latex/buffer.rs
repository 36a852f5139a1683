//! Line-oriented output buffer for the dump walk.

/// Accumulates LaTeX fragments during one dump call.
///
/// Fragments are appended as-is and may span or end mid-line; the buffer
/// flattens to whole lines only at the end. The one bulk edit it supports
/// is prefixing every line produced so far, which is how indented
/// paragraphs get their tabs after their subtree has been rendered.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a fragment. Fragments may contain newlines or none at all.
    pub fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    /// Append everything another buffer accumulated.
    pub fn extend(&mut self, other: LineBuffer) {
        self.text.push_str(&other.text);
    }

    /// Prefix every line accumulated so far.
    ///
    /// Lines holding only whitespace stay untouched.
    pub fn prefix_lines(&mut self, prefix: &str) {
        let mut prefixed = String::with_capacity(self.text.len() + prefix.len() * 4);
        for line in self.text.split_inclusive('\n') {
            if !line.trim().is_empty() {
                prefixed.push_str(prefix);
            }
            prefixed.push_str(line);
        }
        self.text = prefixed;
    }

    /// The accumulated text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Flatten into lines, each keeping its terminating newline.
    ///
    /// A final line without one gets it added, so concatenating the result
    /// always yields newline-terminated output.
    pub fn lines(self) -> Vec<String> {
        if self.text.is_empty() {
            return Vec::new();
        }
        let mut lines: Vec<String> = self
            .text
            .split_inclusive('\n')
            .map(str::to_string)
            .collect();
        if let Some(last) = lines.last_mut()
            && !last.ends_with('\n')
        {
            last.push('\n');
        }
        lines
    }
}
