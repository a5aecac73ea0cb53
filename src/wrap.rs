//! Fixed-width word-wrapping for help text.

/// Iterator over the lines of `text` wrapped to fit an indented column.
///
/// The usable window per line is `line_length - indent`; the indent itself is
/// not emitted, callers prepend it when printing. A line breaks at the first
/// embedded newline inside the window, else at the last whitespace inside the
/// window, never mid-word. A window containing a single unbroken word longer
/// than the window emits the full window.
///
/// Iteration state is only the current byte offset, so wrapping is a pure
/// function of position and can be restarted by constructing a new iterator.
pub struct IndentWrap<'a> {
    text: &'a str,
    window: usize,
    pos: usize,
}

impl<'a> IndentWrap<'a> {
    pub fn new(text: &'a str, indent: usize, line_length: usize) -> Self {
        // A degenerate indent wider than the line must still make progress.
        let window = line_length.saturating_sub(indent).max(1);
        Self {
            text,
            window,
            pos: 0,
        }
    }
}

impl<'a> Iterator for IndentWrap<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.pos >= self.text.len() {
            return None;
        }
        let bytes = self.text.as_bytes();
        let remaining = self.text.len() - self.pos;
        let window = remaining.min(self.window);
        let slice = &bytes[self.pos..self.pos + window];

        // `len` is the line length, `skip` consumes the break character.
        let (len, skip) = if let Some(nl) = slice.iter().position(|&b| b == b'\n') {
            (nl, 1)
        } else if window < remaining {
            match slice.iter().rposition(|b| b.is_ascii_whitespace()) {
                Some(ws) => (ws, 1),
                None => (window, 0),
            }
        } else {
            (window, 0)
        };

        let line = &self.text[self.pos..self.pos + len];
        self.pos += len + skip;
        Some(line)
    }
}
