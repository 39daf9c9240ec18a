/// Random-access view over the trimmed lines of a pasted text.
///
/// Both schedule layouts are positional, so the scanners address lines by
/// index relative to an anchor. Out-of-range lookups yield `None` instead
/// of panicking, which keeps bounded lookahead near the end of the input
/// simple.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineCursor<'a> {
    /// Splits on `\n` or `\r\n` after trimming the whole text, then trims
    /// every line.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.trim().lines().map(str::trim).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The trimmed line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    /// The trimmed line at `index`, or `""` past the end.
    pub fn line(&self, index: usize) -> &'a str {
        self.get(index).unwrap_or("")
    }
}
