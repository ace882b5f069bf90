/// A human-facing position inside a [`Source`](crate::Source).
///
/// # Indexing Convention
///
/// - `line`: 1-based (the first line is line 1)
/// - `column`: 1-based count of *characters* (not bytes) from the start of
///   the line
/// - `byte_offset`: 0-based byte offset from the start of the body
///
/// `\n`, `\r\n` and a lone `\r` each terminate a line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based character column within the line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from the start of the body.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
