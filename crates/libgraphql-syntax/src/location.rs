/// Half-open byte range `[start, end)` over a [`Source`](crate::Source)'s
/// body.
///
/// Every AST node carries exactly one `Location`. Offsets are 0-based byte
/// offsets (not character counts), so `&source.body()[loc.start..loc.end]`
/// always slices out exactly the text that produced the node.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
pub struct Location {
    /// Byte offset of the first byte covered (inclusive).
    pub start: usize,
    /// Byte offset one past the last byte covered (exclusive).
    pub end: usize,
}

impl Location {
    /// Creates a new `Location` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Location start ({start}) > end ({end})");
        Self { start, end }
    }

    /// Returns the length of this location in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this location covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Location) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns the slice of `body` covered by this location, or `None` if
    /// the range is out of bounds or not on character boundaries.
    pub fn slice<'a>(&self, body: &'a str) -> Option<&'a str> {
        body.get(self.start..self.end)
    }
}
