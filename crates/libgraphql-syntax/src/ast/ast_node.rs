use crate::Location;

/// Behavior shared by every AST node.
///
/// All node types implement this trait via `#[inherent] impl AstNode`, so
/// `location()` is callable without importing the trait while generic code
/// (diagnostic renderers, linters) can still bound on `AstNode`.
pub trait AstNode {
    /// The half-open byte range of source text that produced this node.
    fn location(&self) -> Location;

    /// Appends the exact source text of this node to `sink`.
    ///
    /// `source` must be the body the node was parsed from.
    fn append_source(&self, sink: &mut String, source: &str) {
        let location = self.location();
        debug_assert!(
            location.end <= source.len(),
            "append_source: location {}..{} exceeds source length {}",
            location.start,
            location.end,
            source.len(),
        );
        if let Some(text) = location.slice(source) {
            sink.push_str(text);
        }
    }

    /// Returns the exact source text of this node.
    fn to_source(&self, source: &str) -> String {
        let mut sink = String::new();
        self.append_source(&mut sink, source);
        sink
    }
}
