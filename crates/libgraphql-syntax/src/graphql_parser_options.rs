/// Tunables for a [`GraphQLParser`](crate::GraphQLParser).
///
/// ```
/// # use libgraphql_syntax::GraphQLParserOptions;
/// let options = GraphQLParserOptions::default().with_max_recursion_depth(128);
/// assert_eq!(options.max_recursion_depth, 128);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphQLParserOptions {
    /// How deeply selection sets, list/object values and list types may
    /// nest before parsing fails with
    /// [`RecursionLimitExceeded`](crate::GraphQLParseErrorKind::RecursionLimitExceeded).
    ///
    /// Bounds stack usage on adversarial input.
    pub max_recursion_depth: usize,
}

impl GraphQLParserOptions {
    pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 64;

    pub fn with_max_recursion_depth(mut self, max_recursion_depth: usize) -> Self {
        self.max_recursion_depth = max_recursion_depth;
        self
    }
}

impl Default for GraphQLParserOptions {
    fn default() -> Self {
        Self {
            max_recursion_depth: Self::DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}
