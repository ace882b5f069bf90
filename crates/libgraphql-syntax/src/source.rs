use std::borrow::Cow;

/// Immutable GraphQL input text plus the name used to identify it in
/// diagnostics.
///
/// A `Source` never transforms its body; decoding the raw bytes into a
/// `&str` is the caller's responsibility.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source<'src> {
    body: &'src str,
    name: Cow<'src, str>,
}

impl<'src> Source<'src> {
    pub const DEFAULT_NAME: &'static str = "GraphQL request";

    /// Creates a `Source` named [`Source::DEFAULT_NAME`].
    ///
    /// Accepts either a `&str` or an `Option<&str>`; an absent body behaves
    /// exactly like an empty one.
    ///
    /// ```
    /// # use libgraphql_syntax::Source;
    /// assert_eq!(Source::new("{ a }").body(), "{ a }");
    /// assert_eq!(Source::new(None).body(), "");
    /// ```
    pub fn new(body: impl Into<Option<&'src str>>) -> Self {
        Self {
            body: body.into().unwrap_or(""),
            name: Cow::Borrowed(Self::DEFAULT_NAME),
        }
    }

    /// Creates a `Source` with an explicit diagnostic name (typically a file
    /// path).
    pub fn with_name(
        body: impl Into<Option<&'src str>>,
        name: impl Into<Cow<'src, str>>,
    ) -> Self {
        Self {
            body: body.into().unwrap_or(""),
            name: name.into(),
        }
    }

    pub fn body(&self) -> &'src str {
        self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'src> From<&'src str> for Source<'src> {
    fn from(body: &'src str) -> Self {
        Self::new(body)
    }
}
