/// Where a name was rejected by
/// [`GraphQLParseErrorKind::ReservedName`](crate::GraphQLParseErrorKind::ReservedName).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReservedNameContext {
    /// `on` introduces a type condition and can never name a fragment.
    ///
    /// Invalid: `fragment on on User { id }`
    FragmentName,

    /// `true`, `false` and `null` would be indistinguishable from literals.
    ///
    /// Invalid: `enum Answer { true false }`
    EnumValue,
}

impl std::fmt::Display for ReservedNameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FragmentName => f.write_str("fragment name"),
            Self::EnumValue => f.write_str("enum value"),
        }
    }
}
