/// How a [`GraphQLErrorNote`](crate::GraphQLErrorNote) is rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLErrorNoteKind {
    /// Extra context, rendered as `= note: ...`.
    ///
    /// Example: "opening `{` here" (pointing at the opener)
    General,

    /// A suggested fix, rendered as `= help: ...`.
    ///
    /// Example: "did you mean `FIELD_DEFINITION`?"
    Help,

    /// A link into the GraphQL specification, rendered as `= spec: ...`.
    Spec,
}
