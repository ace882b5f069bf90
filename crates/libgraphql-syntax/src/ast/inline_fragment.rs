use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use inherent::inherent;

/// `... on Type @directives { ... }`, where both the type condition and the
/// directives may be omitted.
///
/// See
/// [Inline Fragments](https://spec.graphql.org/September2025/#sec-Inline-Fragments).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Location,
}

#[inherent]
impl AstNode for InlineFragment<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
