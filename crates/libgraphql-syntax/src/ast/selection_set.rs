use crate::Location;
use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use inherent::inherent;

/// A braced, non-empty list of selections.
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub location: Location,
}

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

#[inherent]
impl AstNode for SelectionSet<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for Selection<'_> {
    pub fn location(&self) -> Location {
        match self {
            Selection::Field(s) => s.location,
            Selection::FragmentSpread(s) => s.location,
            Selection::InlineFragment(s) => s.location,
        }
    }
}
