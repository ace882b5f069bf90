use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use inherent::inherent;

/// `fragment Name on Type @directives { ... }`
///
/// See
/// [Fragments](https://spec.graphql.org/September2025/#sec-Language.Fragments).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentDefinition<'src> {
    pub name: Name<'src>,
    pub type_condition: NamedType<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Location,
}

#[inherent]
impl AstNode for FragmentDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
