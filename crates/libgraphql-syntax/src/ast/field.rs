use crate::Location;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use inherent::inherent;

/// A field selection: `alias: name(args) @directives { ... }`.
///
/// See [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field<'src> {
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub location: Location,
}

impl Field<'_> {
    /// The key this field's result is stored under: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
