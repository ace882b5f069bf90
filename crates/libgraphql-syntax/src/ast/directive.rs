use crate::Location;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use inherent::inherent;

/// A directive annotation such as `@include(if: $flag)`.
///
/// Not to be confused with a
/// [`DirectiveDefinition`](crate::ast::DirectiveDefinition).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Directive<'src> {
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub location: Location,
}

/// A `name: value` argument of a field or directive.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub location: Location,
}

#[inherent]
impl AstNode for Directive<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for Argument<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
