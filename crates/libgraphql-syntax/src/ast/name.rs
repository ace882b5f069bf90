use std::borrow::Cow;

use crate::Location;
use crate::ast::AstNode;
use inherent::inherent;

/// A GraphQL [name](https://spec.graphql.org/September2025/#sec-Names).
///
/// Always non-empty and matching `[_A-Za-z][_0-9A-Za-z]*`. Names produced by
/// the parser borrow from the source text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub location: Location,
}

impl Name<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[inherent]
impl AstNode for Name<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
