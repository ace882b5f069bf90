use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::StringValue;
use inherent::inherent;

/// `enum Name @directives { VALUE_A VALUE_B }`
///
/// See [Enums](https://spec.graphql.org/September2025/#sec-Enums).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
    pub location: Location,
}

/// One value of an [`EnumTypeDefinition`]. The name is never `true`,
/// `false` or `null`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub location: Location,
}

#[inherent]
impl AstNode for EnumTypeDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for EnumValueDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
