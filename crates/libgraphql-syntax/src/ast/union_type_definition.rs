use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::StringValue;
use inherent::inherent;

/// `union Name @directives = A | B | C`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub members: Vec<NamedType<'src>>,
    pub location: Location,
}

#[inherent]
impl AstNode for UnionTypeDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
