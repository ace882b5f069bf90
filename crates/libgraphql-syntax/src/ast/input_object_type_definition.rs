use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::StringValue;
use inherent::inherent;

/// `input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
    pub location: Location,
}

#[inherent]
impl AstNode for InputObjectTypeDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
