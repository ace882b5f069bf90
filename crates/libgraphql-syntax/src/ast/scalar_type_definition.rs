use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::StringValue;
use inherent::inherent;

/// `scalar Name @directives`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub location: Location,
}

#[inherent]
impl AstNode for ScalarTypeDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
