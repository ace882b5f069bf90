use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use inherent::inherent;

/// An argument definition or an input object field:
/// `name: Type = default @directives`.
///
/// `default_value` is always a constant value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InputValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub value_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub location: Location,
}

#[inherent]
impl AstNode for InputValueDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
