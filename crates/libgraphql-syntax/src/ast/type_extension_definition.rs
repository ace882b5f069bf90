use crate::Location;
use crate::ast::AstNode;
use crate::ast::ObjectTypeDefinition;
use inherent::inherent;

/// `extend type Name ... { fields }`
///
/// The extended body has exactly the shape of an object type definition and
/// is stored as one. Its location starts at `type`, while the extension's
/// location starts at `extend`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TypeExtensionDefinition<'src> {
    pub definition: ObjectTypeDefinition<'src>,
    pub location: Location,
}

#[inherent]
impl AstNode for TypeExtensionDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
