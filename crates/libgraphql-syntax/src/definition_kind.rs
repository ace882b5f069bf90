/// The kind of a top-level [`Definition`](crate::ast::Definition), one per
/// variant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum DefinitionKind {
    /// `directive @name on ...`
    Directive,

    EnumType,
    InputObjectType,
    InterfaceType,
    ObjectType,
    ScalarType,
    UnionType,

    /// `fragment Name on Type { ... }`
    Fragment,

    /// `query`, `mutation`, `subscription`, or the anonymous `{ ... }`
    Operation,

    /// `schema { ... }`
    Schema,

    /// `extend type Name { ... }`
    TypeExtension,
}

impl DefinitionKind {
    /// `true` for operations and fragments.
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::Fragment | Self::Operation)
    }
}
