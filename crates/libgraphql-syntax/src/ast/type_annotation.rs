use crate::Location;
use crate::ast::AstNode;
use crate::ast::Name;
use inherent::inherent;

/// A [type reference](https://spec.graphql.org/September2025/#sec-Type-References)
/// such as `String`, `[ID!]` or `[[Int]!]!`.
///
/// `!` binds to the nearest preceding type and can be applied at most once
/// per level, so [`NonNullType`] wraps a [`NullableType`] rather than another
/// `TypeAnnotation`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum TypeAnnotation<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
    NonNull(NonNullType<'src>),
}

/// The types a [`NonNullType`] may wrap.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum NullableType<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
    pub location: Location,
}

/// `[ item_type ]`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ListType<'src> {
    pub item_type: Box<TypeAnnotation<'src>>,
    pub location: Location,
}

/// `inner !`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NonNullType<'src> {
    pub inner: NullableType<'src>,
    pub location: Location,
}

impl<'src> TypeAnnotation<'src> {
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }

    /// The name at the core of this type: `User` for `[User!]!`.
    pub fn innermost_name(&self) -> &Name<'src> {
        match self {
            TypeAnnotation::Named(named) => &named.name,
            TypeAnnotation::List(list) => list.item_type.innermost_name(),
            TypeAnnotation::NonNull(non_null) => match &non_null.inner {
                NullableType::Named(named) => &named.name,
                NullableType::List(list) => list.item_type.innermost_name(),
            },
        }
    }
}

impl<'src> From<NullableType<'src>> for TypeAnnotation<'src> {
    fn from(nullable: NullableType<'src>) -> Self {
        match nullable {
            NullableType::Named(named) => TypeAnnotation::Named(named),
            NullableType::List(list) => TypeAnnotation::List(list),
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation<'_> {
    pub fn location(&self) -> Location {
        match self {
            TypeAnnotation::Named(t) => t.location,
            TypeAnnotation::List(t) => t.location,
            TypeAnnotation::NonNull(t) => t.location,
        }
    }
}

#[inherent]
impl AstNode for NullableType<'_> {
    pub fn location(&self) -> Location {
        match self {
            NullableType::Named(t) => t.location,
            NullableType::List(t) => t.location,
        }
    }
}

#[inherent]
impl AstNode for NamedType<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for ListType<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for NonNullType<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
