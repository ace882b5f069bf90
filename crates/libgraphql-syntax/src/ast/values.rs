use std::borrow::Cow;

use crate::Location;
use crate::ast::AstNode;
use crate::ast::Name;
use inherent::inherent;

// =========================================================
// Value
// =========================================================

/// A GraphQL input [value](https://spec.graphql.org/September2025/#sec-Input-Values).
///
/// In constant contexts (default values, directives on type-system
/// definitions) the parser never produces [`Value::Variable`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Value<'src> {
    Boolean(BooleanValue),
    Enum(EnumValue<'src>),
    Float(FloatValue<'src>),
    Int(IntValue<'src>),
    List(ListValue<'src>),
    Null(NullValue),
    Object(ObjectValue<'src>),
    String(StringValue<'src>),
    Variable(Variable<'src>),
}

impl Value<'_> {
    /// `true` if neither this value nor anything nested inside it is a
    /// variable.
    pub fn is_const(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::List(list) => list.values.iter().all(Value::is_const),
            Value::Object(obj) => obj.fields.iter().all(|f| f.value.is_const()),
            _ => true,
        }
    }
}

#[inherent]
impl AstNode for Value<'_> {
    pub fn location(&self) -> Location {
        match self {
            Value::Boolean(v) => v.location,
            Value::Enum(v) => v.location,
            Value::Float(v) => v.location,
            Value::Int(v) => v.location,
            Value::List(v) => v.location,
            Value::Null(v) => v.location,
            Value::Object(v) => v.location,
            Value::String(v) => v.location,
            Value::Variable(v) => v.location,
        }
    }
}

// =========================================================
// Scalars
// =========================================================

/// `$name`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Variable<'src> {
    pub name: Name<'src>,
    pub location: Location,
}

/// An integer literal kept as its verbatim source text (including any
/// leading `-`).
///
/// The text is not converted so that no precision is lost; use
/// [`IntValue::as_i64`] when a machine integer is wanted.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct IntValue<'src> {
    pub value: Cow<'src, str>,
    pub location: Location,
}

impl IntValue<'_> {
    /// Parses the literal, returning `None` if it does not fit in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        self.value.parse().ok()
    }
}

/// A float literal kept as its verbatim source text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FloatValue<'src> {
    pub value: Cow<'src, str>,
    pub location: Location,
}

impl FloatValue<'_> {
    pub fn as_f64(&self) -> Option<f64> {
        self.value.parse().ok()
    }
}

/// A string literal.
///
/// `value` is the decoded string: escapes are resolved and, for block
/// strings (`is_block`), the common indentation is removed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StringValue<'src> {
    pub value: Cow<'src, str>,
    pub is_block: bool,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BooleanValue {
    pub value: bool,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NullValue {
    pub location: Location,
}

/// Any bare name in value position other than `true`, `false` or `null`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EnumValue<'src> {
    pub value: Cow<'src, str>,
    pub location: Location,
}

// =========================================================
// Composites
// =========================================================

/// `[ value, ... ]` (possibly empty)
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ListValue<'src> {
    pub values: Vec<Value<'src>>,
    pub location: Location,
}

/// `{ name: value, ... }` (possibly empty)
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub location: Location,
}

#[inherent]
impl AstNode for Variable<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for IntValue<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for FloatValue<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for StringValue<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for NullValue {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for EnumValue<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for ListValue<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for ObjectValue<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for ObjectField<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
