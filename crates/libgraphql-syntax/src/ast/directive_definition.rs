use crate::Location;
use crate::ast::AstNode;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::StringValue;
use inherent::inherent;

/// `directive @name(arguments) repeatable on LOCATION | LOCATION`
///
/// `locations` is never empty.
///
/// See
/// [Type System Directives](https://spec.graphql.org/September2025/#sec-Type-System.Directives).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
    pub location: Location,
}

/// One entry of a directive definition's `on` list.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DirectiveLocation {
    pub kind: DirectiveLocationKind,
    pub location: Location,
}

/// Where a directive may be applied.
///
/// See
/// [Directive Locations](https://spec.graphql.org/September2025/#DirectiveLocations).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum DirectiveLocationKind {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    VariableDefinition,
}

impl DirectiveLocationKind {
    pub const ALL: [DirectiveLocationKind; 19] = [
        Self::ArgumentDefinition,
        Self::Enum,
        Self::EnumValue,
        Self::Field,
        Self::FieldDefinition,
        Self::FragmentDefinition,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::InputFieldDefinition,
        Self::InputObject,
        Self::Interface,
        Self::Mutation,
        Self::Object,
        Self::Query,
        Self::Scalar,
        Self::Schema,
        Self::Subscription,
        Self::Union,
        Self::VariableDefinition,
    ];

    /// Looks up a location by its source name (e.g. `"FIELD_DEFINITION"`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::Field => "FIELD",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Query => "QUERY",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Subscription => "SUBSCRIPTION",
            Self::Union => "UNION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }

    /// `true` for locations inside executable documents (`QUERY`, `FIELD`,
    /// ...), `false` for type-system locations.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Self::Field
                | Self::FragmentDefinition
                | Self::FragmentSpread
                | Self::InlineFragment
                | Self::Mutation
                | Self::Query
                | Self::Subscription
                | Self::VariableDefinition
        )
    }
}

impl std::fmt::Display for DirectiveLocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[inherent]
impl AstNode for DirectiveDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for DirectiveLocation {
    pub fn location(&self) -> Location {
        self.location
    }
}
