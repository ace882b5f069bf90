use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use inherent::inherent;

/// An [operation](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// definition.
///
/// The shorthand form `{ field }` is represented as an operation with
/// `operation_kind: Query`, no `name`, no variable definitions and no
/// directives. Its location is that of the selection set.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationDefinition<'src> {
    pub operation_kind: OperationKind,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Location,
}

impl OperationDefinition<'_> {
    /// `true` for the `{ ... }` shorthand (no leading keyword).
    ///
    /// Detected from the shape of the node: a shorthand query is the only
    /// operation whose location starts at its selection set.
    pub fn is_shorthand(&self) -> bool {
        self.location.start == self.selection_set.location.start
    }
}

/// A `$name: Type = default @directives` entry of an operation's variable
/// list.
///
/// `default_value` is always a constant value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableDefinition<'src> {
    pub variable: Variable<'src>,
    pub var_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub location: Location,
}

#[inherent]
impl AstNode for OperationDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for VariableDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
