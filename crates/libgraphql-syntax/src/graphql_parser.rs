use std::borrow::Cow;

use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParserOptions;
use crate::Location;
use crate::ReservedNameContext;
use crate::Source;
use crate::ast;
use crate::lexer::GraphQLLexer;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Where a value is being parsed, which decides whether `$variables` are
/// allowed in it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ConstContext {
    /// Field arguments and directives inside operations and fragments.
    AllowVariables,
    /// `$var: Type = <here>`
    VariableDefaultValue,
    /// Directives on variable definitions and type-system definitions.
    ConstDirective,
    /// Defaults of argument definitions and input fields.
    InputDefaultValue,
}

impl ConstContext {
    /// Describes where variables are forbidden, or `None` if they are
    /// allowed.
    fn forbids_variables_in(self) -> Option<&'static str> {
        match self {
            Self::AllowVariables => None,
            Self::VariableDefaultValue => Some("variable default values"),
            Self::ConstDirective => {
                Some("directives on variable and type-system definitions")
            },
            Self::InputDefaultValue => {
                Some("default values of argument and input field definitions")
            },
        }
    }
}

/// Single-token-lookahead recursive-descent parser for GraphQL documents.
///
/// The parser holds exactly one current token and pulls the next one from
/// its [`GraphQLLexer`] whenever a token is consumed; comments are skipped
/// here. It never backtracks.
///
/// Parsing is fail-fast: the first lexical or syntactic error is returned
/// and no partial [`Document`](ast::Document) is produced.
///
/// # Usage
///
/// ```
/// # use libgraphql_syntax::GraphQLParser;
/// # use libgraphql_syntax::Source;
/// let source = Source::new("query Hero { hero { name } }");
/// let document = GraphQLParser::new(&source).parse_document().unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub struct GraphQLParser<'src> {
    lexer: GraphQLLexer<'src>,

    /// The lookahead token. Starts as a `Sof` placeholder.
    current: GraphQLToken<'src>,

    /// End offset of the most recently consumed token; every node's
    /// location ends here when the node is completed.
    last_end: usize,

    options: GraphQLParserOptions,
    recursion_depth: usize,
}

impl<'src> GraphQLParser<'src> {
    pub fn new(source: &Source<'src>) -> Self {
        Self::with_options(source, GraphQLParserOptions::default())
    }

    pub fn with_options(
        source: &Source<'src>,
        options: GraphQLParserOptions,
    ) -> Self {
        Self {
            lexer: GraphQLLexer::new(source),
            current: GraphQLToken::start_of_input(),
            last_end: 0,
            options,
            recursion_depth: 0,
        }
    }

    /// Parses the whole source as a document.
    ///
    /// An empty (or all-whitespace/comment) source yields a document with no
    /// definitions.
    pub fn parse_document(
        mut self,
    ) -> Result<ast::Document<'src>, GraphQLParseError> {
        log::debug!(
            "parsing `{}` ({} bytes)",
            self.lexer.source_name(),
            self.lexer.body().len(),
        );
        let result = self.parse_document_impl();
        match &result {
            Ok(document) => log::debug!(
                "parsed {} definition(s) from `{}`",
                document.definitions.len(),
                self.lexer.source_name(),
            ),
            Err(error) => log::debug!("parse failed: {error}"),
        }
        result
    }

    fn parse_document_impl(
        &mut self,
    ) -> Result<ast::Document<'src>, GraphQLParseError> {
        self.advance()?;
        let mut definitions = Vec::new();
        while self.current.kind != GraphQLTokenKind::Eof {
            definitions.push(self.parse_definition()?);
        }
        Ok(ast::Document {
            definitions,
            location: Location::new(0, self.lexer.body().len()),
        })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Moves to the next non-comment token, returning the one consumed.
    fn advance(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let mut next = self.lexer.advance(self.current.location.end)?;
        while let GraphQLTokenKind::Comment(_) = next.kind {
            next = self.lexer.advance(next.location.end)?;
        }
        let consumed = std::mem::replace(&mut self.current, next);
        self.last_end = consumed.location.end;
        Ok(consumed)
    }

    fn peek_is(&self, kind: &GraphQLTokenKind<'_>) -> bool {
        self.current.kind == *kind
    }

    fn peek_is_keyword(&self, keyword: &str) -> bool {
        self.current.kind.is_keyword(keyword)
    }

    fn peek_is_name(&self) -> bool {
        matches!(self.current.kind, GraphQLTokenKind::Name(_))
    }

    fn expect(
        &mut self,
        kind: &GraphQLTokenKind<'_>,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.peek_is(kind) {
            self.advance()
        } else {
            Err(self.unexpected(&[kind.describe().as_str()]))
        }
    }

    fn expect_keyword(
        &mut self,
        keyword: &str,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.peek_is_keyword(keyword) {
            self.advance()
        } else {
            Err(self.unexpected(&[format!("`{keyword}`").as_str()]))
        }
    }

    fn expect_name(&mut self) -> Result<ast::Name<'src>, GraphQLParseError> {
        let GraphQLTokenKind::Name(value) = self.current.kind else {
            return Err(self.unexpected(&["name"]));
        };
        let token = self.advance()?;
        Ok(ast::Name {
            value: Cow::Borrowed(value),
            location: token.location,
        })
    }

    /// Location from `start` to the end of the last consumed token.
    fn location_from(&self, start: usize) -> Location {
        Location::new(start, self.last_end)
    }

    /// Parses `open item* close` where the current token is `open`,
    /// returning the items and the opening token.
    fn parse_delimited_list<T>(
        &mut self,
        close: GraphQLTokenKind<'static>,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLParseError>,
    ) -> Result<(Vec<T>, GraphQLToken<'src>), GraphQLParseError> {
        let open = self.advance()?;
        let mut items = Vec::new();
        while !self.peek_is(&close) {
            if self.current.kind == GraphQLTokenKind::Eof {
                let mut error = self.unexpected(&[close.describe().as_str()]);
                error.add_note_at(
                    format!("unclosed {} opened here", open.kind.describe()),
                    open.position,
                );
                return Err(error);
            }
            items.push(parse_item(self)?);
        }
        self.advance()?;
        Ok((items, open))
    }

    fn enter_recursion(&mut self) -> Result<(), GraphQLParseError> {
        self.recursion_depth += 1;
        let limit = self.options.max_recursion_depth;
        if self.recursion_depth > limit {
            log::trace!(
                "recursion limit ({limit}) exceeded at byte {}",
                self.current.location.start,
            );
            let mut error = self.error_at_current(
                format!("nesting exceeds the maximum depth of {limit}"),
                GraphQLParseErrorKind::RecursionLimitExceeded { limit },
            );
            error.add_help(
                "raise the limit with `GraphQLParserOptions::with_max_recursion_depth`",
            );
            return Err(error);
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Errors
    // =========================================================================

    fn error_at_current(
        &self,
        message: impl Into<String>,
        kind: GraphQLParseErrorKind,
    ) -> GraphQLParseError {
        GraphQLParseError::new(
            message,
            self.lexer.source_name(),
            self.current.position,
            self.current.location,
            kind,
        )
    }

    /// "expected X, found Y" for the current token.
    fn unexpected(&self, expected: &[&str]) -> GraphQLParseError {
        let expected_text = describe_expected(expected);
        let expected: Vec<String> = expected.iter().map(|e| e.to_string()).collect();

        if self.current.kind == GraphQLTokenKind::Eof {
            return self.error_at_current(
                format!("expected {expected_text}, found end of input"),
                GraphQLParseErrorKind::UnexpectedEndOfInput { expected },
            );
        }

        let found = self.current.kind.describe();
        self.error_at_current(
            format!("expected {expected_text}, found {found}"),
            GraphQLParseErrorKind::UnexpectedToken { expected, found },
        )
    }

    fn empty_construct(
        &self,
        open: &GraphQLToken<'src>,
        construct: &str,
    ) -> GraphQLParseError {
        let mut error = GraphQLParseError::new(
            format!("{construct} must not be empty"),
            self.lexer.source_name(),
            open.position,
            Location::new(open.location.start, self.last_end),
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: construct.to_string(),
            },
        );
        error.add_help(format!("omit the empty {construct} entirely"));
        error
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(
        &mut self,
    ) -> Result<ast::Definition<'src>, GraphQLParseError> {
        match self.current.kind {
            GraphQLTokenKind::CurlyBraceOpen => Ok(
                ast::Definition::OperationDefinition(self.parse_operation_definition()?),
            ),
            GraphQLTokenKind::StringValue(_) | GraphQLTokenKind::BlockStringValue(_) => {
                let description = self.parse_string_value()?;
                self.parse_type_system_definition(Some(description))
            },
            GraphQLTokenKind::Name("query" | "mutation" | "subscription") => Ok(
                ast::Definition::OperationDefinition(self.parse_operation_definition()?),
            ),
            GraphQLTokenKind::Name("fragment") => Ok(
                ast::Definition::FragmentDefinition(self.parse_fragment_definition()?),
            ),
            GraphQLTokenKind::Name("extend") => Ok(
                ast::Definition::TypeExtensionDefinition(self.parse_type_extension()?),
            ),
            _ => self.parse_type_system_definition(None),
        }
    }

    fn parse_type_system_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> Result<ast::Definition<'src>, GraphQLParseError> {
        let keyword = match self.current.kind {
            GraphQLTokenKind::Name(keyword) => keyword,
            _ => "",
        };
        Ok(match keyword {
            "directive" => ast::Definition::DirectiveDefinition(
                self.parse_directive_definition(description)?,
            ),
            "enum" => ast::Definition::EnumTypeDefinition(
                self.parse_enum_type_definition(description)?,
            ),
            "input" => ast::Definition::InputObjectTypeDefinition(
                self.parse_input_object_type_definition(description)?,
            ),
            "interface" => ast::Definition::InterfaceTypeDefinition(
                self.parse_interface_type_definition(description)?,
            ),
            "scalar" => ast::Definition::ScalarTypeDefinition(
                self.parse_scalar_type_definition(description)?,
            ),
            "schema" => ast::Definition::SchemaDefinition(
                self.parse_schema_definition(description)?,
            ),
            "type" => ast::Definition::ObjectTypeDefinition(
                self.parse_object_type_definition(description)?,
            ),
            "union" => ast::Definition::UnionTypeDefinition(
                self.parse_union_type_definition(description)?,
            ),
            _ if description.is_some() => {
                let mut error = self.unexpected(&["type-system definition"]);
                error.add_note(
                    "a string before a definition is its description, which \
                     only type-system definitions accept",
                );
                return Err(error);
            },
            _ => {
                let mut error = self.unexpected(&["definition"]);
                error.add_help(
                    "a definition starts with `{`, `query`, `mutation`, \
                     `subscription`, `fragment`, `schema`, `scalar`, `type`, \
                     `interface`, `union`, `enum`, `input`, `extend` or \
                     `directive`",
                );
                return Err(error);
            },
        })
    }

    /// Start offset of a definition: its description if it has one,
    /// otherwise the current token.
    fn definition_start(&self, description: &Option<ast::StringValue<'src>>) -> usize {
        description
            .as_ref()
            .map_or(self.current.location.start, |d| d.location.start)
    }

    fn parse_optional_description(
        &mut self,
    ) -> Result<Option<ast::StringValue<'src>>, GraphQLParseError> {
        if self.current.kind.is_string() {
            Ok(Some(self.parse_string_value()?))
        } else {
            Ok(None)
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_operation_definition(
        &mut self,
    ) -> Result<ast::OperationDefinition<'src>, GraphQLParseError> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            let location = selection_set.location;
            return Ok(ast::OperationDefinition {
                operation_kind: ast::OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                location,
            });
        }

        let start = self.current.location.start;
        let operation_kind = self.parse_operation_kind()?;
        let name = if self.peek_is_name() {
            Some(self.expect_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            operation_kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            location: self.location_from(start),
        })
    }

    fn parse_operation_kind(
        &mut self,
    ) -> Result<ast::OperationKind, GraphQLParseError> {
        let kind = match self.current.kind {
            GraphQLTokenKind::Name(keyword) => ast::OperationKind::from_keyword(keyword),
            _ => None,
        };
        let Some(kind) = kind else {
            return Err(self.unexpected(&["`query`", "`mutation`", "`subscription`"]));
        };
        self.advance()?;
        Ok(kind)
    }

    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<ast::VariableDefinition<'src>>, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        let (definitions, open) = self.parse_delimited_list(
            GraphQLTokenKind::ParenClose,
            Self::parse_variable_definition,
        )?;
        if definitions.is_empty() {
            return Err(self.empty_construct(&open, "variable definition list"));
        }
        Ok(definitions)
    }

    fn parse_variable_definition(
        &mut self,
    ) -> Result<ast::VariableDefinition<'src>, GraphQLParseError> {
        let start = self.current.location.start;
        let variable = self.parse_variable()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type()?;
        let default_value = if self.peek_is(&GraphQLTokenKind::Equals) {
            self.advance()?;
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::ConstDirective)?;

        Ok(ast::VariableDefinition {
            variable,
            var_type,
            default_value,
            directives,
            location: self.location_from(start),
        })
    }

    fn parse_variable(&mut self) -> Result<ast::Variable<'src>, GraphQLParseError> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let name = self.expect_name()?;
        Ok(ast::Variable {
            name,
            location: self.location_from(dollar.location.start),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(
        &mut self,
    ) -> Result<ast::SelectionSet<'src>, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(
        &mut self,
    ) -> Result<ast::SelectionSet<'src>, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Err(self.unexpected(&["`{`"]));
        }
        let (selections, open) = self.parse_delimited_list(
            GraphQLTokenKind::CurlyBraceClose,
            Self::parse_selection,
        )?;
        let location = self.location_from(open.location.start);

        if selections.is_empty() {
            let mut error = GraphQLParseError::new(
                "selection set must contain at least one selection",
                self.lexer.source_name(),
                open.position,
                location,
                GraphQLParseErrorKind::EmptySelectionSet,
            );
            error.add_spec("https://spec.graphql.org/September2025/#SelectionSet");
            return Err(error);
        }

        Ok(ast::SelectionSet {
            selections,
            location,
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection<'src>, GraphQLParseError> {
        if self.peek_is(&GraphQLTokenKind::Ellipsis) {
            self.parse_fragment_selection()
        } else {
            Ok(ast::Selection::Field(self.parse_field()?))
        }
    }

    fn parse_field(&mut self) -> Result<ast::Field<'src>, GraphQLParseError> {
        let start = self.current.location.start;
        let name_or_alias = self.expect_name()?;
        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon) {
            self.advance()?;
            (Some(name_or_alias), self.expect_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location: self.location_from(start),
        })
    }

    // After `...`:
    //   `on` Name  -> inline fragment with a type condition
    //   other Name -> fragment spread
    //   `@` or `{` -> inline fragment without a type condition
    fn parse_fragment_selection(
        &mut self,
    ) -> Result<ast::Selection<'src>, GraphQLParseError> {
        let start = self.advance()?.location.start;

        if self.peek_is_keyword("on") {
            self.advance()?;
            if !self.peek_is_name() {
                let mut error = self.unexpected(&["type condition"]);
                error.add_note(
                    "`... on` always begins an inline fragment's type \
                     condition; a fragment cannot be named `on`",
                );
                return Err(error);
            }
            let type_condition = self.parse_named_type()?;
            return self.finish_inline_fragment(start, Some(type_condition));
        }

        if self.peek_is_name() {
            let fragment_name = self.expect_name()?;
            let directives = self.parse_directives(ConstContext::AllowVariables)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                fragment_name,
                directives,
                location: self.location_from(start),
            }));
        }

        if !self.peek_is(&GraphQLTokenKind::At)
            && !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)
        {
            return Err(self.unexpected(&["fragment name", "`on`", "`@`", "`{`"]));
        }
        self.finish_inline_fragment(start, None)
    }

    fn finish_inline_fragment(
        &mut self,
        start: usize,
        type_condition: Option<ast::NamedType<'src>>,
    ) -> Result<ast::Selection<'src>, GraphQLParseError> {
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            location: self.location_from(start),
        }))
    }

    fn parse_fragment_definition(
        &mut self,
    ) -> Result<ast::FragmentDefinition<'src>, GraphQLParseError> {
        let start = self.expect_keyword("fragment")?.location.start;

        if self.peek_is_keyword("on") {
            let mut error = self.error_at_current(
                "fragment name cannot be `on`",
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                    context: ReservedNameContext::FragmentName,
                },
            );
            error.add_help("name the fragment before its type condition: `fragment Name on Type`");
            return Err(error);
        }
        let name = self.expect_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            location: self.location_from(start),
        })
    }

    // =========================================================================
    // Arguments, directives and values
    // =========================================================================

    fn parse_arguments(
        &mut self,
        context: ConstContext,
    ) -> Result<Vec<ast::Argument<'src>>, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        let (arguments, open) = self.parse_delimited_list(
            GraphQLTokenKind::ParenClose,
            |parser| parser.parse_argument(context),
        )?;
        if arguments.is_empty() {
            return Err(self.empty_construct(&open, "argument list"));
        }
        Ok(arguments)
    }

    fn parse_argument(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::Argument<'src>, GraphQLParseError> {
        let start = self.current.location.start;
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(ast::Argument {
            name,
            value,
            location: self.location_from(start),
        })
    }

    fn parse_directives(
        &mut self,
        context: ConstContext,
    ) -> Result<Vec<ast::Directive<'src>>, GraphQLParseError> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            let start = self.advance()?.location.start;
            let name = self.expect_name()?;
            let arguments = self.parse_arguments(context)?;
            directives.push(ast::Directive {
                name,
                arguments,
                location: self.location_from(start),
            });
        }
        Ok(directives)
    }

    fn parse_value(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::Value<'src>, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::Value<'src>, GraphQLParseError> {
        let location = self.current.location;
        match self.current.kind {
            GraphQLTokenKind::Dollar => {
                if let Some(forbidden_in) = context.forbids_variables_in() {
                    return Err(self.error_at_current(
                        format!("variables are not allowed in {forbidden_in}"),
                        GraphQLParseErrorKind::VariableInConstContext,
                    ));
                }
                Ok(ast::Value::Variable(self.parse_variable()?))
            },
            GraphQLTokenKind::IntValue(raw) => {
                self.advance()?;
                Ok(ast::Value::Int(ast::IntValue {
                    value: Cow::Borrowed(raw),
                    location,
                }))
            },
            GraphQLTokenKind::FloatValue(raw) => {
                self.advance()?;
                Ok(ast::Value::Float(ast::FloatValue {
                    value: Cow::Borrowed(raw),
                    location,
                }))
            },
            GraphQLTokenKind::StringValue(_) | GraphQLTokenKind::BlockStringValue(_) => {
                Ok(ast::Value::String(self.parse_string_value()?))
            },
            GraphQLTokenKind::Name(name) => {
                self.advance()?;
                Ok(match name {
                    "true" => ast::Value::Boolean(ast::BooleanValue { value: true, location }),
                    "false" => ast::Value::Boolean(ast::BooleanValue { value: false, location }),
                    "null" => ast::Value::Null(ast::NullValue { location }),
                    _ => ast::Value::Enum(ast::EnumValue {
                        value: Cow::Borrowed(name),
                        location,
                    }),
                })
            },
            GraphQLTokenKind::SquareBracketOpen => {
                let (values, _) = self.parse_delimited_list(
                    GraphQLTokenKind::SquareBracketClose,
                    |parser| parser.parse_value(context),
                )?;
                Ok(ast::Value::List(ast::ListValue {
                    values,
                    location: self.location_from(location.start),
                }))
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                let (fields, _) = self.parse_delimited_list(
                    GraphQLTokenKind::CurlyBraceClose,
                    |parser| parser.parse_object_field(context),
                )?;
                Ok(ast::Value::Object(ast::ObjectValue {
                    fields,
                    location: self.location_from(location.start),
                }))
            },
            _ => Err(self.unexpected(&["value"])),
        }
    }

    fn parse_object_field(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::ObjectField<'src>, GraphQLParseError> {
        let start = self.current.location.start;
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(ast::ObjectField {
            name,
            value,
            location: self.location_from(start),
        })
    }

    fn parse_string_value(
        &mut self,
    ) -> Result<ast::StringValue<'src>, GraphQLParseError> {
        if !self.current.kind.is_string() {
            return Err(self.unexpected(&["string"]));
        }
        let token = self.advance()?;
        let (value, is_block) = match token.kind {
            GraphQLTokenKind::StringValue(value) => (value, false),
            GraphQLTokenKind::BlockStringValue(value) => (value, true),
            _ => unreachable!("is_string() admits only string tokens"),
        };
        Ok(ast::StringValue {
            value,
            is_block,
            location: token.location,
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn parse_type(&mut self) -> Result<ast::TypeAnnotation<'src>, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_type_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_impl(
        &mut self,
    ) -> Result<ast::TypeAnnotation<'src>, GraphQLParseError> {
        let start = self.current.location.start;
        let nullable = if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            self.advance()?;
            let item_type = self.parse_type()?;
            self.expect(&GraphQLTokenKind::SquareBracketClose)?;
            ast::NullableType::List(ast::ListType {
                item_type: Box::new(item_type),
                location: self.location_from(start),
            })
        } else if self.peek_is_name() {
            ast::NullableType::Named(self.parse_named_type()?)
        } else {
            return Err(self.unexpected(&["type"]));
        };

        if self.peek_is(&GraphQLTokenKind::Bang) {
            self.advance()?;
            return Ok(ast::TypeAnnotation::NonNull(ast::NonNullType {
                inner: nullable,
                location: self.location_from(start),
            }));
        }
        Ok(nullable.into())
    }

    fn parse_named_type(&mut self) -> Result<ast::NamedType<'src>, GraphQLParseError> {
        let name = self.expect_name()?;
        Ok(ast::NamedType {
            location: name.location,
            name,
        })
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn parse_schema_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> Result<ast::SchemaDefinition<'src>, GraphQLParseError> {
        let start = self.definition_start(&description);
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(ConstContext::ConstDirective)?;
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Err(self.unexpected(&["`{`"]));
        }
        let (operation_types, open) = self.parse_delimited_list(
            GraphQLTokenKind::CurlyBraceClose,
            Self::parse_operation_type_definition,
        )?;
        if operation_types.is_empty() {
            return Err(self.empty_construct(&open, "schema operation type list"));
        }

        Ok(ast::SchemaDefinition {
            description,
            directives,
            operation_types,
            location: self.location_from(start),
        })
    }

    fn parse_operation_type_definition(
        &mut self,
    ) -> Result<ast::OperationTypeDefinition<'src>, GraphQLParseError> {
        let start = self.current.location.start;
        let operation_kind = self.parse_operation_kind()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(ast::OperationTypeDefinition {
            operation_kind,
            named_type,
            location: self.location_from(start),
        })
    }

    fn parse_scalar_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> Result<ast::ScalarTypeDefinition<'src>, GraphQLParseError> {
        let start = self.definition_start(&description);
        self.expect_keyword("scalar")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::ConstDirective)?;
        Ok(ast::ScalarTypeDefinition {
            description,
            name,
            directives,
            location: self.location_from(start),
        })
    }

    fn parse_object_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> Result<ast::ObjectTypeDefinition<'src>, GraphQLParseError> {
        let start = self.definition_start(&description);
        self.expect_keyword("type")?;
        let name = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ConstContext::ConstDirective)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            location: self.location_from(start),
        })
    }

    fn parse_interface_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> Result<ast::InterfaceTypeDefinition<'src>, GraphQLParseError> {
        let start = self.definition_start(&description);
        self.expect_keyword("interface")?;
        let name = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ConstContext::ConstDirective)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            location: self.location_from(start),
        })
    }

    /// `implements &? A (& B)*`, or nothing.
    fn parse_implements_interfaces(
        &mut self,
    ) -> Result<Vec<ast::NamedType<'src>>, GraphQLParseError> {
        if !self.peek_is_keyword("implements") {
            return Ok(Vec::new());
        }
        self.advance()?;
        if self.peek_is(&GraphQLTokenKind::Ampersand) {
            self.advance()?;
        }
        let mut interfaces = vec![self.parse_named_type()?];
        while self.peek_is(&GraphQLTokenKind::Ampersand) {
            self.advance()?;
            interfaces.push(self.parse_named_type()?);
        }
        Ok(interfaces)
    }

    fn parse_fields_definition(
        &mut self,
    ) -> Result<Vec<ast::FieldDefinition<'src>>, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(Vec::new());
        }
        let (fields, _) = self.parse_delimited_list(
            GraphQLTokenKind::CurlyBraceClose,
            Self::parse_field_definition,
        )?;
        Ok(fields)
    }

    fn parse_field_definition(
        &mut self,
    ) -> Result<ast::FieldDefinition<'src>, GraphQLParseError> {
        let description = self.parse_optional_description()?;
        let start = self.definition_start(&description);
        let name = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type()?;
        let directives = self.parse_directives(ConstContext::ConstDirective)?;
        Ok(ast::FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            location: self.location_from(start),
        })
    }

    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition<'src>>, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        let (arguments, open) = self.parse_delimited_list(
            GraphQLTokenKind::ParenClose,
            Self::parse_input_value_definition,
        )?;
        if arguments.is_empty() {
            return Err(self.empty_construct(&open, "argument definition list"));
        }
        Ok(arguments)
    }

    fn parse_input_value_definition(
        &mut self,
    ) -> Result<ast::InputValueDefinition<'src>, GraphQLParseError> {
        let description = self.parse_optional_description()?;
        let start = self.definition_start(&description);
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type()?;
        let default_value = if self.peek_is(&GraphQLTokenKind::Equals) {
            self.advance()?;
            Some(self.parse_value(ConstContext::InputDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::ConstDirective)?;
        Ok(ast::InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            location: self.location_from(start),
        })
    }

    fn parse_union_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> Result<ast::UnionTypeDefinition<'src>, GraphQLParseError> {
        let start = self.definition_start(&description);
        self.expect_keyword("union")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::ConstDirective)?;

        let mut members = Vec::new();
        if self.peek_is(&GraphQLTokenKind::Equals) {
            self.advance()?;
            if self.peek_is(&GraphQLTokenKind::Pipe) {
                self.advance()?;
            }
            members.push(self.parse_named_type()?);
            while self.peek_is(&GraphQLTokenKind::Pipe) {
                self.advance()?;
                members.push(self.parse_named_type()?);
            }
        }

        Ok(ast::UnionTypeDefinition {
            description,
            name,
            directives,
            members,
            location: self.location_from(start),
        })
    }

    fn parse_enum_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> Result<ast::EnumTypeDefinition<'src>, GraphQLParseError> {
        let start = self.definition_start(&description);
        self.expect_keyword("enum")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::ConstDirective)?;
        let values = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_delimited_list(
                GraphQLTokenKind::CurlyBraceClose,
                Self::parse_enum_value_definition,
            )?
            .0
        } else {
            Vec::new()
        };
        Ok(ast::EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            location: self.location_from(start),
        })
    }

    fn parse_enum_value_definition(
        &mut self,
    ) -> Result<ast::EnumValueDefinition<'src>, GraphQLParseError> {
        let description = self.parse_optional_description()?;
        let start = self.definition_start(&description);

        if let GraphQLTokenKind::Name(reserved @ ("true" | "false" | "null")) =
            self.current.kind
        {
            return Err(self.error_at_current(
                format!("enum value cannot be `{reserved}`"),
                GraphQLParseErrorKind::ReservedName {
                    name: reserved.to_string(),
                    context: ReservedNameContext::EnumValue,
                },
            ));
        }
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::ConstDirective)?;
        Ok(ast::EnumValueDefinition {
            description,
            name,
            directives,
            location: self.location_from(start),
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> Result<ast::InputObjectTypeDefinition<'src>, GraphQLParseError> {
        let start = self.definition_start(&description);
        self.expect_keyword("input")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::ConstDirective)?;
        let fields = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_delimited_list(
                GraphQLTokenKind::CurlyBraceClose,
                Self::parse_input_value_definition,
            )?
            .0
        } else {
            Vec::new()
        };
        Ok(ast::InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            location: self.location_from(start),
        })
    }

    fn parse_type_extension(
        &mut self,
    ) -> Result<ast::TypeExtensionDefinition<'src>, GraphQLParseError> {
        let start = self.expect_keyword("extend")?.location.start;
        if !self.peek_is_keyword("type") {
            let mut error = self.unexpected(&["`type`"]);
            if let GraphQLTokenKind::Name(
                "schema" | "scalar" | "interface" | "union" | "enum" | "input",
            ) = self.current.kind
            {
                error.add_note("only object types can be extended");
            }
            return Err(error);
        }
        let definition = self.parse_object_type_definition(None)?;
        Ok(ast::TypeExtensionDefinition {
            definition,
            location: self.location_from(start),
        })
    }

    fn parse_directive_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> Result<ast::DirectiveDefinition<'src>, GraphQLParseError> {
        let start = self.definition_start(&description);
        self.expect_keyword("directive")?;
        self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        let repeatable = self.peek_is_keyword("repeatable");
        if repeatable {
            self.advance()?;
        }
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(ast::DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            location: self.location_from(start),
        })
    }

    /// `|`? Location (`|` Location)*, where at least one location is
    /// required.
    fn parse_directive_locations(
        &mut self,
    ) -> Result<Vec<ast::DirectiveLocation>, GraphQLParseError> {
        if self.peek_is(&GraphQLTokenKind::Pipe) {
            self.advance()?;
        }

        let missing = match self.current.kind {
            GraphQLTokenKind::Name(name) => {
                ast::DirectiveLocationKind::from_name(name).is_none()
                    && is_definition_keyword(name)
            },
            _ => true,
        };
        if missing {
            let found = self.current.kind.describe();
            let mut error = self.error_at_current(
                format!("expected at least one directive location after `on`, found {found}"),
                GraphQLParseErrorKind::EmptyDirectiveLocationList,
            );
            error.add_help("list where the directive may appear, e.g. `on FIELD | FRAGMENT_SPREAD`");
            return Err(error);
        }

        let mut locations = vec![self.parse_directive_location()?];
        while self.peek_is(&GraphQLTokenKind::Pipe) {
            self.advance()?;
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    fn parse_directive_location(
        &mut self,
    ) -> Result<ast::DirectiveLocation, GraphQLParseError> {
        let GraphQLTokenKind::Name(name) = self.current.kind else {
            return Err(self.unexpected(&["directive location"]));
        };
        let Some(kind) = ast::DirectiveLocationKind::from_name(name) else {
            let mut error = self.error_at_current(
                format!("unknown directive location `{name}`"),
                GraphQLParseErrorKind::UnknownDirectiveLocation {
                    name: name.to_string(),
                },
            );
            if let Some(suggestion) = suggest_directive_location(name) {
                error.add_help(format!("did you mean `{suggestion}`?"));
            }
            return Err(error);
        };
        let token = self.advance()?;
        Ok(ast::DirectiveLocation {
            kind,
            location: token.location,
        })
    }
}

fn is_definition_keyword(name: &str) -> bool {
    matches!(
        name,
        "query"
            | "mutation"
            | "subscription"
            | "fragment"
            | "schema"
            | "scalar"
            | "type"
            | "interface"
            | "union"
            | "enum"
            | "input"
            | "extend"
            | "directive"
    )
}

/// "`a`", "`a` or `b`", "`a`, `b` or `c`"
fn describe_expected(expected: &[&str]) -> String {
    match expected {
        [] => "more input".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

/// Closest known location name within an edit distance of 3, compared
/// case-insensitively.
fn suggest_directive_location(input: &str) -> Option<&'static str> {
    let input = input.to_ascii_uppercase();
    ast::DirectiveLocationKind::ALL
        .iter()
        .map(|kind| (kind.as_str(), edit_distance(&input, kind.as_str())))
        .filter(|(_, distance)| *distance <= 3)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

/// Levenshtein distance over bytes (location names are ASCII).
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, a_byte) in a.bytes().enumerate() {
        curr[0] = i + 1;
        for (j, b_byte) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(a_byte != *b_byte);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
