//! Various test utils.

use crate::GraphQLParseError;
use crate::Source;
use crate::ast;
use crate::lexer::GraphQLLexer;
use crate::parse_str;
use crate::token::GraphQLTokenKind;

pub const KITCHEN_SINK: &str = include_str!("fixtures/kitchen_sink.graphql");

/// Parses `source`, panicking with the detailed diagnostic on failure.
pub fn parse_ok(source: &str) -> ast::Document<'_> {
    match parse_str(source) {
        Ok(document) => document,
        Err(error) => panic!(
            "unexpected parse error:\n{}",
            error.format_detailed(Some(source)),
        ),
    }
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub fn parse_err(source: &str) -> GraphQLParseError {
    match parse_str(source) {
        Ok(document) => panic!("expected a parse error, got: {document:#?}"),
        Err(error) => error,
    }
}

/// Lexes all of `source`, returning every token kind before `Eof`
/// (comments included).
pub fn lex_kinds(source: &str) -> Vec<GraphQLTokenKind<'_>> {
    let source = Source::new(source);
    let lexer = GraphQLLexer::new(&source);
    let mut kinds = Vec::new();
    for token in lexer.tokens() {
        let token = match token {
            Ok(token) => token,
            Err(error) => panic!("unexpected lex error: {error}"),
        };
        if token.kind == GraphQLTokenKind::Eof {
            break;
        }
        kinds.push(token.kind);
    }
    kinds
}

/// Lexes `source`, returning the first error.
pub fn lex_err(source: &str) -> GraphQLParseError {
    let source = Source::new(source);
    let lexer = GraphQLLexer::new(&source);
    for token in lexer.tokens() {
        if let Err(error) = token {
            return error;
        }
    }
    panic!("expected a lex error in {:?}", source.body());
}

pub fn only_operation<'a, 'src>(
    document: &'a ast::Document<'src>,
) -> &'a ast::OperationDefinition<'src> {
    assert_eq!(document.definitions.len(), 1, "{document:#?}");
    match &document.definitions[0] {
        ast::Definition::OperationDefinition(op) => op,
        other => panic!("expected an operation, got: {other:#?}"),
    }
}

pub fn only_definition<'a, 'src>(
    document: &'a ast::Document<'src>,
) -> &'a ast::Definition<'src> {
    assert_eq!(document.definitions.len(), 1, "{document:#?}");
    &document.definitions[0]
}

pub fn first_field<'a, 'src>(
    selection_set: &'a ast::SelectionSet<'src>,
) -> &'a ast::Field<'src> {
    match &selection_set.selections[0] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field, got: {other:#?}"),
    }
}

/// The value of the first argument of the first field of the only
/// operation in `document`.
pub fn first_arg_value<'a, 'src>(
    document: &'a ast::Document<'src>,
) -> &'a ast::Value<'src> {
    let field = first_field(&only_operation(document).selection_set);
    &field.arguments[0].value
}
