//! A GraphQL lexer and recursive-descent parser producing a location-tagged
//! abstract syntax tree for executable documents, type-system documents,
//! and documents that mix both together.
//!
//! ```
//! use libgraphql_syntax::Source;
//!
//! let source = Source::with_name("type Query { me: User }", "schema.graphql");
//! let document = libgraphql_syntax::parse(&source).unwrap();
//! let definition = &document.definitions[0];
//! assert_eq!(definition.location().slice(source.body()), Some("type Query { me: User }"));
//! ```

pub mod ast;
mod definition_kind;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_parser_options;
pub mod lexer;
mod location;
mod reserved_name_context;
mod source;
mod source_position;
pub mod token;

pub use definition_kind::DefinitionKind;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser_options::GraphQLParserOptions;
pub use location::Location;
pub use reserved_name_context::ReservedNameContext;
pub use smallvec::SmallVec;
pub use source::Source;
pub use source_position::SourcePosition;

/// Parses `source` into a [`Document`](ast::Document) with default
/// [`GraphQLParserOptions`].
pub fn parse<'src>(
    source: &Source<'src>,
) -> Result<ast::Document<'src>, GraphQLParseError> {
    GraphQLParser::new(source).parse_document()
}

/// Parses an unnamed body. Errors report the source as
/// [`Source::DEFAULT_NAME`].
pub fn parse_str(body: &str) -> Result<ast::Document<'_>, GraphQLParseError> {
    parse(&Source::new(body))
}

#[cfg(test)]
mod tests;
