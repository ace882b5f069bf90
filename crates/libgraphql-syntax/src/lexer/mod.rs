//! The pull-based GraphQL tokenizer.
//!
//! [`GraphQLLexer::advance`] turns a byte offset into the next token. It
//! keeps no cursor of its own, so callers (usually the
//! [`GraphQLParser`](crate::GraphQLParser)) drive it one token at a time
//! and nothing is materialized up front.

mod graphql_lexer;
mod graphql_tokens;

pub use graphql_lexer::GraphQLLexer;
pub use graphql_tokens::GraphQLTokens;
