//! Token types produced by the [`GraphQLLexer`](crate::lexer::GraphQLLexer)
//! and consumed by the [`GraphQLParser`](crate::GraphQLParser).

mod block_string;
mod graphql_token;
mod graphql_token_kind;

pub use block_string::dedent_block_string;
pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;
