mod ast_serialization_tests;
mod graphql_lexer_tests;
mod graphql_parser_document_tests;
mod source_position_tests;
mod utils;
