//! Tests for line/column reporting by [`GraphQLLexer::position_at`].

use crate::Source;
use crate::SourcePosition;
use crate::lexer::GraphQLLexer;
use crate::tests::utils::parse_err;

/// Verifies `\n`, `\r\n` and lone `\r` each end exactly one line.
///
/// See <https://spec.graphql.org/September2025/#LineTerminator>.
#[test]
fn every_line_terminator_starts_a_new_line() {
    let source = Source::new("a\r\nb\rc\nd");
    let lexer = GraphQLLexer::new(&source);

    let lines: Vec<(usize, usize)> = lexer
        .tokens()
        .map(|token| token.unwrap())
        .map(|token| (token.line(), token.column()))
        .collect();
    assert_eq!(lines, [(1, 1), (2, 1), (3, 1), (4, 1), (4, 2)]);
}

/// Verifies columns count characters, not bytes.
#[test]
fn columns_count_characters() {
    let source = Source::new("\"é\" x");
    let lexer = GraphQLLexer::new(&source);
    assert_eq!(lexer.position_at(5), SourcePosition::new(1, 5, 5));
}

/// Verifies positions can be requested out of order.
#[test]
fn position_lookups_are_order_independent() {
    let source = Source::new("ab\ncdef\ng");
    let lexer = GraphQLLexer::new(&source);
    assert_eq!(lexer.position_at(6), SourcePosition::new(2, 4, 6));
    assert_eq!(lexer.position_at(4), SourcePosition::new(2, 2, 4));
    assert_eq!(lexer.position_at(1), SourcePosition::new(1, 2, 1));
    assert_eq!(lexer.position_at(8), SourcePosition::new(3, 1, 8));
    assert_eq!(lexer.position_at(7), SourcePosition::new(2, 5, 7));
}

#[test]
fn offsets_past_the_end_are_clamped() {
    let source = Source::new("ab");
    let lexer = GraphQLLexer::new(&source);
    assert_eq!(lexer.position_at(100), SourcePosition::new(1, 3, 2));
}

/// Verifies parse errors report the position of the offending token.
#[test]
fn errors_report_line_and_column() {
    let error = parse_err("type Query {\n  name String\n}");
    assert_eq!(error.line(), 2);
    assert_eq!(error.column(), 8);
    assert_eq!(error.offset(), 20);
}
