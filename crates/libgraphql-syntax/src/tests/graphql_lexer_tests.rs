//! Tests for [`GraphQLLexer`]: token kinds, literal decoding, ignored input
//! and lexical errors.

use std::borrow::Cow;

use crate::GraphQLParseErrorKind;
use crate::Location;
use crate::Source;
use crate::lexer::GraphQLLexer;
use crate::tests::utils::lex_err;
use crate::tests::utils::lex_kinds;
use crate::token::GraphQLTokenKind;

// =============================================================================
// Punctuators and names
// =============================================================================

#[test]
fn lexes_every_punctuator() {
    assert_eq!(
        lex_kinds("! $ & ( ) ... : = @ [ ] { | }"),
        vec![
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::Ampersand,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::Ellipsis,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::CurlyBraceClose,
        ],
    );
}

#[test]
fn lexes_names() {
    assert_eq!(
        lex_kinds("_a b2 __typename query true"),
        vec![
            GraphQLTokenKind::Name("_a"),
            GraphQLTokenKind::Name("b2"),
            GraphQLTokenKind::Name("__typename"),
            GraphQLTokenKind::Name("query"),
            GraphQLTokenKind::Name("true"),
        ],
    );
}

/// Verifies punctuators need no surrounding whitespace.
#[test]
fn lexes_adjacent_tokens() {
    assert_eq!(
        lex_kinds("{a(b:$c)}"),
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Name("a"),
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::Name("b"),
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::Name("c"),
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::CurlyBraceClose,
        ],
    );
}

// =============================================================================
// Numbers
// =============================================================================

/// Verifies integer and float forms, including the sign being part of the
/// token.
///
/// See <https://spec.graphql.org/September2025/#sec-Int-Value>.
#[test]
fn lexes_numbers() {
    assert_eq!(
        lex_kinds("0 -0 123 -12 1.5 1e10 1.5E-3 -2.0e+2"),
        vec![
            GraphQLTokenKind::IntValue("0"),
            GraphQLTokenKind::IntValue("-0"),
            GraphQLTokenKind::IntValue("123"),
            GraphQLTokenKind::IntValue("-12"),
            GraphQLTokenKind::FloatValue("1.5"),
            GraphQLTokenKind::FloatValue("1e10"),
            GraphQLTokenKind::FloatValue("1.5E-3"),
            GraphQLTokenKind::FloatValue("-2.0e+2"),
        ],
    );
}

#[test]
fn rejects_leading_zero() {
    let error = lex_err("01");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidNumberLiteral);
    assert_eq!(error.offset(), 1);
    assert!(
        error.notes().iter().any(|n| n.message.contains("leading zeros")),
        "{error:?}",
    );
}

#[test]
fn rejects_missing_fraction_digits() {
    let error = lex_err("1.");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidNumberLiteral);
    assert_eq!(error.offset(), 2);
    assert_eq!(error.message(), "expected digit after `.`, found end of input");
}

#[test]
fn rejects_missing_exponent_digits() {
    let error = lex_err("1e");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidNumberLiteral);
    assert_eq!(error.offset(), 2);

    let error = lex_err("2E+ ");
    assert_eq!(error.offset(), 3);
}

#[test]
fn rejects_lone_minus() {
    let error = lex_err("-");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidNumberLiteral);
    assert_eq!(error.offset(), 1);

    let error = lex_err("-a");
    assert_eq!(error.message(), "expected digit after `-`, found `a`");
}

/// Verifies a number may not be directly followed by a name start or a dot;
/// `123abc` is not `123` followed by `abc`.
///
/// See <https://spec.graphql.org/September2025/#sec-Int-Value>.
#[test]
fn rejects_number_followed_by_name_or_dot() {
    let error = lex_err("123abc");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidNumberLiteral);
    assert_eq!(error.offset(), 3);
    assert_eq!(error.message(), "unexpected `a` after number `123`");

    let error = lex_err("1.2.3");
    assert_eq!(error.offset(), 3);

    let error = lex_err("0x1F");
    assert_eq!(error.offset(), 1);
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies a string without escapes borrows from the source.
#[test]
fn simple_string_is_borrowed() {
    let kinds = lex_kinds("\"hello world\"");
    let [GraphQLTokenKind::StringValue(value)] = kinds.as_slice() else {
        panic!("expected one string, got {kinds:?}");
    };
    assert_eq!(value, "hello world");
    assert!(matches!(value, Cow::Borrowed(_)));
}

#[test]
fn empty_string() {
    assert_eq!(
        lex_kinds("\"\""),
        vec![GraphQLTokenKind::StringValue(Cow::Borrowed(""))],
    );
}

/// See <https://spec.graphql.org/September2025/#EscapedCharacter>.
#[test]
fn decodes_simple_escapes() {
    let kinds = lex_kinds(r#""a\"b\\c\/d\be\ff\ng\rh\ti""#);
    let [GraphQLTokenKind::StringValue(value)] = kinds.as_slice() else {
        panic!("expected one string, got {kinds:?}");
    };
    assert_eq!(value, "a\"b\\c/d\u{8}e\u{c}f\ng\rh\ti");
    assert!(matches!(value, Cow::Owned(_)));
}

/// Verifies fixed-width, braced and surrogate-pair unicode escapes.
#[test]
fn decodes_unicode_escapes() {
    let kinds = lex_kinds(r#""\u0041\u00e9\u{1F600}\uD83D\uDE00""#);
    assert_eq!(
        kinds,
        vec![GraphQLTokenKind::StringValue(Cow::Owned("Aé😀😀".to_string()))],
    );
}

#[test]
fn non_ascii_text_passes_through() {
    assert_eq!(
        lex_kinds("\"日本語 ✓\""),
        vec![GraphQLTokenKind::StringValue(Cow::Borrowed("日本語 ✓"))],
    );
}

#[test]
fn rejects_unknown_escape() {
    let error = lex_err(r#""bad \x escape""#);
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::InvalidEscapeSequence {
            sequence: "\\x".to_string(),
        },
    );
    assert_eq!(error.location(), Location::new(5, 7));
}

#[test]
fn rejects_invalid_unicode_escapes() {
    let error = lex_err(r#""\uZZZZ""#);
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::InvalidUnicodeEscape {
            sequence: "\\uZZZZ".to_string(),
        },
    );

    let error = lex_err(r#""\u{110000}""#);
    assert!(matches!(error.kind(), GraphQLParseErrorKind::InvalidUnicodeEscape { .. }));

    let error = lex_err(r#""\u{}""#);
    assert!(matches!(error.kind(), GraphQLParseErrorKind::InvalidUnicodeEscape { .. }));
}

/// Verifies surrogate halves are only accepted as a high/low pair.
#[test]
fn rejects_unpaired_surrogates() {
    let error = lex_err(r#""\uD83D""#);
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::InvalidUnicodeEscape {
            sequence: "\\uD83D".to_string(),
        },
    );
    assert!(!error.notes().is_empty());

    let error = lex_err(r#""\uDE00""#);
    assert!(matches!(error.kind(), GraphQLParseErrorKind::InvalidUnicodeEscape { .. }));
}

#[test]
fn rejects_unterminated_strings() {
    let error = lex_err("\"abc");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::UnterminatedString);
    assert_eq!(error.offset(), 0);

    let error = lex_err("\"abc\ndef\"");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::UnterminatedString);
    assert!(
        error.notes().iter().any(|n| n.message.contains("block string")),
        "{error:?}",
    );
}

#[test]
fn rejects_control_characters_in_strings() {
    let error = lex_err("\"a\u{1}b\"");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedCharacter { character: '\u{1}' },
    );
    assert_eq!(error.offset(), 2);
}

// =============================================================================
// Block strings
// =============================================================================

#[test]
fn block_string_is_dedented() {
    let source = "\"\"\"\n    Hello,\n      World!\n\n    Yours\n  \"\"\"";
    assert_eq!(
        lex_kinds(source),
        vec![GraphQLTokenKind::BlockStringValue(Cow::Owned(
            "Hello,\n  World!\n\nYours".to_string(),
        ))],
    );
}

/// Verifies block strings are raw apart from the `\"""` escape.
#[test]
fn block_string_only_escapes_triple_quote() {
    let source = r#""""a \""" b \n c""""#;
    assert_eq!(
        lex_kinds(source),
        vec![GraphQLTokenKind::BlockStringValue(Cow::Owned(
            "a \"\"\" b \\n c".to_string(),
        ))],
    );
}

#[test]
fn block_string_may_contain_quotes_and_newlines() {
    let source = "\"\"\"say \"hi\"\r\nbye\"\"\"";
    assert_eq!(
        lex_kinds(source),
        vec![GraphQLTokenKind::BlockStringValue(Cow::Owned(
            "say \"hi\"\nbye".to_string(),
        ))],
    );
}

#[test]
fn rejects_unterminated_block_string() {
    let error = lex_err("\"\"\"never closed\n\"");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::UnterminatedBlockString);
    assert_eq!(error.offset(), 0);
}

// =============================================================================
// Ignored input and comments
// =============================================================================

/// Verifies the byte-order mark, commas and all whitespace are skipped.
///
/// See <https://spec.graphql.org/September2025/#sec-Language.Source-Text.Ignored-Tokens>.
#[test]
fn skips_ignored_tokens() {
    let body = "\u{FEFF},, \t\r\nfoo,bar";
    let source = Source::new(body);
    let lexer = GraphQLLexer::new(&source);

    let foo = lexer.advance(0).unwrap();
    assert_eq!(foo.kind, GraphQLTokenKind::Name("foo"));
    assert_eq!(foo.location, Location::new(9, 12));
    assert_eq!((foo.line(), foo.column()), (2, 1));

    let bar = lexer.advance(foo.location.end).unwrap();
    assert_eq!(bar.kind, GraphQLTokenKind::Name("bar"));
    assert_eq!(bar.location, Location::new(13, 16));
}

#[test]
fn comments_are_tokens() {
    assert_eq!(
        lex_kinds("# first\nfoo # second\r\n#"),
        vec![
            GraphQLTokenKind::Comment(" first"),
            GraphQLTokenKind::Name("foo"),
            GraphQLTokenKind::Comment(" second"),
            GraphQLTokenKind::Comment(""),
        ],
    );
}

/// Verifies the lexer keeps returning `Eof` at the end of the body.
#[test]
fn eof_is_repeatable() {
    let source = Source::new("  ");
    let lexer = GraphQLLexer::new(&source);
    for _ in 0..3 {
        let eof = lexer.advance(0).unwrap();
        assert_eq!(eof.kind, GraphQLTokenKind::Eof);
        assert_eq!(eof.location, Location::new(2, 2));
    }
}

// =============================================================================
// Unexpected characters
// =============================================================================

#[test]
fn single_quote_suggests_double_quotes() {
    let error = lex_err("{ f(a: 'x') }");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedCharacter { character: '\'' },
    );
    assert_eq!(error.offset(), 7);
    assert!(
        error.notes().iter().any(|n| n.message.contains("double quotes")),
        "{error:?}",
    );
}

/// Verifies invisible characters are named rather than printed raw.
#[test]
fn names_invisible_characters() {
    let error = lex_err("a\u{200B}b");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedCharacter { character: '\u{200B}' },
    );
    assert!(error.message().contains("U+200B"), "{}", error.message());
    assert!(error.message().contains("ZERO WIDTH SPACE"), "{}", error.message());
    assert_eq!(error.location(), Location::new(1, 4));
}

#[test]
fn dots_that_are_not_an_ellipsis() {
    let error = lex_err("..");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedCharacter { character: '.' },
    );
    assert!(
        error.notes().iter().any(|n| n.message.contains("`...`")),
        "{error:?}",
    );

    let error = lex_err(". . .");
    assert!(
        error.notes().iter().any(|n| n.message.contains("remove the spaces")),
        "{error:?}",
    );
}

// =============================================================================
// Token iterator
// =============================================================================

#[test]
fn tokens_iterator_ends_after_eof() {
    let source = Source::new("{ a } # c");
    let lexer = GraphQLLexer::new(&source);
    let kinds: Vec<GraphQLTokenKind<'_>> = lexer
        .tokens()
        .map(|token| token.unwrap().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Name("a"),
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Comment(" c"),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn tokens_iterator_stops_at_first_error() {
    let source = Source::new("a ? b");
    let lexer = GraphQLLexer::new(&source);
    let mut tokens = lexer.tokens();
    assert!(tokens.next().is_some_and(|t| t.is_ok()));
    assert!(tokens.next().is_some_and(|t| t.is_err()));
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}
