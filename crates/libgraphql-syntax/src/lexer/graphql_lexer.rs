use std::borrow::Cow;
use std::cell::Cell;

use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::Location;
use crate::Source;
use crate::SourcePosition;
use crate::lexer::GraphQLTokens;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::dedent_block_string;

const BYTE_ORDER_MARK: &[u8] = "\u{FEFF}".as_bytes();

/// Tokenizer over the body of one [`Source`].
///
/// The lexer is stateless with respect to tokenization: [`advance`] takes
/// the offset at which the previous token ended and returns the next token.
/// The only thing it precomputes is a table of line-start offsets so that
/// every token can report a 1-based line and column.
///
/// Ignored input (spaces, tabs, line terminators, commas and the byte-order
/// mark) is skipped before each token. Comments are returned as
/// [`GraphQLTokenKind::Comment`] tokens; the parser discards them.
///
/// Lexing stops at the first error: [`advance`] returns `Err` and no
/// further tokens are meaningful.
///
/// [`advance`]: GraphQLLexer::advance
///
/// # Example
///
/// ```
/// # use libgraphql_syntax::Source;
/// # use libgraphql_syntax::lexer::GraphQLLexer;
/// # use libgraphql_syntax::token::GraphQLTokenKind;
/// let source = Source::new("{ hero }");
/// let lexer = GraphQLLexer::new(&source);
/// let first = lexer.advance(0).unwrap();
/// assert_eq!(first.kind, GraphQLTokenKind::CurlyBraceOpen);
/// let second = lexer.advance(first.location.end).unwrap();
/// assert_eq!(second.kind, GraphQLTokenKind::Name("hero"));
/// ```
pub struct GraphQLLexer<'src> {
    body: &'src str,
    source_name: String,
    line_starts: Vec<usize>,

    // Last computed column, reused when the next lookup is later on the same
    // line so that long single-line documents stay linear.
    column_cursor: Cell<ColumnCursor>,
}

#[derive(Clone, Copy)]
struct ColumnCursor {
    line_start: usize,
    offset: usize,
    column: usize,
}

impl<'src> GraphQLLexer<'src> {
    pub fn new(source: &Source<'src>) -> Self {
        let body = source.body();
        Self {
            body,
            source_name: source.name().to_string(),
            line_starts: compute_line_starts(body),
            column_cursor: Cell::new(ColumnCursor {
                line_start: 0,
                offset: 0,
                column: 1,
            }),
        }
    }

    pub fn body(&self) -> &'src str {
        self.body
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Iterates over every token, comments included, through `Eof`.
    pub fn tokens(&self) -> GraphQLTokens<'_, 'src> {
        GraphQLTokens::new(self)
    }

    /// Converts a byte offset into a 1-based line/column position.
    ///
    /// Offsets past the end of the body are clamped to the end.
    pub fn position_at(&self, offset: usize) -> SourcePosition {
        let offset = offset.min(self.body.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];

        let cursor = self.column_cursor.get();
        let (from, base_column) =
            if cursor.line_start == line_start && cursor.offset <= offset {
                (cursor.offset, cursor.column)
            } else {
                (line_start, 1)
            };
        let column = base_column
            + self
                .body
                .get(from..offset)
                .map_or(0, |text| text.chars().count());

        self.column_cursor.set(ColumnCursor {
            line_start,
            offset,
            column,
        });
        SourcePosition::new(line, column, offset)
    }

    /// Lexes the token that follows `position` (normally the `end` of the
    /// previously returned token; `0` for the first token).
    ///
    /// At the end of the body an `Eof` token with an empty location at
    /// `body.len()` is returned, however many times it is requested.
    pub fn advance(
        &self,
        position: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let start = self.skip_ignored(position);
        let Some(&byte) = self.body.as_bytes().get(start) else {
            let end = self.body.len();
            return Ok(self.token(GraphQLTokenKind::Eof, end, end));
        };

        let kind = match byte {
            b'&' => GraphQLTokenKind::Ampersand,
            b'@' => GraphQLTokenKind::At,
            b'!' => GraphQLTokenKind::Bang,
            b':' => GraphQLTokenKind::Colon,
            b'}' => GraphQLTokenKind::CurlyBraceClose,
            b'{' => GraphQLTokenKind::CurlyBraceOpen,
            b'$' => GraphQLTokenKind::Dollar,
            b'=' => GraphQLTokenKind::Equals,
            b')' => GraphQLTokenKind::ParenClose,
            b'(' => GraphQLTokenKind::ParenOpen,
            b'|' => GraphQLTokenKind::Pipe,
            b']' => GraphQLTokenKind::SquareBracketClose,
            b'[' => GraphQLTokenKind::SquareBracketOpen,
            b'.' => return self.lex_dots(start),
            b'#' => return Ok(self.lex_comment(start)),
            b'"' if self.body.as_bytes()[start..].starts_with(b"\"\"\"") => {
                return self.lex_block_string(start);
            },
            b'"' => return self.lex_string(start),
            b'-' | b'0'..=b'9' => return self.lex_number(start),
            b if is_name_start(b) => return Ok(self.lex_name(start)),
            _ => return Err(self.unexpected_character(start)),
        };
        Ok(self.token(kind, start, start + 1))
    }

    fn token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: usize,
        end: usize,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, Location::new(start, end), self.position_at(start))
    }

    fn error(
        &self,
        message: impl Into<String>,
        start: usize,
        end: usize,
        kind: GraphQLParseErrorKind,
    ) -> GraphQLParseError {
        GraphQLParseError::new(
            message,
            self.source_name.as_str(),
            self.position_at(start),
            Location::new(start, end),
            kind,
        )
    }

    fn skip_ignored(&self, mut pos: usize) -> usize {
        let bytes = self.body.as_bytes();
        while let Some(&byte) = bytes.get(pos) {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' | b',' => pos += 1,
                0xEF if bytes[pos..].starts_with(BYTE_ORDER_MARK) => {
                    pos += BYTE_ORDER_MARK.len();
                },
                _ => break,
            }
        }
        pos
    }

    fn lex_comment(&self, start: usize) -> GraphQLToken<'src> {
        let bytes = self.body.as_bytes();
        let end = memchr::memchr2(b'\n', b'\r', &bytes[start..])
            .map_or(bytes.len(), |len| start + len);
        self.token(
            GraphQLTokenKind::Comment(&self.body[start + 1..end]),
            start,
            end,
        )
    }

    fn lex_dots(
        &self,
        start: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let bytes = &self.body.as_bytes()[start..];
        if bytes.starts_with(b"...") {
            return Ok(self.token(GraphQLTokenKind::Ellipsis, start, start + 3));
        }

        let dots = bytes.iter().take_while(|b| **b == b'.').count();
        let mut error = self.error(
            format!("unexpected `{}`", ".".repeat(dots)),
            start,
            start + dots,
            GraphQLParseErrorKind::UnexpectedCharacter { character: '.' },
        );
        let after = self.body[start + dots..].trim_start_matches([' ', '\t']);
        if after.starts_with('.') {
            error.add_help(
                "these dots may have been intended to form a `...` spread; \
                 remove the spaces between them",
            );
        } else if dots == 2 {
            error.add_help("use `...` for fragment spreads and inline fragments");
        }
        Err(error)
    }

    fn lex_name(&self, start: usize) -> GraphQLToken<'src> {
        let len = self.body.as_bytes()[start..]
            .iter()
            .take_while(|b| is_name_continue(**b))
            .count();
        let end = start + len;
        self.token(GraphQLTokenKind::Name(&self.body[start..end]), start, end)
    }

    // IntValue:   -? (0 | [1-9][0-9]*)
    // FloatValue: IntValue (.[0-9]+)? ([eE][+-]?[0-9]+)?  (at least one part)
    fn lex_number(
        &self,
        start: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let bytes = self.body.as_bytes();
        let is_digit_at = |pos: usize| bytes.get(pos).is_some_and(u8::is_ascii_digit);
        let skip_digits = |pos: usize| {
            pos + bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count()
        };

        let mut pos = start;
        if bytes[pos] == b'-' {
            pos += 1;
        }

        if bytes.get(pos) == Some(&b'0') {
            pos += 1;
            if is_digit_at(pos) {
                let mut error = self.number_error(
                    format!(
                        "unexpected digit {} after leading `0`",
                        self.describe_at(pos),
                    ),
                    pos,
                );
                error.add_help("integers may not have leading zeros");
                return Err(error);
            }
        } else if is_digit_at(pos) {
            pos = skip_digits(pos);
        } else {
            return Err(self.number_error(
                format!("expected digit after `-`, found {}", self.describe_at(pos)),
                pos,
            ));
        }

        let mut is_float = false;

        if bytes.get(pos) == Some(&b'.') {
            pos += 1;
            if !is_digit_at(pos) {
                return Err(self.number_error(
                    format!("expected digit after `.`, found {}", self.describe_at(pos)),
                    pos,
                ));
            }
            pos = skip_digits(pos);
            is_float = true;
        }

        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            pos += 1;
            if matches!(bytes.get(pos), Some(b'+' | b'-')) {
                pos += 1;
            }
            if !is_digit_at(pos) {
                return Err(self.number_error(
                    format!(
                        "expected digit in exponent, found {}",
                        self.describe_at(pos),
                    ),
                    pos,
                ));
            }
            pos = skip_digits(pos);
            is_float = true;
        }

        if let Some(&next) = bytes.get(pos)
            && (next == b'.' || is_name_start(next))
        {
            return Err(self.number_error(
                format!(
                    "unexpected {} after number `{}`",
                    self.describe_at(pos),
                    &self.body[start..pos],
                ),
                pos,
            ));
        }

        let text = &self.body[start..pos];
        let kind = if is_float {
            GraphQLTokenKind::FloatValue(text)
        } else {
            GraphQLTokenKind::IntValue(text)
        };
        Ok(self.token(kind, start, pos))
    }

    fn number_error(&self, message: String, at: usize) -> GraphQLParseError {
        self.error(
            message,
            at,
            at + self.char_len_at(at),
            GraphQLParseErrorKind::InvalidNumberLiteral,
        )
    }

    fn lex_string(
        &self,
        start: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let bytes = self.body.as_bytes();
        let mut pos = start + 1;
        let mut chunk_start = pos;
        // Allocated only once the first escape sequence is seen.
        let mut decoded: Option<String> = None;

        loop {
            let Some(&byte) = bytes.get(pos) else {
                return Err(self.unterminated_string(start, pos));
            };
            match byte {
                b'"' => {
                    let value = match decoded {
                        Some(mut owned) => {
                            owned.push_str(&self.body[chunk_start..pos]);
                            Cow::Owned(owned)
                        },
                        None => Cow::Borrowed(&self.body[chunk_start..pos]),
                    };
                    return Ok(self.token(
                        GraphQLTokenKind::StringValue(value),
                        start,
                        pos + 1,
                    ));
                },
                b'\n' | b'\r' => return Err(self.unterminated_string(start, pos)),
                b'\\' => {
                    let owned = decoded.get_or_insert_with(String::new);
                    owned.push_str(&self.body[chunk_start..pos]);
                    let (ch, len) = self.lex_escape(pos)?;
                    owned.push(ch);
                    pos += len;
                    chunk_start = pos;
                },
                b if is_disallowed_control(b) => {
                    return Err(self.control_character_error(pos, "string"));
                },
                _ => pos += 1,
            }
        }
    }

    fn unterminated_string(&self, start: usize, end: usize) -> GraphQLParseError {
        let mut error = self.error(
            "unterminated string",
            start,
            end,
            GraphQLParseErrorKind::UnterminatedString,
        );
        error.add_help(
            "strings may not span lines; use a `\"\"\"` block string for \
             multi-line text",
        );
        error
    }

    /// Decodes the escape sequence whose `\` is at `pos`, returning the
    /// character and the number of source bytes consumed.
    fn lex_escape(&self, pos: usize) -> Result<(char, usize), GraphQLParseError> {
        let ch = match self.body.as_bytes().get(pos + 1) {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{0008}',
            Some(b'f') => '\u{000C}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => return self.lex_unicode_escape(pos),
            Some(_) => {
                let end = pos + 1 + self.char_len_at(pos + 1);
                let sequence = &self.body[pos..end];
                return Err(self.error(
                    format!("invalid escape sequence `{sequence}`"),
                    pos,
                    end,
                    GraphQLParseErrorKind::InvalidEscapeSequence {
                        sequence: sequence.to_string(),
                    },
                ));
            },
            None => {
                return Err(self.error(
                    "incomplete escape sequence at end of input",
                    pos,
                    pos + 1,
                    GraphQLParseErrorKind::InvalidEscapeSequence {
                        sequence: "\\".to_string(),
                    },
                ));
            },
        };
        Ok((ch, 2))
    }

    // Handles `\uXXXX` (with UTF-16 surrogate pairs) and `\u{X...}`.
    fn lex_unicode_escape(
        &self,
        pos: usize,
    ) -> Result<(char, usize), GraphQLParseError> {
        let bytes = self.body.as_bytes();

        if bytes.get(pos + 2) == Some(&b'{') {
            let digits_start = pos + 3;
            let hex_len = bytes[digits_start..]
                .iter()
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            let close = digits_start + hex_len;
            if hex_len == 0 || hex_len > 6 || bytes.get(close) != Some(&b'}') {
                return Err(self.invalid_unicode_escape(pos, close));
            }
            return u32::from_str_radix(&self.body[digits_start..close], 16)
                .ok()
                .and_then(char::from_u32)
                .map(|ch| (ch, close + 1 - pos))
                .ok_or_else(|| self.invalid_unicode_escape(pos, close + 1));
        }

        let Some(code) = self.hex4(pos + 2) else {
            let bad_end = pos
                + 2
                + bytes[pos + 2..]
                    .iter()
                    .take(4)
                    .take_while(|b| b.is_ascii_alphanumeric())
                    .count();
            return Err(self.invalid_unicode_escape(pos, bad_end));
        };

        if (0xD800..=0xDBFF).contains(&code) {
            if bytes[pos + 6..].starts_with(b"\\u")
                && let Some(low) = self.hex4(pos + 8)
                && (0xDC00..=0xDFFF).contains(&low)
            {
                let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                if let Some(ch) = char::from_u32(combined) {
                    return Ok((ch, 12));
                }
            }
            let mut error = self.invalid_unicode_escape(pos, pos + 6);
            error.add_note("a high surrogate must be followed by a `\\u` low surrogate");
            return Err(error);
        }

        char::from_u32(code)
            .map(|ch| (ch, 6))
            .ok_or_else(|| self.invalid_unicode_escape(pos, pos + 6))
    }

    fn hex4(&self, at: usize) -> Option<u32> {
        let digits = self.body.get(at..at + 4)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok()
    }

    fn invalid_unicode_escape(&self, start: usize, end: usize) -> GraphQLParseError {
        let end = end.min(self.body.len());
        let sequence = self.body.get(start..end).unwrap_or("\\u").to_string();
        self.error(
            format!("invalid unicode escape sequence `{sequence}`"),
            start,
            end,
            GraphQLParseErrorKind::InvalidUnicodeEscape { sequence },
        )
    }

    // Block strings are raw: the only escape is `\"""`.
    fn lex_block_string(
        &self,
        start: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let bytes = self.body.as_bytes();
        let mut pos = start + 3;
        let mut chunk_start = pos;
        let mut raw = String::new();

        loop {
            let rest = &bytes[pos..];
            if rest.is_empty() {
                let mut error = self.error(
                    "unterminated block string",
                    start,
                    pos,
                    GraphQLParseErrorKind::UnterminatedBlockString,
                );
                error.add_help("close the block string with `\"\"\"`");
                return Err(error);
            }
            if rest.starts_with(b"\"\"\"") {
                raw.push_str(&self.body[chunk_start..pos]);
                let value = dedent_block_string(&raw);
                return Ok(self.token(
                    GraphQLTokenKind::BlockStringValue(Cow::Owned(value)),
                    start,
                    pos + 3,
                ));
            }
            if rest.starts_with(b"\\\"\"\"") {
                raw.push_str(&self.body[chunk_start..pos]);
                raw.push_str("\"\"\"");
                pos += 4;
                chunk_start = pos;
                continue;
            }
            if is_disallowed_control(rest[0]) && rest[0] != b'\n' && rest[0] != b'\r' {
                return Err(self.control_character_error(pos, "block string"));
            }
            pos += 1;
        }
    }

    fn control_character_error(&self, pos: usize, context: &str) -> GraphQLParseError {
        let ch = self.char_at(pos);
        self.error(
            format!("invalid character {} within {context}", describe_char(ch)),
            pos,
            pos + 1,
            GraphQLParseErrorKind::UnexpectedCharacter { character: ch },
        )
    }

    fn unexpected_character(&self, start: usize) -> GraphQLParseError {
        let ch = self.char_at(start);
        let mut error = self.error(
            format!("unexpected character {}", describe_char(ch)),
            start,
            start + ch.len_utf8(),
            GraphQLParseErrorKind::UnexpectedCharacter { character: ch },
        );
        if ch == '\'' {
            error.add_help("GraphQL strings use double quotes (`\"`)");
        }
        error
    }

    fn char_at(&self, pos: usize) -> char {
        self.body
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn char_len_at(&self, pos: usize) -> usize {
        self.body
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8)
    }

    fn describe_at(&self, pos: usize) -> String {
        if pos >= self.body.len() {
            "end of input".to_string()
        } else {
            describe_char(self.char_at(pos))
        }
    }
}

fn compute_line_starts(body: &str) -> Vec<usize> {
    let bytes = body.as_bytes();
    let mut starts = vec![0];
    for idx in memchr::memchr2_iter(b'\n', b'\r', bytes) {
        // `\r\n` is one terminator; the line starts after the `\n`.
        if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
            continue;
        }
        starts.push(idx + 1);
    }
    starts
}

fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

/// C0 control characters other than tab. Line terminators are handled by
/// the callers.
fn is_disallowed_control(byte: u8) -> bool {
    byte < 0x20 && byte != b'\t'
}

fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || is_invisible(ch) {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {name})", ch.escape_default(), ch as u32),
            None => format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

fn is_invisible(ch: char) -> bool {
    matches!(ch, '\u{200B}'..='\u{200F}' | '\u{2060}' | '\u{FEFF}')
}

/// Names of the invisible characters most often pasted into documents by
/// accident.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    Some(match ch {
        '\u{0000}' => "NULL",
        '\u{0008}' => "BACKSPACE",
        '\u{000B}' => "VERTICAL TAB",
        '\u{000C}' => "FORM FEED",
        '\u{001B}' => "ESCAPE",
        '\u{007F}' => "DELETE",
        '\u{0085}' => "NEXT LINE",
        '\u{00A0}' => "NO-BREAK SPACE",
        '\u{2028}' => "LINE SEPARATOR",
        '\u{2029}' => "PARAGRAPH SEPARATOR",
        '\u{200B}' => "ZERO WIDTH SPACE",
        '\u{200C}' => "ZERO WIDTH NON-JOINER",
        '\u{200D}' => "ZERO WIDTH JOINER",
        '\u{200E}' => "LEFT-TO-RIGHT MARK",
        '\u{200F}' => "RIGHT-TO-LEFT MARK",
        '\u{2060}' => "WORD JOINER",
        '\u{3000}' => "IDEOGRAPHIC SPACE",
        '\u{FEFF}' => "BYTE ORDER MARK",
        _ => return None,
    })
}
