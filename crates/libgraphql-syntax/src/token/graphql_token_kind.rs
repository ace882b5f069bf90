use std::borrow::Cow;

/// The kind of a GraphQL token, with the token's text where it carries any.
///
/// `Name`, `IntValue`, `FloatValue` and `Comment` borrow their text verbatim
/// from the source. String literals are decoded (escapes resolved, block
/// strings dedented) at lex time, so they borrow only when no decoding was
/// necessary.
///
/// `true`, `false` and `null` are ordinary `Name` tokens; only the parser
/// gives them meaning, and only in value position.
///
/// Negative numbers are single tokens: `-12` lexes as `IntValue("-12")`.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    /// Start of input. Never produced by the lexer; used as the parser's
    /// initial current token.
    Sof,

    /// End of input.
    Eof,

    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    Name(&'src str),

    /// Raw integer text including any leading `-`.
    IntValue(&'src str),

    /// Raw float text including any leading `-`.
    FloatValue(&'src str),

    /// Decoded contents of a `"..."` string.
    StringValue(Cow<'src, str>),

    /// Decoded and dedented contents of a `"""..."""` block string.
    BlockStringValue(Cow<'src, str>),

    /// Text of a `#` comment, excluding the `#` and the line terminator.
    Comment(&'src str),
}

impl<'src> GraphQLTokenKind<'src> {
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the source text of a punctuator token, or `None` for any
    /// other kind.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        Some(match self {
            Self::Ampersand => "&",
            Self::At => "@",
            Self::Bang => "!",
            Self::Colon => ":",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::Dollar => "$",
            Self::Ellipsis => "...",
            Self::Equals => "=",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::Pipe => "|",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
            _ => return None,
        })
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::StringValue(_) | Self::BlockStringValue(_))
    }

    /// Returns `true` if this is a `Name` token whose text is exactly
    /// `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Self::Name(name) if *name == keyword)
    }

    /// Describes the token for use in "found ..." error messages.
    pub fn describe(&self) -> String {
        if let Some(punct) = self.as_punctuator_str() {
            return format!("`{punct}`");
        }
        match self {
            Self::Sof => "start of input".to_string(),
            Self::Eof => "end of input".to_string(),
            Self::Name(name) => format!("`{name}`"),
            Self::IntValue(raw) | Self::FloatValue(raw) => format!("`{raw}`"),
            Self::StringValue(_) => "string".to_string(),
            Self::BlockStringValue(_) => "block string".to_string(),
            Self::Comment(_) => "comment".to_string(),
            _ => unreachable!("punctuators are described above"),
        }
    }
}
