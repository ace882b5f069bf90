use crate::ReservedNameContext;

/// Categorizes a [`GraphQLParseError`](crate::GraphQLParseError) for
/// programmatic handling.
///
/// Variants carry only the data a tool needs to branch on. The full
/// human-readable explanation lives in the error's `message` and `notes`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    // ---------------------------------------------------------------------
    // Lexical errors
    // ---------------------------------------------------------------------

    /// A character that cannot start any token.
    ///
    /// ```text
    /// { field% }
    ///        ^ unexpected character `%`
    /// ```
    #[error("unexpected character `{character}`")]
    UnexpectedCharacter { character: char },

    /// A `"` string reached a line terminator or the end of input before
    /// its closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// A `"""` block string reached the end of input before its closing
    /// `"""`.
    #[error("unterminated block string")]
    UnterminatedBlockString,

    /// A `\` escape other than `\" \\ \/ \b \f \n \r \t \u`.
    #[error("invalid escape sequence `{sequence}`")]
    InvalidEscapeSequence { sequence: String },

    /// A `\u` escape that is malformed or does not denote a Unicode scalar
    /// value (e.g. a lone surrogate).
    #[error("invalid unicode escape `{sequence}`")]
    InvalidUnicodeEscape { sequence: String },

    /// A leading zero (`01`), a dangling `.` (`1.`), an exponent with no
    /// digits (`1e`), or a number running straight into a name (`1x`).
    #[error("invalid number literal")]
    InvalidNumberLiteral,

    // ---------------------------------------------------------------------
    // Syntactic errors
    // ---------------------------------------------------------------------

    /// The current token does not fit the production being parsed.
    ///
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token {found}")]
    UnexpectedToken {
        /// Human-readable descriptions of what would have been accepted.
        expected: Vec<String>,
        /// Description of the token found, already quoted where it is
        /// literal text (e.g. "`String`", "string").
        found: String,
    },

    /// The input ended in the middle of a production.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput { expected: Vec<String> },

    /// `{ }` where a selection set requires at least one selection.
    #[error("empty selection set")]
    EmptySelectionSet,

    /// `directive @d on` with no location after `on`.
    #[error("empty directive location list")]
    EmptyDirectiveLocationList,

    /// Another construct that the grammar requires to be non-empty, such
    /// as `()` argument lists.
    #[error("invalid empty {construct}")]
    InvalidEmptyConstruct { construct: String },

    /// A `$variable` inside a value that must be constant (default values
    /// and directives in type-system definitions).
    #[error("variable in constant value")]
    VariableInConstContext,

    /// A name that is reserved where it appears.
    #[error("reserved {context} `{name}`")]
    ReservedName {
        name: String,
        context: ReservedNameContext,
    },

    /// A directive definition location that is not one of the names the
    /// GraphQL specification defines.
    #[error("unknown directive location `{name}`")]
    UnknownDirectiveLocation { name: String },

    /// Selection sets, values or types nested deeper than the configured
    /// [`GraphQLParserOptions::max_recursion_depth`](crate::GraphQLParserOptions).
    #[error("nesting exceeds the recursion limit of {limit}")]
    RecursionLimitExceeded { limit: usize },
}
