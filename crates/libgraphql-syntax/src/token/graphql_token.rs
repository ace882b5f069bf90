use crate::Location;
use crate::SourcePosition;
use crate::token::GraphQLTokenKind;

/// A single lexed token: its kind, its byte range and the line/column at
/// which it starts.
///
/// Tokens are transient. The parser holds exactly one at a time and drops it
/// once the next one has been requested.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,
    pub location: Location,
    pub position: SourcePosition,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(
        kind: GraphQLTokenKind<'src>,
        location: Location,
        position: SourcePosition,
    ) -> Self {
        Self {
            kind,
            location,
            position,
        }
    }

    /// The placeholder token a parser holds before requesting the first real
    /// token from the lexer.
    pub fn start_of_input() -> Self {
        Self {
            kind: GraphQLTokenKind::Sof,
            location: Location::new(0, 0),
            position: SourcePosition::new(1, 1, 0),
        }
    }

    /// 1-based line on which the token starts.
    pub fn line(&self) -> usize {
        self.position.line()
    }

    /// 1-based character column at which the token starts.
    pub fn column(&self) -> usize {
        self.position.column()
    }
}
