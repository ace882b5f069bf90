use crate::GraphQLParseError;
use crate::lexer::GraphQLLexer;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Iterator over every token of a source, comments included.
///
/// Yields the final `Eof` token and then stops. After an error is yielded
/// the iterator is exhausted, matching the lexer's stop-at-first-error
/// behavior.
pub struct GraphQLTokens<'lexer, 'src> {
    lexer: &'lexer GraphQLLexer<'src>,
    position: usize,
    finished: bool,
}

impl<'lexer, 'src> GraphQLTokens<'lexer, 'src> {
    pub(crate) fn new(lexer: &'lexer GraphQLLexer<'src>) -> Self {
        Self {
            lexer,
            position: 0,
            finished: false,
        }
    }
}

impl<'src> Iterator for GraphQLTokens<'_, 'src> {
    type Item = Result<GraphQLToken<'src>, GraphQLParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.lexer.advance(self.position);
        match &result {
            Ok(token) => {
                self.position = token.location.end;
                self.finished = token.kind == GraphQLTokenKind::Eof;
            },
            Err(_) => self.finished = true,
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for GraphQLTokens<'_, '_> {}
