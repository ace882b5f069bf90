use crate::GraphQLErrorNoteKind;
use crate::SmallVec;
use crate::SourcePosition;

/// Secondary information attached to a
/// [`GraphQLParseError`](crate::GraphQLParseError).
///
/// A note may point at a related position in the source, e.g. where an
/// unclosed `{` was opened.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
    pub position: Option<SourcePosition>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            position: None,
        }
    }

    pub fn general_at(
        message: impl Into<String>,
        position: SourcePosition,
    ) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            position: Some(position),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            position: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            position: None,
        }
    }
}

/// Most errors carry zero to two notes, so they are kept inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
