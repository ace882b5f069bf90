use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::Location;
use crate::SourcePosition;

/// The single error type produced by lexing or parsing.
///
/// Parsing stops at the first error, so a failed parse yields exactly one
/// `GraphQLParseError` and never a partial document.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Primary human-readable description.
    ///
    /// Examples: "expected `:`, found `String`", "unterminated string"
    message: String,

    /// Diagnostic name of the [`Source`](crate::Source) being parsed.
    source_name: String,

    /// Line/column/offset of the start of the offending text.
    position: SourcePosition,

    /// Byte range of the offending text. For unexpected tokens this is the
    /// token itself; for lexical errors it usually starts at the offending
    /// character.
    location: Location,

    kind: GraphQLParseErrorKind,

    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        source_name: impl Into<String>,
        position: SourcePosition,
        location: Location,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            source_name: source_name.into(),
            position,
            location,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 1-based line of the error.
    pub fn line(&self) -> usize {
        self.position.line()
    }

    /// 1-based character column of the error.
    pub fn column(&self) -> usize {
        self.position.column()
    }

    /// 0-based byte offset of the error.
    pub fn offset(&self) -> usize {
        self.position.byte_offset()
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Appends a note and returns `self`, for use while building an error.
    pub fn with_note(mut self, note: GraphQLErrorNote) -> Self {
        self.notes.push(note);
        self
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    pub fn add_note_at(
        &mut self,
        message: impl Into<String>,
        position: SourcePosition,
    ) {
        self.notes.push(GraphQLErrorNote::general_at(message, position));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a multi-line diagnostic.
    ///
    /// ```text
    /// error: expected `:`, found `String`
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    = help: ...
    /// ```
    ///
    /// When `source` is `None` the snippet is omitted but the
    /// `name:line:column` header is still rendered.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = format!(
            "error: {}\n  --> {}:{}:{}\n",
            self.message,
            self.source_name,
            self.position.line(),
            self.position.column(),
        );

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                GraphQLErrorNoteKind::General => "note",
                GraphQLErrorNoteKind::Help => "help",
                GraphQLErrorNoteKind::Spec => "spec",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(position), Some(src)) = (&note.position, source)
                && let Some(snippet) = format_note_snippet(src, position)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as `name:line:column: error: message`.
    ///
    /// This is also the `Display` form.
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: error: {}",
            self.source_name,
            self.position.line(),
            self.position.column(),
            self.message,
        )
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_content = nth_line(source, self.position.line())?;
        let line_num = self.position.line();
        let gutter = line_num.to_string().len().max(2);

        // Underline at most to the end of the error's first line.
        let col_start = self.position.column() - 1;
        let line_chars_left =
            line_content.chars().count().saturating_sub(col_start);
        let covered = source
            .get(self.location.start..self.location.end)
            .map(|text| text.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0);
        let underline_len = covered.min(line_chars_left).max(1);

        let mut output = String::new();
        output.push_str(&format!("{:>gutter$} |\n", ""));
        output.push_str(&format!("{line_num:>gutter$} | {line_content}\n"));
        output.push_str(&format!(
            "{:>gutter$} | {:>col_start$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
        ));
        Some(output)
    }
}

fn format_note_snippet(
    source: &str,
    position: &SourcePosition,
) -> Option<String> {
    let line_content = nth_line(source, position.line())?;
    let line_num = position.line();
    let gutter = line_num.to_string().len().max(2);
    let col_start = position.column() - 1;

    Some(format!(
        "     {line_num:>gutter$} | {line_content}\n     {:>gutter$} | {:>col_start$}-\n",
        "", "",
    ))
}

/// Returns the 1-based `line` of `source`, splitting on `\n`, `\r\n` and
/// lone `\r` the same way the lexer counts lines.
fn nth_line(source: &str, line: usize) -> Option<&str> {
    let mut current = 1;
    let mut line_start = 0;
    let bytes = source.as_bytes();
    for i in memchr::memchr2_iter(b'\n', b'\r', bytes) {
        if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
            continue;
        }
        if current == line {
            let end = if i > 0 && bytes[i] == b'\n' && bytes[i - 1] == b'\r' {
                i - 1
            } else {
                i
            };
            return source.get(line_start..end);
        }
        current += 1;
        line_start = i + 1;
    }
    (current == line).then(|| &source[line_start..])
}
