/// Applies the GraphQL block-string value algorithm to the raw text between
/// the `"""` delimiters (with `\"""` already unescaped).
///
/// 1. Split into lines on `\r\n`, `\n` or `\r`.
/// 2. Find the smallest leading-whitespace (space/tab) width among all
///    lines *after the first* that contain a non-whitespace character.
/// 3. Remove that much leading whitespace from every line after the first.
/// 4. Drop leading and trailing lines that are empty or whitespace-only.
/// 5. Join the remaining lines with `\n`.
///
/// See <https://spec.graphql.org/October2021/#BlockStringValue()>.
pub fn dedent_block_string(raw: &str) -> String {
    let lines = split_lines(raw);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace(line);
            (indent < line.len()).then_some(indent)
        })
        .min()
        .unwrap_or(0);

    let dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 || common_indent == 0 {
                *line
            } else {
                &line[common_indent.min(leading_whitespace(line))..]
            }
        })
        .collect();

    let is_blank = |line: &&str| leading_whitespace(line) == line.len();
    let first = dedented.iter().position(|l| !is_blank(l));
    let Some(first) = first else {
        return String::new();
    };
    let last = dedented.iter().rposition(|l| !is_blank(l)).unwrap_or(first);

    dedented[first..=last].join("\n")
}

/// Width in bytes of the leading run of spaces and tabs.
fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn split_lines(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut idx = 0;
    while let Some(offset) = memchr::memchr2(b'\n', b'\r', &bytes[idx..]) {
        let terminator = idx + offset;
        lines.push(&raw[line_start..terminator]);
        idx = if bytes[terminator] == b'\r'
            && bytes.get(terminator + 1) == Some(&b'\n')
        {
            terminator + 2
        } else {
            terminator + 1
        };
        line_start = idx;
    }
    lines.push(&raw[line_start..]);
    lines
}
