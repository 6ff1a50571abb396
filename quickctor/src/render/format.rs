//! Whitespace normalization applied to rendered source.

use super::LineEnding;

/// Normalizes whitespace in generated source.
///
/// Trailing whitespace is trimmed, runs of blank lines collapse to one, blank
/// lines directly after an opening brace or before a closing brace are
/// dropped, and the text ends with exactly one line terminator. Applying the
/// pass to its own output changes nothing.
///
/// # Examples
///
/// ```
/// use quickctor::render::{LineEnding, normalize};
///
/// let text = "{\n\n  x;  \n\n\n  y;\n\n}\n\n";
/// assert_eq!(normalize(text, LineEnding::Lf), "{\n  x;\n\n  y;\n}\n");
/// ```
#[must_use]
pub fn normalize(text: &str, line_ending: LineEnding) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for raw in text.lines() {
        let line = raw.trim_end();
        if line.is_empty() {
            let keep = lines
                .last()
                .is_some_and(|previous| !previous.is_empty() && !previous.ends_with('{'));
            if keep {
                lines.push(line);
            }
            continue;
        }
        if line.trim_start().starts_with('}') && lines.last().is_some_and(|last| last.is_empty()) {
            lines.pop();
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return String::new();
    }

    let terminator = line_ending.as_str();
    let mut output = lines.join(terminator);
    output.push_str(terminator);
    output
}
