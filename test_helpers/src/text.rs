//! Text helpers for inspecting generated source files.

/// Converts CRLF line endings to LF.
#[must_use]
pub fn lf(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Returns the trimmed non-empty lines of `text`.
#[must_use]
pub fn code_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Extracts the text of the constructor body: the lines between the first
/// `{` following the signature and its matching `}`.
///
/// Returns `None` when `signature` does not occur in `text`.
#[must_use]
pub fn constructor_body(text: &str, signature: &str) -> Option<Vec<String>> {
    let (_, after) = text.split_once(signature)?;
    let mut depth = 0_usize;
    let mut body = Vec::new();
    for line in after.lines().map(str::trim) {
        match line {
            "{" => {
                depth += 1;
                if depth == 1 {
                    continue;
                }
            }
            "}" => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(body);
                }
            }
            _ => {}
        }
        if depth > 0 && !line.is_empty() {
            body.push(line.to_owned());
        }
    }
    Some(body)
}

/// Returns the positions of each needle in `text`, or `None` when any is
/// missing.
#[must_use]
pub fn positions(text: &str, needles: &[&str]) -> Option<Vec<usize>> {
    needles.iter().map(|needle| text.find(needle)).collect()
}

/// Returns `true` when every needle occurs in `text` in the given order.
#[must_use]
pub fn appear_in_order(text: &str, needles: &[&str]) -> bool {
    positions(text, needles).is_some_and(|found| {
        found
            .windows(2)
            .all(|pair| matches!(pair, [earlier, later] if earlier < later))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "class A\n{\n    public A(\n        int @x)\n    {\n        this.@x = @x;\n    }\n}\n";

    #[test]
    fn lf_strips_carriage_returns() {
        assert_eq!(lf("a\r\nb\r\n"), "a\nb\n");
    }

    #[test]
    fn code_lines_drop_blanks_and_indentation() {
        assert_eq!(code_lines("  a\n\n    b\n"), ["a", "b"]);
    }

    #[test]
    fn constructor_body_returns_statements() {
        assert_eq!(
            constructor_body(SAMPLE, "public A("),
            Some(vec!["this.@x = @x;".to_owned()])
        );
        assert_eq!(constructor_body(SAMPLE, "public B("), None);
    }

    #[test]
    fn appear_in_order_checks_sequence() {
        assert!(appear_in_order(SAMPLE, &["class A", "public A(", "this.@x"]));
        assert!(!appear_in_order(SAMPLE, &["this.@x", "public A("]));
        assert!(!appear_in_order(SAMPLE, &["missing"]));
    }
}
