//! Escaping helpers for emitted identifiers and documentation text.

/// Prefixes an identifier with `@` so keyword names stay valid.
pub(super) fn verbatim(name: &str) -> String {
    format!("@{name}")
}

/// Escapes text placed inside an XML documentation comment.
pub(super) fn xml_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
