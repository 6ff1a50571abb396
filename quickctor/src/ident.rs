//! Parameter identifier derivation.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Derives a parameter name from a member name.
///
/// Leading characters that are not letters are stripped and the first
/// remaining character is lower-cased. When nothing survives the strip the
/// original name is returned unchanged.
///
/// # Examples
///
/// ```
/// use quickctor::ident::derive;
///
/// assert_eq!(derive("_count"), "count");
/// assert_eq!(derive("Value"), "value");
/// assert_eq!(derive("_1"), "_1");
/// ```
#[must_use]
pub fn derive(name: &str) -> String {
    let trimmed = name.trim_start_matches(|ch: char| !is_letter(ch));
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => name.to_owned(),
    }
}

/// Removes every leading `@` escape marker from an explicit name.
#[must_use]
pub fn strip_escape(name: &str) -> &str {
    name.trim_start_matches('@')
}

/// Returns `true` when `name` is a syntactically valid identifier.
///
/// The first character must be a letter character (categories `L*` and
/// `Nl`) or `_`. Later characters may also be combining marks, decimal
/// digits, connector punctuation or formatting characters.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_part)
}

fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_identifier_start(ch: char) -> bool {
    ch == '_'
        || is_letter(ch)
        || get_general_category(ch) == GeneralCategory::LetterNumber
}

fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch)
        || matches!(
            get_general_category(ch),
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::DecimalNumber
                | GeneralCategory::ConnectorPunctuation
                | GeneralCategory::Format
        )
}
