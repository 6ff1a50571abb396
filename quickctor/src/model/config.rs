//! Marker options controlling constructor synthesis for one type.

use serde::{Deserialize, Serialize};

/// Documentation template applied when the marker does not override it.
///
/// `{0}` is replaced with a cross-reference to the type.
pub const DEFAULT_DOCUMENTATION: &str = "Initializes a new instance of the {0} class.";

/// Which fields become constructor parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Only read-only fields are included.
    #[default]
    ReadOnly,
    /// Every assignable instance field is included.
    All,
}

/// Which properties become constructor parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyPolicy {
    /// No property is included unless it carries an explicit override.
    None,
    /// Only getter-only auto-properties are included.
    #[default]
    ReadOnly,
    /// Every auto-property is included.
    All,
}

/// Strategy for emitting null guards in the generated constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullCheckMode {
    /// Guard every parameter whose type is a reference type.
    Always,
    /// Never emit guards.
    Never,
    /// Guard reference types annotated as non-nullable. Types without
    /// nullability information are not guarded.
    #[default]
    NonNullableReferencesOnly,
}

/// Accessibility of the generated constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    /// `public`
    #[default]
    Public,
    /// `internal`
    Internal,
    /// `protected`
    Protected,
    /// `private`
    Private,
}

impl Accessibility {
    /// Returns the modifier keyword for this accessibility.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// Options carried by the marker annotation.
///
/// Missing keys fall back to the marker defaults when deserialized, while an
/// explicit `null` documentation disables the documentation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Field inclusion policy.
    pub fields: FieldPolicy,
    /// Property inclusion policy.
    pub properties: PropertyPolicy,
    /// Null guard strategy.
    pub null_checks: NullCheckMode,
    /// Accessibility of the generated constructor.
    pub accessibility: Accessibility,
    /// Summary template; `{0}` expands to a reference to the type.
    pub documentation: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            fields: FieldPolicy::default(),
            properties: PropertyPolicy::default(),
            null_checks: NullCheckMode::default(),
            accessibility: Accessibility::default(),
            documentation: Some(DEFAULT_DOCUMENTATION.to_owned()),
        }
    }
}

impl Configuration {
    /// Returns a copy with the documentation block disabled.
    #[must_use]
    pub fn without_documentation(mut self) -> Self {
        self.documentation = None;
        self
    }
}
