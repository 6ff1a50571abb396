//! Diagnostics reported when a constructor cannot be synthesized.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::model::SourceLocation;

/// Stable identifiers of the failures synthesis can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCode {
    /// Two parameters of the same constructor share a name.
    #[serde(rename = "QC0001")]
    DuplicateParameter,
    /// An override name is not a valid identifier.
    #[serde(rename = "QC0002")]
    InvalidParameterName,
    /// The base type neither opts in nor offers a parameterless constructor.
    #[serde(rename = "QC0003")]
    BaseTypeMustOptIn,
}

impl DiagnosticCode {
    /// The stable identifier, e.g. `QC0001`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::DuplicateParameter => "QC0001",
            Self::InvalidParameterName => "QC0002",
            Self::BaseTypeMustOptIn => "QC0003",
        }
    }

    /// Message template with positional `{0}`, `{1}` arguments.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::DuplicateParameter => {
                "The parameter '{0}' is duplicated in the generated constructor for '{1}'."
            }
            Self::InvalidParameterName => {
                "The parameter name '{0}' used in '{1}' is not a valid identifier."
            }
            Self::BaseTypeMustOptIn => {
                "Decorate the base type of '{0}' with the marker or give it an accessible parameterless constructor."
            }
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A failure reported against one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable identifier.
    pub code: DiagnosticCode,
    /// Positional message arguments.
    pub arguments: Vec<String>,
    /// Declaration the diagnostic is attached to, as supplied by the host.
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    /// Creates a diagnostic for `code`.
    #[must_use]
    pub fn new(
        code: DiagnosticCode,
        arguments: impl IntoIterator<Item = String>,
        location: Option<SourceLocation>,
    ) -> Self {
        Self {
            code,
            arguments: arguments.into_iter().collect(),
            location,
        }
    }

    /// Expands the code's template with the positional arguments.
    ///
    /// Placeholders without a matching argument are left as written.
    #[must_use]
    pub fn message(&self) -> String {
        self.arguments
            .iter()
            .enumerate()
            .fold(self.code.template().to_owned(), |text, (index, arg)| {
                text.replace(&format!("{{{index}}}"), arg)
            })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message())
    }
}

/// Why synthesis was abandoned for a type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// The type itself is at fault.
    #[error("{0}")]
    Diagnostic(Diagnostic),
    /// A base type failed; its own request reports the diagnostic.
    #[error("base type '{ancestor}' could not be synthesized: {cause}")]
    Ancestor {
        /// Display name of the failing base type.
        ancestor: String,
        /// The failure of that base type.
        #[source]
        cause: Box<Self>,
    },
}

impl SynthesisError {
    /// The diagnostic to report for this request, `None` when an ancestor
    /// already reports it.
    #[must_use]
    pub const fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Diagnostic(diagnostic) => Some(diagnostic),
            Self::Ancestor { .. } => None,
        }
    }

    /// The diagnostic at the original failure point of the chain.
    #[must_use]
    pub fn root_cause(&self) -> &Diagnostic {
        match self {
            Self::Diagnostic(diagnostic) => diagnostic,
            Self::Ancestor { cause, .. } => cause.root_cause(),
        }
    }
}

impl From<Diagnostic> for SynthesisError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::Diagnostic(diagnostic)
    }
}
