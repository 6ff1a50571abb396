//! Runs synthesis for every candidate in a manifest.

use quickctor::{Diagnostic, DiagnosticCode, SourceLocation, SynthesisError, synthesize};
use serde::Serialize;
use tracing::{info, warn};

use crate::manifest::Manifest;
use crate::naming::HintNames;
use crate::settings::GeneratorSettings;

/// A rendered source file awaiting output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Display name of the synthesized type.
    pub type_name: String,
    /// File name, `<hint>.<extension>`.
    pub file_name: String,
    /// Rendered source.
    pub source: String,
}

/// A diagnostic as written to stderr and the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Display name of the type the diagnostic belongs to.
    pub type_name: String,
    /// Stable diagnostic id.
    pub code: DiagnosticCode,
    /// Expanded message.
    pub message: String,
    /// Positional message arguments.
    pub arguments: Vec<String>,
    /// Declaration location, when the host supplied one.
    pub location: Option<SourceLocation>,
}

impl ReportEntry {
    /// Builds an entry for `diagnostic` reported against `type_name`.
    #[must_use]
    pub fn new(type_name: &str, diagnostic: &Diagnostic) -> Self {
        Self {
            type_name: type_name.to_owned(),
            code: diagnostic.code,
            message: diagnostic.message(),
            arguments: diagnostic.arguments.clone(),
            location: diagnostic.location.clone(),
        }
    }

    /// Compiler-style line: `path:line:column: error CODE: message`.
    #[must_use]
    pub fn to_line(&self) -> String {
        match &self.location {
            Some(location) => format!("{location}: error {}: {}", self.code, self.message),
            None => format!("error {}: {}", self.code, self.message),
        }
    }

    fn matches(&self, diagnostic: &Diagnostic) -> bool {
        self.code == diagnostic.code
            && self.arguments == diagnostic.arguments
            && self.location == diagnostic.location
    }
}

/// Result of synthesizing a whole manifest.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Files for every successfully synthesized type, in manifest order.
    pub files: Vec<GeneratedFile>,
    /// Diagnostics, each reported once.
    pub diagnostics: Vec<ReportEntry>,
    /// Number of candidates that produced no file.
    pub failed: usize,
}

/// Synthesizes every marked type in `manifest`.
///
/// Requests are independent. A type whose base failed produces neither a
/// file nor its own diagnostic; the base's diagnostic is reported once, even
/// when the base is not itself a manifest entry.
#[must_use]
pub fn generate(manifest: &Manifest, settings: &GeneratorSettings) -> Outcome {
    let options = settings.render_options();
    let mut hints = HintNames::new();
    let mut outcome = Outcome::default();
    let mut inherited_failures = Vec::new();

    for ty in manifest.candidates() {
        let type_name = ty.display_name();
        match synthesize(ty, &options) {
            Ok(generated) => {
                let hint = hints.next(&ty.name);
                info!(type_name = %type_name, hint = %hint, "constructor synthesized");
                outcome.files.push(GeneratedFile {
                    type_name,
                    file_name: format!("{hint}.{}", settings.extension),
                    source: generated.source,
                });
            }
            Err(error) => {
                outcome.failed += 1;
                match error.diagnostic() {
                    Some(diagnostic) => {
                        outcome
                            .diagnostics
                            .push(ReportEntry::new(&type_name, diagnostic));
                    }
                    None => {
                        warn!(
                            type_name = %type_name,
                            %error,
                            "skipped because a base type failed"
                        );
                        inherited_failures.push(error);
                    }
                }
            }
        }
    }

    for error in &inherited_failures {
        let root = error.root_cause();
        if !outcome.diagnostics.iter().any(|entry| entry.matches(root)) {
            outcome
                .diagnostics
                .push(ReportEntry::new(failing_type(error), root));
        }
    }
    outcome
}

fn failing_type(error: &SynthesisError) -> &str {
    match error {
        SynthesisError::Ancestor { ancestor, cause } => match cause.as_ref() {
            SynthesisError::Diagnostic(_) => ancestor,
            nested @ SynthesisError::Ancestor { .. } => failing_type(nested),
        },
        SynthesisError::Diagnostic(_) => "",
    }
}
