//! Layered generator settings.
//!
//! Settings are merged with `figment`, lowest precedence first: built-in
//! defaults, a TOML file, `QUICKCTOR_*` environment variables and finally the
//! command-line overrides.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use quickctor::{LineEnding, RenderOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::QuickctorError;

/// Settings file picked up from the working directory when `--config` is not
/// given.
pub const DEFAULT_SETTINGS_FILE: &str = "quickctor.toml";

/// Prefix of environment variables read as settings.
pub const ENV_PREFIX: &str = "QUICKCTOR_";

const INDENT_RANGE: std::ops::RangeInclusive<usize> = 1..=16;

/// Settings controlling where and how generated sources are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Directory receiving generated files.
    pub out_dir: Utf8PathBuf,
    /// Extension of generated files, without the leading dot.
    pub extension: String,
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Line terminator of generated files.
    pub line_ending: LineEnding,
    /// Emit `#nullable enable` in generated files.
    pub nullable_directive: bool,
    /// Generator name shown in the auto-generated banner.
    pub tool_name: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            out_dir: Utf8PathBuf::from("generated"),
            extension: "cs".to_owned(),
            indent_width: render.indent_width,
            line_ending: render.line_ending,
            nullable_directive: render.nullable_directive,
            tool_name: render.tool_name,
        }
    }
}

impl GeneratorSettings {
    /// Renderer options derived from these settings.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent_width: self.indent_width,
            line_ending: self.line_ending,
            nullable_directive: self.nullable_directive,
            tool_name: self.tool_name.clone(),
        }
    }

    fn validate(self) -> Result<Self, QuickctorError> {
        if !INDENT_RANGE.contains(&self.indent_width) {
            return Err(QuickctorError::InvalidSetting {
                key: "indent_width",
                message: format!(
                    "{} is outside {}..={}",
                    self.indent_width,
                    INDENT_RANGE.start(),
                    INDENT_RANGE.end()
                ),
            });
        }
        let extension = self.extension.as_str();
        if extension.is_empty()
            || extension.starts_with('.')
            || extension.contains(['/', '\\'])
        {
            return Err(QuickctorError::InvalidSetting {
                key: "extension",
                message: format!("'{extension}' is not a bare file extension"),
            });
        }
        Ok(self)
    }
}

/// Values supplied on the command line; unset fields leave lower layers
/// untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    /// Explicit settings file.
    #[serde(skip)]
    pub config: Option<Utf8PathBuf>,
    /// `--out-dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<Utf8PathBuf>,
    /// `--extension`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Loads and validates the layered settings.
///
/// # Errors
///
/// Returns [`QuickctorError::MissingSettings`] when an explicit settings file
/// does not exist, [`QuickctorError::Settings`] when a layer cannot be parsed
/// and [`QuickctorError::InvalidSetting`] when a value is out of range.
pub fn load_settings(overrides: &CliOverrides) -> Result<GeneratorSettings, QuickctorError> {
    let settings_file = match &overrides.config {
        Some(path) if !path.exists() => {
            return Err(QuickctorError::MissingSettings(path.clone()));
        }
        Some(path) => path.clone(),
        None => Utf8PathBuf::from(DEFAULT_SETTINGS_FILE),
    };
    debug!(path = %settings_file, "loading settings");

    layers(&settings_file, overrides)
        .extract::<GeneratorSettings>()
        .map_err(Box::new)?
        .validate()
}

fn layers(settings_file: &Utf8Path, overrides: &CliOverrides) -> Figment {
    Figment::from(Serialized::defaults(GeneratorSettings::default()))
        .merge(Toml::file(settings_file.as_std_path()))
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
}
