//! Helpers for running settings tests inside a `figment::Jail`.
//!
//! The jail isolates the working directory and environment, so layered
//! settings can be exercised without leaking state between tests.

use anyhow::{Result, anyhow};

/// Runs `f` inside a [`figment::Jail`] and returns its output.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure returned no value"))
}

/// Writes a `quickctor.toml` file into the jail's working directory.
///
/// # Errors
///
/// Returns the jail's error when the file cannot be created.
pub fn write_settings(jail: &figment::Jail, contents: &str) -> figment::error::Result<()> {
    jail.create_file("quickctor.toml", contents).map(drop)
}

/// Converts an error into a [`figment::Error`] for use inside jail closures.
pub fn figment_error<E: std::fmt::Display>(err: &E) -> figment::Error {
    figment::Error::from(err.to_string())
}
