//! Collision-free hint names for generated files.

use std::collections::{HashMap, HashSet};

/// Assigns each generated file a unique hint name.
///
/// The first request for a name receives it unchanged; repeats get a numeric
/// suffix starting at 2.
#[derive(Debug, Default)]
pub struct HintNames {
    requests: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl HintNames {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused hint for `name`.
    pub fn next(&mut self, name: &str) -> String {
        let count = self.requests.entry(name.to_owned()).or_insert(0);
        loop {
            *count += 1;
            let candidate = if *count == 1 {
                name.to_owned()
            } else {
                format!("{name}{count}")
            };
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
