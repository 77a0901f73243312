//! Name-to-environment resolution.
//!
//! Names are matched case-insensitively against a fixed many-to-one alias
//! table. Input is lower-cased and nothing else: surrounding whitespace is
//! not trimmed, so `" china"` does not resolve.
//!
//! Lower-casing maps each character to exactly one character, so `'İ'`
//! folds to `'i'` rather than `"i\u{307}"` as `str::to_lowercase` would.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use super::definitions::{
    Environment, AZURE_CHINA, AZURE_PUBLIC, AZURE_PUBLIC_CANARY, AZURE_US_GOVERNMENT,
    AZURE_US_GOVERNMENT_L5,
};
use crate::error::{CloudEnvError, Result};

/// Every accepted alias, lower-case, in declaration order.
static ALIASES: &[(&str, &Environment)] = &[
    ("china", &AZURE_CHINA),
    ("canary", &AZURE_PUBLIC_CANARY),
    ("global", &AZURE_PUBLIC),
    ("public", &AZURE_PUBLIC),
    ("usgovernment", &AZURE_US_GOVERNMENT),
    ("usgovernmentl4", &AZURE_US_GOVERNMENT),
    ("dod", &AZURE_US_GOVERNMENT_L5),
    ("usgovernmentl5", &AZURE_US_GOVERNMENT_L5),
];

static ALIAS_MAP: LazyLock<HashMap<&'static str, &'static Environment>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// Resolves environment names against the built-in alias table.
///
/// # Example
///
/// ```
/// use cloudenv::environment::{definitions, EnvironmentResolver};
///
/// let resolver = EnvironmentResolver::new();
/// let env = resolver.resolve("USGovernmentL4").unwrap();
/// assert!(std::ptr::eq(env, definitions::azure_us_government()));
///
/// assert!(resolver.resolve("mars").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentResolver;

impl EnvironmentResolver {
    /// Create a resolver over the built-in table.
    pub fn new() -> Self {
        Self
    }

    /// Resolve `name` to its environment.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` carrying `name` unchanged when no alias matches.
    pub fn resolve(&self, name: &str) -> Result<&'static Environment> {
        let normalized = fold_case(name);
        match ALIAS_MAP.get(normalized.as_str()) {
            Some(env) => {
                debug!("Resolved environment name {:?} to {}", name, env.name);
                Ok(*env)
            }
            None => {
                debug!("No environment matches {:?}", name);
                Err(CloudEnvError::NotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// All `(alias, environment)` pairs in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, &'static Environment)> {
        ALIASES.iter().copied()
    }

    /// Aliases that resolve to `env`, in declaration order.
    pub fn aliases_for(&self, env: &Environment) -> Vec<&'static str> {
        self.aliases()
            .filter(|(_, candidate)| std::ptr::eq(*candidate, env))
            .map(|(alias, _)| alias)
            .collect()
    }

    /// Each distinct environment once, in the order it first appears in the table.
    pub fn environments(&self) -> Vec<&'static Environment> {
        let mut seen: Vec<&'static Environment> = Vec::new();
        for (_, env) in self.aliases() {
            if !seen.iter().any(|known| std::ptr::eq(*known, env)) {
                seen.push(env);
            }
        }
        seen
    }
}

/// Lower-case `name` one character at a time, keeping the first char of each mapping.
fn fold_case(name: &str) -> String {
    name.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Resolve `name` with the built-in table.
///
/// Shorthand for `EnvironmentResolver::new().resolve(name)`.
pub fn from_name(name: &str) -> Result<&'static Environment> {
    EnvironmentResolver::new().resolve(name)
}
