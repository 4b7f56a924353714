//! User-named entities and their derived identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user-named entity: the application itself, or one of its endpoints.
///
/// An `Operation` normalizes a free-form name into two derived forms:
///
/// | Field | Derivation | Example for `"My App!"` |
/// |-----------------|--------------------------------------------|-------------|
/// | `raw_name` | as typed | `My App!` |
/// | `url_path_name` | lowercased | `my app!` |
/// | `module_name` | lowercased, non `[a-zA-Z0-9_]` become `_` | `my_app_` |
///
/// Construction never fails; pathological input (empty string, all special
/// characters) yields a degenerate `module_name`. Callers that need a
/// non-empty identifier validate the raw name before constructing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    raw_name: String,
    url_path_name: String,
    module_name: String,
}

impl Operation {
    /// Normalize a free-form name. Pure, infallible.
    pub fn new(name: impl Into<String>) -> Self {
        let raw_name = name.into();
        let url_path_name = raw_name.to_lowercase();
        let module_name = url_path_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();

        Self {
            raw_name,
            url_path_name,
            module_name,
        }
    }

    /// The name exactly as the user typed it.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// URL-path-safe form (lowercased).
    pub fn url_path_name(&self) -> &str {
        &self.url_path_name
    }

    /// Module/identifier-safe form (`[a-zA-Z0-9_]` only).
    pub fn module_name(&self) -> &str {
        &self.module_name
    }
}

/// Two operations are equal when **either** derived form matches.
///
/// Intentionally loose: names differing only in special characters normalize
/// to the same `module_name` and must be treated as colliding. The relation
/// is not transitive, so `Eq` is deliberately not implemented and operations
/// must not be used as map keys.
impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.url_path_name == other.url_path_name || self.module_name == other.module_name
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw_name)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
