use serde::{Deserialize, Serialize};

use super::errors::CategoryError;

const SLUG_PATTERN: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";

/// URL key of a category: lowercase ASCII letters and digits separated by
/// single hyphens (`bongs`, `papel-de-seda`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn parse(raw: &str) -> Result<Self, CategoryError> {
        let candidate = raw.trim();
        let valid = regex::Regex::new(SLUG_PATTERN)
            .map(|re| re.is_match(candidate))
            .unwrap_or(false);

        if !valid {
            return Err(CategoryError::SlugInvalid);
        }
        Ok(Self(candidate.to_string()))
    }

    /// Wraps a slug read back from storage without re-validating it.
    pub fn from_repository(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
