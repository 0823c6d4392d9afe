//! Username value object.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::USERNAME_PATTERN;
use crate::error::{DomainError, DomainResult};

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(USERNAME_PATTERN).expect("USERNAME_PATTERN is a valid regex")
});

/// A username made only of ASCII letters.
///
/// Construction goes through [`Username::parse`], so holding a `Username`
/// means the value already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// Validate and wrap a raw username
    pub fn parse(input: &str) -> DomainResult<Self> {
        if USERNAME_RE.is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(DomainError::invalid_username(input))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
