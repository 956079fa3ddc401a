//! Stability level of a change
//!
//! A change going into a release is tagged with one of four levels. The level
//! decides how the next version is bumped: `minor` and `patch` bump the
//! matching component, `pedantic` changes ship without a bump, and `unknown`
//! marks a change nobody has classified yet.

use crate::domain::version::VersionBump;
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stability level of a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stability {
    Unknown,
    Patch,
    Minor,
    Pedantic,
}

impl Stability {
    /// All levels, in declaration order
    pub const ALL: [Stability; 4] = [
        Stability::Unknown,
        Stability::Patch,
        Stability::Minor,
        Stability::Pedantic,
    ];

    pub const fn unknown() -> Self {
        Stability::Unknown
    }

    pub const fn patch() -> Self {
        Stability::Patch
    }

    pub const fn minor() -> Self {
        Stability::Minor
    }

    pub const fn pedantic() -> Self {
        Stability::Pedantic
    }

    /// Parse a stability level, ignoring case
    ///
    /// # Returns
    /// * `Ok(Stability)` - One of the four known levels
    /// * `Err(ReleaseError::InvalidInput)` - If the value is empty, whitespace-only,
    ///   or not a known level
    pub fn from_string(value: &str) -> Result<Self> {
        value.parse()
    }

    /// Canonical lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Stability::Unknown => "unknown",
            Stability::Patch => "patch",
            Stability::Minor => "minor",
            Stability::Pedantic => "pedantic",
        }
    }

    pub fn to_uppercase_string(self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn equals(self, other: Stability) -> bool {
        self == other
    }

    pub fn not_equals(self, other: Stability) -> bool {
        !self.equals(other)
    }

    pub fn is_known(self) -> bool {
        self != Stability::Unknown
    }

    /// Version bump a change of this level requires, if any
    pub fn version_bump(self) -> Option<VersionBump> {
        match self {
            Stability::Minor => Some(VersionBump::Minor),
            Stability::Patch => Some(VersionBump::Patch),
            Stability::Pedantic | Stability::Unknown => None,
        }
    }

    /// Pick the level with the widest release impact.
    ///
    /// `minor` beats `patch`, which beats `pedantic`. `unknown` never wins over a
    /// known level, and is returned for an empty input.
    pub fn strongest<I>(levels: I) -> Stability
    where
        I: IntoIterator<Item = Stability>,
    {
        levels
            .into_iter()
            .max_by_key(|level| level.impact())
            .unwrap_or(Stability::Unknown)
    }

    fn impact(self) -> u8 {
        match self {
            Stability::Unknown => 0,
            Stability::Pedantic => 1,
            Stability::Patch => 2,
            Stability::Minor => 3,
        }
    }
}

impl FromStr for Stability {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(ReleaseError::invalid_input(format!(
                "Stability must not be blank, got '{}'",
                s
            )));
        }

        match s.to_lowercase().as_str() {
            "unknown" => Ok(Stability::Unknown),
            "patch" => Ok(Stability::Patch),
            "minor" => Ok(Stability::Minor),
            "pedantic" => Ok(Stability::Pedantic),
            _ => Err(ReleaseError::invalid_input(format!(
                "Unknown stability '{}', expected one of: unknown, patch, minor, pedantic",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Stability {
    type Error = ReleaseError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Stability> for String {
    fn from(stability: Stability) -> Self {
        stability.as_str().to_string()
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
