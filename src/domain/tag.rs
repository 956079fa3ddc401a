use crate::domain::version::Version;
use crate::error::{ReleaseError, Result};
use regex::Regex;

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Create a new tag pattern. The pattern must contain exactly one `{version}` placeholder.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        match pattern.matches(PLACEHOLDER).count() {
            1 => {}
            0 => {
                return Err(ReleaseError::tag(format!(
                    "Pattern '{}' must contain {} placeholder",
                    pattern, PLACEHOLDER
                )))
            }
            _ => {
                return Err(ReleaseError::tag(format!(
                    "Pattern '{}' must contain {} only once",
                    pattern, PLACEHOLDER
                )))
            }
        }

        // Escape everything, then swap the placeholder for a capture group
        let escaped = regex::escape(&pattern);
        let regex_pattern =
            escaped.replace(r"\{version\}", r"([0-9]+\.[0-9]+\.[0-9]+)");
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| ReleaseError::tag(format!("Invalid pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }

    /// Check whether a tag was produced by this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.matcher.is_match(tag)
    }

    /// Extract the version from a tag produced by this pattern
    pub fn extract_version(&self, tag: &str) -> Option<Version> {
        let captures = self.matcher.captures(tag)?;
        let version = captures.get(1)?;
        Version::parse(version.as_str()).ok()
    }
}
