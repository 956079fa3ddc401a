use std::fmt;

/// Non-fatal issues found while planning a release.
/// These should be reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseWarning {
    /// Nothing was merged since the last release
    NoChanges { current_tag: String },
    /// A change has no label resolving to a stability level
    UnlabeledChange { title: String },
    /// The current tag cannot be read as a version with the configured pattern
    UnparsableTag { tag: String, reason: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::NoChanges { current_tag } => {
                write!(f, "No changes since '{}'", current_tag)
            }
            ReleaseWarning::UnlabeledChange { title } => {
                let title = if title.is_empty() {
                    "<untitled>"
                } else {
                    title.as_str()
                };
                write!(f, "Change '{}' has no stability label", title)
            }
            ReleaseWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
        }
    }
}
