//! Domain logic - pure release rules, no I/O

pub mod change;
pub mod stability;
pub mod tag;
pub mod version;

pub use change::{Change, LabelClassifier};
pub use stability::Stability;
pub use tag::TagPattern;
pub use version::{Version, VersionBump};
