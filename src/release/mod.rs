//! Next-release planning

pub mod planner;
pub mod warning;

pub use planner::{ClassifiedChange, ReleasePlan, ReleasePlanner};
pub use warning::ReleaseWarning;
