pub mod orchestration;

pub use orchestration::{run_next_release, run_parse, NextReleaseArgs, WorkflowResult};
