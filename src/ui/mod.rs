//! User interface module - terminal output.
//!
//! - `formatter` - Pure formatting functions and their printing wrappers

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_levels, display_release_plan, display_stability, display_status,
    display_success, display_warning, format_levels, format_release_plan, format_stability,
};
