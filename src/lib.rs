pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod release;
pub mod ui;

pub use domain::Stability;
pub use error::{ReleaseError, Result};
