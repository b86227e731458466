//! Configuration model for hunks.
//!
//! This module defines the Config struct that represents `.hunks.yaml` at the
//! repository root. Unknown fields are ignored, every field has a default,
//! and values are validated after parsing.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{CONFIG_FILE_NAME, Config};
pub use types::DiffKind;
