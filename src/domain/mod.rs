//! # Domain Layer
//!
//! Datasets, prompts, answers and the crate-wide error type.
//! This layer is independent of HTTP, CSV parsing and the UI.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
