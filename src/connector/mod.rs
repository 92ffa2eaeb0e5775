//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Language models (Ollama over HTTP, an offline mock)
//! - CSV ingestion
//! - CLI controllers and the web UI

pub mod adapter;
pub mod api;
pub mod web;

pub use adapter::*;
pub use api::{Container, ContainerConfig};
