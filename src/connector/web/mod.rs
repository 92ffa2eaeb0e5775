//! Browser UI: upload a CSV, preview it, ask a question.

mod server;

pub use server::*;
