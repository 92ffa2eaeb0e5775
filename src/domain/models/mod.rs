mod dataset;
mod prompt;
mod query;

pub use dataset::*;
pub use prompt::*;
pub use query::*;
