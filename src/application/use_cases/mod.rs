mod ask_dataset;
mod preview_dataset;

pub use ask_dataset::*;
pub use preview_dataset::*;
