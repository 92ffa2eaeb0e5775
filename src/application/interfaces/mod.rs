mod dataset_reader;
mod language_model;

pub use dataset_reader::*;
pub use language_model::*;
