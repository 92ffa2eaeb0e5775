pub mod ask_controller;
pub mod preview_controller;

pub use ask_controller::AskController;
pub use preview_controller::PreviewController;
