use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AskController, PreviewController};

pub struct Router<'a> {
    ask_controller: AskController<'a>,
    preview_controller: PreviewController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ask_controller: AskController::new(container),
            preview_controller: PreviewController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { path, question } => self.ask_controller.ask(path, question).await,
            Commands::Preview { path, rows } => self.preview_controller.preview(path, rows).await,
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
