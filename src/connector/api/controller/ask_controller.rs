use std::path::Path;

use anyhow::Result;

use crate::Answer;

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, path: String, question: String) -> Result<String> {
        let dataset = self.container.reader().read_path(Path::new(&path))?;
        let use_case = self.container.ask_use_case();
        let answer = use_case.execute(&dataset, &question).await?;

        Ok(self.format_answer(&answer))
    }

    fn format_answer(&self, answer: &Answer) -> String {
        if answer.is_empty() {
            return format!("({} returned an empty answer)", answer.backend());
        }
        answer.text().trim().to_string()
    }
}
