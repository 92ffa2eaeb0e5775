use std::path::Path;

use anyhow::Result;

use crate::application::{DatasetPreview, PREVIEW_ROWS};

use super::super::Container;

pub struct PreviewController<'a> {
    container: &'a Container,
}

impl<'a> PreviewController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn preview(&self, path: String, rows: Option<usize>) -> Result<String> {
        let dataset = self.container.reader().read_path(Path::new(&path))?;
        let preview = DatasetPreview::of(&dataset, rows.unwrap_or(PREVIEW_ROWS));

        Ok(self.format_preview(&preview, dataset.column_count()))
    }

    fn format_preview(&self, preview: &DatasetPreview, column_count: usize) -> String {
        let mut widths: Vec<usize> = preview.columns.iter().map(|c| c.chars().count()).collect();
        for row in &preview.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" | ")
        };

        let mut output = format!(
            "{} ({} rows x {} columns)\n\n",
            preview.name, preview.row_count, column_count
        );
        output.push_str(&render(&preview.columns[..]));
        output.push('\n');
        output.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &preview.rows {
            output.push('\n');
            output.push_str(&render(&row[..]));
        }
        output
    }
}
