pub mod catalog;
pub mod json;
pub mod md;
pub mod text;

use crate::error::LeaseBuyError;
use crate::types::scoring::Evaluation;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(evaluation: &Evaluation, format: OutputFormat) -> Result<String, LeaseBuyError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(evaluation)),
        OutputFormat::Json => json::to_json(evaluation).map_err(LeaseBuyError::Json),
        OutputFormat::Md => Ok(md::to_markdown(evaluation)),
    }
}
