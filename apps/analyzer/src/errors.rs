use thiserror::Error;

use crate::llm_client::LlmError;
use crate::search_client::SearchError;

/// Errors that can stop a run. Per-organization provider failures never get here;
/// they are absorbed by the search client and goal extractor.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Search client setup failed: {0}")]
    Search(#[from] SearchError),

    #[error("LLM client setup failed: {0}")]
    Llm(#[from] LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
