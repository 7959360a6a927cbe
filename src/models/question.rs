// src/models/question.rs

use serde::Serialize;

use crate::scoring::catalog::CatalogQuestion;

/// DTO for sending a question to the assessment wizard.
/// Exposes whether the question feeds the scoring engine, never its mapping.
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub scored: bool,
}

impl From<&'static CatalogQuestion> for PublicQuestion {
    fn from(question: &'static CatalogQuestion) -> Self {
        Self {
            id: question.id,
            prompt: question.prompt,
            options: question.options,
            scored: question.is_scored(),
        }
    }
}
