// src/models/submission.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    config::{
        MAX_ANSWER_LENGTH, MAX_BATCH_SIZE, MAX_CANDIDATE_ID_LENGTH, MAX_QUESTION_ID_LENGTH,
        MAX_SUBMITTED_ANSWERS,
    },
    models::profile::{PersonalityProfile, ScoringSummary},
};

/// `validator`'s `length` bound expects a `u64`.
const CANDIDATE_ID_MAX_U64: u64 = MAX_CANDIDATE_ID_LENGTH as u64;

/// Answers collected by the assessment wizard.
/// Key: question id. Value: literal text of the selected option.
///
/// Backed by an ordered map so iteration never depends on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizResponseSet(BTreeMap<String, String>);

impl QuizResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the answer to a question.
    pub fn insert(&mut self, question_id: impl Into<String>, answer: impl Into<String>) {
        self.0.insert(question_id.into(), answer.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }
}

impl<Q, A> FromIterator<(Q, A)> for QuizResponseSet
where
    Q: Into<String>,
    A: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (Q, A)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(q, a)| (q.into(), a.into())).collect())
    }
}

/// DTO for scoring a single candidate's submission.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_responses"))]
pub struct ScoreRequest {
    /// Opaque identifier echoed back in the response.
    #[validate(length(min = 1, max = CANDIDATE_ID_MAX_U64))]
    pub candidate_id: Option<String>,

    #[serde(default)]
    pub responses: QuizResponseSet,
}

/// DTO for scoring several submissions in one call.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_batch_size"))]
pub struct BatchScoreRequest {
    #[validate(nested)]
    pub submissions: Vec<ScoreRequest>,
}

/// Result returned for each scored submission.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub candidate_id: Option<String>,
    pub profile: PersonalityProfile,
    pub summary: ScoringSummary,
    pub scored_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct BatchScoreResponse {
    pub results: Vec<ScoreResponse>,
}

/// Guards payload size only; unknown question ids and answers are scored as no-ops.
/// Struct-level so the error carries a code and never the submitted answers.
fn validate_responses(req: &ScoreRequest) -> Result<(), ValidationError> {
    let responses = &req.responses;
    if responses.len() > MAX_SUBMITTED_ANSWERS {
        return Err(ValidationError::new("too_many_answers"));
    }
    for (question_id, answer) in responses.iter() {
        if question_id.trim().is_empty() {
            return Err(ValidationError::new("question_id_cannot_be_empty"));
        }
        if question_id.chars().count() > MAX_QUESTION_ID_LENGTH {
            return Err(ValidationError::new("question_id_too_long"));
        }
        if answer.chars().count() > MAX_ANSWER_LENGTH {
            return Err(ValidationError::new("answer_too_long"));
        }
    }
    Ok(())
}

fn validate_batch_size(req: &BatchScoreRequest) -> Result<(), ValidationError> {
    let submissions = &req.submissions;
    if submissions.is_empty() {
        return Err(ValidationError::new("batch_cannot_be_empty"));
    }
    if submissions.len() > MAX_BATCH_SIZE {
        return Err(ValidationError::new("batch_too_large"));
    }
    Ok(())
}
