// src/handlers/assessment.rs

use axum::{Json, extract::Path, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        personality::{Color, PersonalityTrait},
        question::PublicQuestion,
        submission::{BatchScoreRequest, BatchScoreResponse, ScoreRequest, ScoreResponse},
    },
    scoring::{self, catalog, descriptors},
};

/// Lists every question of the assessment wizard with its valid options.
pub async fn list_questions() -> impl IntoResponse {
    let questions: Vec<PublicQuestion> = catalog::questions()
        .iter()
        .map(PublicQuestion::from)
        .collect();

    Json(questions)
}

/// Scores one candidate's submission.
///
/// * Validates payload size (answer count, answer length).
/// * Unknown questions and answers are reported in the summary, never rejected.
pub async fn submit_assessment(
    Json(req): Json<ScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let response = score_request(req);
    if !response.summary.ignored_question_ids.is_empty() {
        tracing::warn!(
            candidate = ?response.candidate_id,
            ignored = ?response.summary.ignored_question_ids,
            "Submission contained unscored answers"
        );
    }
    tracing::info!(
        candidate = ?response.candidate_id,
        primary_trait = %response.profile.primary_trait,
        primary_color = %response.profile.primary_color,
        "Assessment scored"
    );

    Ok(Json(response))
}

/// Scores several submissions; results keep the request order.
pub async fn submit_batch(
    Json(req): Json<BatchScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let results: Vec<ScoreResponse> = req.submissions.into_iter().map(score_request).collect();
    tracing::info!("Scored batch of {} assessments", results.len());

    Ok(Json(BatchScoreResponse { results }))
}

/// Narrative for a single Big Five trait.
pub async fn get_trait(Path(name): Path<String>) -> Result<impl IntoResponse, AppError> {
    let personality_trait = name
        .parse::<PersonalityTrait>()
        .map_err(AppError::NotFound)?;

    Ok(Json(descriptors::trait_descriptor(personality_trait)))
}

/// Behavioral profile for a single color.
pub async fn get_color(Path(name): Path<String>) -> Result<impl IntoResponse, AppError> {
    let color = name.parse::<Color>().map_err(AppError::NotFound)?;

    Ok(Json(descriptors::color_profile(color)))
}

fn score_request(req: ScoreRequest) -> ScoreResponse {
    let scored = scoring::score_detailed(&req.responses);
    ScoreResponse {
        candidate_id: req.candidate_id,
        profile: scored.profile,
        summary: scored.summary,
        scored_at: chrono::Utc::now(),
    }
}
