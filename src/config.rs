// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Highest weight a single answer can add to a trait; also the per-question
/// unit of the trait-percentage denominator.
pub const TRAIT_WEIGHT_CEILING: u32 = 5;

/// Color percentage reported for every color when no answer is color-tagged.
pub const NEUTRAL_COLOR_PERCENTAGE: u32 = 25;

pub const MAX_SUBMITTED_ANSWERS: usize = 50;
pub const MAX_QUESTION_ID_LENGTH: usize = 64;
pub const MAX_ANSWER_LENGTH: usize = 500;
pub const MAX_CANDIDATE_ID_LENGTH: usize = 128;
pub const MAX_BATCH_SIZE: usize = 25;

/// Bytes one char can take in JSON: a `\uXXXX\uXXXX` surrogate pair.
const MAX_ESCAPED_CHAR_BYTES: usize = 12;

/// Worst-case compact JSON size of one `"id":"answer",` entry. Lengths are
/// validated in chars, not bytes.
const MAX_ENTRY_BYTES: usize =
    MAX_ESCAPED_CHAR_BYTES * (MAX_QUESTION_ID_LENGTH + MAX_ANSWER_LENGTH) + 6;

/// Worst-case size of one submission object, wrapper keys included.
const MAX_SUBMISSION_BYTES: usize =
    MAX_SUBMITTED_ANSWERS * MAX_ENTRY_BYTES + MAX_ESCAPED_CHAR_BYTES * MAX_CANDIDATE_ID_LENGTH + 64;

/// Upper bound on request bodies: a compact batch of `MAX_BATCH_SIZE`
/// maximal submissions fits, plus slack for whitespace.
pub const MAX_BODY_BYTES: usize = MAX_BATCH_SIZE * MAX_SUBMISSION_BYTES + 64 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| vec!["http://localhost:3000".to_string()]);

        Self {
            host,
            port,
            rust_log,
            log_dir,
            cors_origins,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
