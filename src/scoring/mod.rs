// src/scoring/mod.rs

//! Behavioral scoring engine and the static tables it reads.

pub mod catalog;
pub mod descriptors;
pub mod engine;
pub mod mapping;

pub use engine::{score, score_detailed};
