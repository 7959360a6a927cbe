// src/models/mod.rs

pub mod personality;
pub mod profile;
pub mod question;
pub mod submission;
