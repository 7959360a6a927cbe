// src/models/personality.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the five Big Five personality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl PersonalityTrait {
    /// Enumeration order used for tallies and for the primary-trait tie-break.
    pub const ALL: [PersonalityTrait; 5] = [
        PersonalityTrait::Openness,
        PersonalityTrait::Conscientiousness,
        PersonalityTrait::Extraversion,
        PersonalityTrait::Agreeableness,
        PersonalityTrait::Neuroticism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalityTrait::Openness => "openness",
            PersonalityTrait::Conscientiousness => "conscientiousness",
            PersonalityTrait::Extraversion => "extraversion",
            PersonalityTrait::Agreeableness => "agreeableness",
            PersonalityTrait::Neuroticism => "neuroticism",
        }
    }
}

impl fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityTrait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PersonalityTrait::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown personality trait '{}'", wanted))
    }
}

/// Simplified four-way behavioral style, tracked alongside the Big Five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// Enumeration order used for tallies and for the primary-color tie-break.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown color '{}'", wanted))
    }
}
