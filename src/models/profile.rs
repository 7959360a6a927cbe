// src/models/profile.rs

use serde::Serialize;

use crate::models::personality::{Color, PersonalityTrait};

/// Per-trait values: raw accumulated weights while scoring, percentages once normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraitScores {
    pub openness: u32,
    pub conscientiousness: u32,
    pub extraversion: u32,
    pub agreeableness: u32,
    pub neuroticism: u32,
}

impl TraitScores {
    pub fn get(&self, personality_trait: PersonalityTrait) -> u32 {
        match personality_trait {
            PersonalityTrait::Openness => self.openness,
            PersonalityTrait::Conscientiousness => self.conscientiousness,
            PersonalityTrait::Extraversion => self.extraversion,
            PersonalityTrait::Agreeableness => self.agreeableness,
            PersonalityTrait::Neuroticism => self.neuroticism,
        }
    }

    pub fn get_mut(&mut self, personality_trait: PersonalityTrait) -> &mut u32 {
        match personality_trait {
            PersonalityTrait::Openness => &mut self.openness,
            PersonalityTrait::Conscientiousness => &mut self.conscientiousness,
            PersonalityTrait::Extraversion => &mut self.extraversion,
            PersonalityTrait::Agreeableness => &mut self.agreeableness,
            PersonalityTrait::Neuroticism => &mut self.neuroticism,
        }
    }

    /// Trait with the highest value; the earliest in `PersonalityTrait::ALL` wins ties.
    pub fn primary(&self) -> PersonalityTrait {
        let mut best = PersonalityTrait::ALL[0];
        for candidate in PersonalityTrait::ALL {
            if self.get(candidate) > self.get(best) {
                best = candidate;
            }
        }
        best
    }
}

/// Per-color values: raw answer counts while scoring, percentages once normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColorScores {
    pub red: u32,
    pub yellow: u32,
    pub green: u32,
    pub blue: u32,
}

impl ColorScores {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
            Color::Blue => self.blue,
        }
    }

    pub fn get_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::Red => &mut self.red,
            Color::Yellow => &mut self.yellow,
            Color::Green => &mut self.green,
            Color::Blue => &mut self.blue,
        }
    }

    pub fn total(&self) -> u32 {
        Color::ALL.into_iter().map(|c| self.get(c)).sum()
    }

    /// Color with the highest value; the earliest in `Color::ALL` wins ties.
    pub fn primary(&self) -> Color {
        let mut best = Color::ALL[0];
        for candidate in Color::ALL {
            if self.get(candidate) > self.get(best) {
                best = candidate;
            }
        }
        best
    }
}

/// Narrative attached to a primary trait.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TraitDescriptor {
    pub title: &'static str,
    pub work_style: &'static str,
    pub career_fit: &'static [&'static str],
    pub insights: &'static [&'static str],
}

/// Narrative attached to a primary color.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ColorProfile {
    pub label: &'static str,
    pub summary: &'static str,
    pub motivators: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

/// Output of the behavioral scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityProfile {
    /// Normalized trait percentages. Not clamped, so values above 100 are possible.
    pub traits: TraitScores,

    /// Normalized color percentages (25 each when nothing was color-tagged).
    pub colors: ColorScores,

    pub primary_trait: PersonalityTrait,
    pub primary_color: Color,

    pub work_style: &'static str,
    pub career_fit: &'static [&'static str],
    pub insights: &'static [&'static str],
    pub color_profile: &'static ColorProfile,
}

/// Bookkeeping about which answers fed the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringSummary {
    pub answered_count: usize,
    pub mapped_count: usize,

    /// Question ids whose question or answer text has no mapping entry, sorted.
    pub ignored_question_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredAssessment {
    pub profile: PersonalityProfile,
    pub summary: ScoringSummary,
}
