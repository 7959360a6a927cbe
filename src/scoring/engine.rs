// src/scoring/engine.rs

use crate::{
    config::{NEUTRAL_COLOR_PERCENTAGE, TRAIT_WEIGHT_CEILING},
    models::{
        personality::{Color, PersonalityTrait},
        profile::{ColorScores, PersonalityProfile, ScoredAssessment, ScoringSummary, TraitScores},
        submission::QuizResponseSet,
    },
    scoring::{descriptors, mapping},
};

/// Scores a finished assessment into a personality profile.
///
/// Pure: no I/O, no shared state. Unknown question ids and answer texts are skipped.
pub fn score(responses: &QuizResponseSet) -> PersonalityProfile {
    score_detailed(responses).profile
}

/// Same as [`score`], plus a summary of which answers were used.
pub fn score_detailed(responses: &QuizResponseSet) -> ScoredAssessment {
    let mut raw_traits = TraitScores::default();
    let mut raw_colors = ColorScores::default();
    let mut mapped_count = 0;
    let mut ignored_question_ids = Vec::new();

    for (question_id, answer) in responses.iter() {
        let Some(target) = mapping::lookup(question_id, answer) else {
            ignored_question_ids.push(question_id.to_string());
            continue;
        };

        mapped_count += 1;
        if let Some(tw) = target.trait_weight {
            *raw_traits.get_mut(tw.personality_trait) += tw.points();
        }
        if let Some(color) = target.color {
            *raw_colors.get_mut(color) += 1;
        }
    }

    // Denominator counts every answered question, mapped or not.
    let answered_count = responses.len();
    let traits = normalize_traits(&raw_traits, answered_count);
    let colors = normalize_colors(&raw_colors);

    let primary_trait = traits.primary();
    let primary_color = colors.primary();

    let (trait_descriptor, color_profile) = if mapped_count == 0 {
        (
            &descriptors::DEFAULT_TRAIT_DESCRIPTOR,
            &descriptors::DEFAULT_COLOR_PROFILE,
        )
    } else {
        (
            descriptors::trait_descriptor(primary_trait),
            descriptors::color_profile(primary_color),
        )
    };

    tracing::debug!(
        answered = answered_count,
        mapped = mapped_count,
        ignored = ignored_question_ids.len(),
        %primary_trait,
        %primary_color,
        "Scored assessment"
    );

    ScoredAssessment {
        profile: PersonalityProfile {
            traits,
            colors,
            primary_trait,
            primary_color,
            work_style: trait_descriptor.work_style,
            career_fit: trait_descriptor.career_fit,
            insights: trait_descriptor.insights,
            color_profile,
        },
        summary: ScoringSummary {
            answered_count,
            mapped_count,
            ignored_question_ids,
        },
    }
}

/// `round(raw / (answered * 5) * 100)` per trait; not clamped to 100.
fn normalize_traits(raw: &TraitScores, answered_count: usize) -> TraitScores {
    let denominator = answered_count as u64 * TRAIT_WEIGHT_CEILING as u64;
    let mut normalized = TraitScores::default();
    for t in PersonalityTrait::ALL {
        *normalized.get_mut(t) = round_percentage(raw.get(t) as u64, denominator);
    }
    normalized
}

/// Share of color-tagged answers per color, or an even split when there are none.
fn normalize_colors(raw: &ColorScores) -> ColorScores {
    let total = raw.total() as u64;
    let mut normalized = ColorScores::default();
    for c in Color::ALL {
        *normalized.get_mut(c) = if total == 0 {
            NEUTRAL_COLOR_PERCENTAGE
        } else {
            round_percentage(raw.get(c) as u64, total)
        };
    }
    normalized
}

/// `numerator / denominator * 100`, rounded half up. Zero denominator yields 0.
fn round_percentage(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    ((numerator * 200 + denominator) / (denominator * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::catalog;

    const RULES_RESPECT: &str = "Respecting - they're there for a reason";
    const CONFLICT_MEDIATE: &str = "I try to mediate and find solutions";

    fn responses<const N: usize>(pairs: [(&str, &str); N]) -> QuizResponseSet {
        QuizResponseSet::from_iter(pairs)
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_percentage(1, 8), 13); // 12.5
        assert_eq!(round_percentage(1, 3), 33);
        assert_eq!(round_percentage(2, 3), 67);
        assert_eq!(round_percentage(5, 10), 50);
        assert_eq!(round_percentage(3, 0), 0);
    }

    #[test]
    fn empty_submission_is_neutral() {
        let scored = score_detailed(&QuizResponseSet::new());
        let profile = &scored.profile;

        assert_eq!(profile.traits, TraitScores::default());
        for c in Color::ALL {
            assert_eq!(profile.colors.get(c), 25);
        }
        assert_eq!(profile.primary_trait, PersonalityTrait::Openness);
        assert_eq!(profile.primary_color, Color::Red);
        assert_eq!(profile.work_style, descriptors::DEFAULT_TRAIT_DESCRIPTOR.work_style);
        assert_eq!(profile.color_profile, &descriptors::DEFAULT_COLOR_PROFILE);
        assert_eq!(scored.summary.answered_count, 0);
        assert_eq!(scored.summary.mapped_count, 0);
    }

    #[test]
    fn unmapped_answers_only_is_neutral() {
        let scored = score_detailed(&responses([
            ("work_location", "Remote"),
            ("start_availability", "Immediately"),
            ("favourite_snack", "Crisps"),
        ]));

        assert_eq!(scored.profile.traits, TraitScores::default());
        assert_eq!(scored.profile.colors.blue, 25);
        assert_eq!(scored.profile.career_fit, descriptors::DEFAULT_TRAIT_DESCRIPTOR.career_fit);
        assert_eq!(
            scored.summary.ignored_question_ids,
            vec!["favourite_snack", "start_availability", "work_location"]
        );
    }

    #[test]
    fn rules_and_conflict_example() {
        let profile = score(&responses([("rules", RULES_RESPECT), ("conflict", CONFLICT_MEDIATE)]));

        // 5 / (2 * 5) for both traits.
        assert_eq!(profile.traits.conscientiousness, 50);
        assert_eq!(profile.traits.agreeableness, 50);
        assert_eq!(profile.traits.openness, 0);

        assert_eq!(profile.colors.blue, 100);
        assert_eq!(profile.colors.red, 0);
        assert_eq!(profile.colors.yellow, 0);
        assert_eq!(profile.colors.green, 0);
        assert_eq!(profile.primary_color, Color::Blue);

        // Equal maximum: conscientiousness precedes agreeableness.
        assert_eq!(profile.primary_trait, PersonalityTrait::Conscientiousness);
        assert_eq!(
            profile.work_style,
            descriptors::trait_descriptor(PersonalityTrait::Conscientiousness).work_style
        );
        assert_eq!(profile.color_profile, descriptors::color_profile(Color::Blue));
    }

    #[test]
    fn single_color_takes_everything() {
        let profile = score(&responses([
            ("team_role", "The motivator who keeps energy high"),
            ("ideal_environment", "Creative and social"),
            ("new_ideas", "Let's try it and see what happens"),
        ]));

        assert_eq!(profile.colors.yellow, 100);
        assert_eq!(profile.colors.red + profile.colors.green + profile.colors.blue, 0);
        assert_eq!(profile.primary_color, Color::Yellow);
    }

    #[test]
    fn one_answer_per_color_splits_evenly() {
        let profile = score(&responses([
            ("rules", "Challenging - I question the ones that slow us down"),
            ("conflict", "I lighten the mood and get people talking"),
            ("decision_making", "After considering how it affects everyone"),
            ("work_pace", "Methodical and thorough"),
        ]));

        for c in Color::ALL {
            assert_eq!(profile.colors.get(c), 25);
        }
        assert_eq!(profile.primary_color, Color::Red);
    }

    #[test]
    fn unmapped_answers_dilute_trait_percentages() {
        let profile = score(&responses([
            ("rules", RULES_RESPECT),
            ("work_location", "Hybrid"),
        ]));

        // 5 / (2 * 5): the unmapped answer still counts in the denominator.
        assert_eq!(profile.traits.conscientiousness, 50);
        assert_eq!(profile.colors.blue, 100);
    }

    #[test]
    fn unknown_answer_text_is_ignored() {
        let scored = score_detailed(&responses([
            ("rules", RULES_RESPECT),
            ("conflict", "I pretend it isn't happening"),
        ]));

        assert_eq!(scored.summary.mapped_count, 1);
        assert_eq!(scored.summary.ignored_question_ids, vec!["conflict"]);
        assert_eq!(scored.profile.traits.agreeableness, 0);
    }

    #[test]
    fn color_only_and_trait_only_answers() {
        let profile = score(&responses([
            ("feedback", "Direct and to the point"),
            ("learning_style", "Jump in and learn by doing"),
        ]));

        // Only "feedback" is color-tagged.
        assert_eq!(profile.colors.red, 100);
        // 3 / (2 * 5) = 30.
        assert_eq!(profile.traits.openness, 30);
        assert_eq!(profile.primary_trait, PersonalityTrait::Openness);
    }

    #[test]
    fn unspecified_weight_adds_one_point() {
        let profile = score(&responses([("feedback", "In writing, with specific examples")]));
        // 1 / (1 * 5) = 20.
        assert_eq!(profile.traits.conscientiousness, 20);
    }

    #[test]
    fn full_assessment_produces_well_formed_profile() {
        let all: QuizResponseSet = catalog::questions()
            .iter()
            .map(|q| (q.id, q.options[0]))
            .collect();
        let scored = score_detailed(&all);

        assert_eq!(scored.summary.answered_count, catalog::questions().len());
        assert_eq!(scored.summary.ignored_question_ids.len(), 2);

        let color_sum = scored.profile.colors.total();
        assert!((97..=103).contains(&color_sum), "color sum was {color_sum}");
        assert_ne!(scored.profile.color_profile, &descriptors::DEFAULT_COLOR_PROFILE);
    }

    #[test]
    fn deterministic_and_order_independent() {
        let forward = responses([
            ("rules", RULES_RESPECT),
            ("conflict", "I address it head-on and move forward"),
            ("team_role", "The supporter who helps everyone succeed"),
            ("work_location", "Remote"),
        ]);
        let backward: QuizResponseSet = [
            ("work_location", "Remote"),
            ("team_role", "The supporter who helps everyone succeed"),
            ("conflict", "I address it head-on and move forward"),
            ("rules", RULES_RESPECT),
        ]
        .into_iter()
        .collect();

        assert_eq!(score_detailed(&forward), score_detailed(&forward));
        assert_eq!(score_detailed(&forward), score_detailed(&backward));
    }
}
