// src/scoring/mapping.rs

use crate::models::personality::{
    Color::{self, Blue, Green, Red, Yellow},
    PersonalityTrait::{self, Agreeableness, Conscientiousness, Extraversion, Neuroticism, Openness},
};

/// Weight applied when a mapping entry names a trait without a weight.
pub const DEFAULT_TRAIT_WEIGHT: u32 = 1;

/// Trait bucket fed by an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitWeight {
    pub personality_trait: PersonalityTrait,
    /// 1..=5, or `None` for `DEFAULT_TRAIT_WEIGHT`.
    pub weight: Option<u32>,
}

impl TraitWeight {
    pub fn points(&self) -> u32 {
        self.weight.unwrap_or(DEFAULT_TRAIT_WEIGHT)
    }
}

/// Tally targets for one answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerTarget {
    pub answer: &'static str,
    pub trait_weight: Option<TraitWeight>,
    pub color: Option<Color>,
}

#[derive(Debug)]
pub struct QuestionMapping {
    pub question_id: &'static str,
    pub answers: &'static [AnswerTarget],
}

const fn tagged(answer: &'static str, t: PersonalityTrait, weight: u32, color: Color) -> AnswerTarget {
    AnswerTarget {
        answer,
        trait_weight: Some(TraitWeight {
            personality_trait: t,
            weight: Some(weight),
        }),
        color: Some(color),
    }
}

const fn unweighted(answer: &'static str, t: PersonalityTrait, color: Color) -> AnswerTarget {
    AnswerTarget {
        answer,
        trait_weight: Some(TraitWeight {
            personality_trait: t,
            weight: None,
        }),
        color: Some(color),
    }
}

const fn trait_only(answer: &'static str, t: PersonalityTrait, weight: u32) -> AnswerTarget {
    AnswerTarget {
        answer,
        trait_weight: Some(TraitWeight {
            personality_trait: t,
            weight: Some(weight),
        }),
        color: None,
    }
}

const fn color_only(answer: &'static str, color: Color) -> AnswerTarget {
    AnswerTarget {
        answer,
        trait_weight: None,
        color: Some(color),
    }
}

/// Hand-authored answer-to-tally table. Questions absent here are asked but never scored.
pub static RESPONSE_MAPPING: &[QuestionMapping] = &[
    QuestionMapping {
        question_id: "rules",
        answers: &[
            tagged("Respecting - they're there for a reason", Conscientiousness, 5, Blue),
            tagged("Flexible - they're guidelines, not laws", Openness, 4, Yellow),
            tagged("Challenging - I question the ones that slow us down", Extraversion, 3, Red),
            tagged("Comforting - they keep everyone on the same page", Agreeableness, 3, Green),
        ],
    },
    QuestionMapping {
        question_id: "conflict",
        answers: &[
            tagged("I try to mediate and find solutions", Agreeableness, 5, Blue),
            tagged("I address it head-on and move forward", Extraversion, 4, Red),
            tagged("I lighten the mood and get people talking", Extraversion, 3, Yellow),
            tagged("I give people space and check in later", Agreeableness, 3, Green),
        ],
    },
    QuestionMapping {
        question_id: "decision_making",
        answers: &[
            tagged("Quickly, trusting my instincts", Extraversion, 4, Red),
            tagged("By talking it through with others", Agreeableness, 3, Yellow),
            tagged("After considering how it affects everyone", Agreeableness, 4, Green),
            tagged("After gathering data and analysing the options", Conscientiousness, 5, Blue),
        ],
    },
    QuestionMapping {
        question_id: "work_pace",
        answers: &[
            tagged("Fast and results-driven", Conscientiousness, 3, Red),
            tagged("Energetic with lots of variety", Openness, 4, Yellow),
            tagged("Steady and predictable", Conscientiousness, 3, Green),
            tagged("Methodical and thorough", Conscientiousness, 4, Blue),
        ],
    },
    QuestionMapping {
        question_id: "stress_response",
        answers: &[
            tagged("Take charge and push through", Extraversion, 3, Red),
            tagged("Stay upbeat and rally the team", Extraversion, 4, Yellow),
            tagged("Feel the pressure but keep supporting others", Neuroticism, 3, Green),
            tagged("Worry about the details slipping", Neuroticism, 4, Blue),
        ],
    },
    QuestionMapping {
        question_id: "new_ideas",
        answers: &[
            tagged("Let's try it and see what happens", Openness, 5, Yellow),
            tagged("What's the bottom-line impact?", Conscientiousness, 2, Red),
            tagged("How will the team feel about the change?", Agreeableness, 3, Green),
            tagged("Where's the evidence it will work?", Openness, 2, Blue),
        ],
    },
    QuestionMapping {
        question_id: "team_role",
        answers: &[
            tagged("The leader who sets direction", Extraversion, 5, Red),
            tagged("The motivator who keeps energy high", Extraversion, 4, Yellow),
            tagged("The supporter who helps everyone succeed", Agreeableness, 5, Green),
            tagged("The planner who organizes the details", Conscientiousness, 5, Blue),
        ],
    },
    QuestionMapping {
        question_id: "feedback",
        answers: &[
            color_only("Direct and to the point", Red),
            color_only("In a positive, encouraging conversation", Yellow),
            tagged("Privately and with care", Neuroticism, 2, Green),
            unweighted("In writing, with specific examples", Conscientiousness, Blue),
        ],
    },
    QuestionMapping {
        question_id: "learning_style",
        answers: &[
            trait_only("Jump in and learn by doing", Openness, 3),
            tagged("Learn alongside other people", Extraversion, 3, Yellow),
            tagged("Follow a mentor step by step", Agreeableness, 2, Green),
            tagged("Read the documentation first", Conscientiousness, 3, Blue),
        ],
    },
    QuestionMapping {
        question_id: "ideal_environment",
        answers: &[
            tagged("Competitive and goal-oriented", Extraversion, 3, Red),
            tagged("Creative and social", Openness, 4, Yellow),
            tagged("Collaborative and harmonious", Agreeableness, 4, Green),
            tagged("Structured and quiet", Conscientiousness, 3, Blue),
        ],
    },
];

pub fn question(question_id: &str) -> Option<&'static QuestionMapping> {
    RESPONSE_MAPPING.iter().find(|m| m.question_id == question_id)
}

/// Tally targets for `answer` to `question_id`, or `None` when either is unmapped.
/// Answer text must match exactly.
pub fn lookup(question_id: &str, answer: &str) -> Option<&'static AnswerTarget> {
    question(question_id)?.answers.iter().find(|a| a.answer == answer)
}
