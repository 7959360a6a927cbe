// src/scoring/catalog.rs

use crate::scoring::mapping;

/// A forced-choice question asked by the assessment wizard.
#[derive(Debug)]
pub struct CatalogQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    /// Valid option texts, in display order.
    pub options: &'static [&'static str],
}

impl CatalogQuestion {
    /// True when at least one option of this question feeds the scoring engine.
    pub fn is_scored(&self) -> bool {
        mapping::question(self.id).is_some()
    }

    pub fn has_option(&self, answer: &str) -> bool {
        self.options.contains(&answer)
    }
}

/// Every question in the assessment, in wizard order.
pub static QUESTIONS: &[CatalogQuestion] = &[
    CatalogQuestion {
        id: "rules",
        prompt: "How do you feel about rules and procedures at work?",
        options: &[
            "Respecting - they're there for a reason",
            "Flexible - they're guidelines, not laws",
            "Challenging - I question the ones that slow us down",
            "Comforting - they keep everyone on the same page",
        ],
    },
    CatalogQuestion {
        id: "conflict",
        prompt: "When a disagreement breaks out on your team, you usually...",
        options: &[
            "I try to mediate and find solutions",
            "I address it head-on and move forward",
            "I lighten the mood and get people talking",
            "I give people space and check in later",
        ],
    },
    CatalogQuestion {
        id: "decision_making",
        prompt: "How do you usually make important decisions?",
        options: &[
            "Quickly, trusting my instincts",
            "By talking it through with others",
            "After considering how it affects everyone",
            "After gathering data and analysing the options",
        ],
    },
    CatalogQuestion {
        id: "work_pace",
        prompt: "Which work pace suits you best?",
        options: &[
            "Fast and results-driven",
            "Energetic with lots of variety",
            "Steady and predictable",
            "Methodical and thorough",
        ],
    },
    CatalogQuestion {
        id: "stress_response",
        prompt: "Under a tight deadline you tend to...",
        options: &[
            "Take charge and push through",
            "Stay upbeat and rally the team",
            "Feel the pressure but keep supporting others",
            "Worry about the details slipping",
        ],
    },
    CatalogQuestion {
        id: "new_ideas",
        prompt: "A colleague pitches an untested idea. Your first reaction?",
        options: &[
            "Let's try it and see what happens",
            "What's the bottom-line impact?",
            "How will the team feel about the change?",
            "Where's the evidence it will work?",
        ],
    },
    CatalogQuestion {
        id: "team_role",
        prompt: "In a team project you naturally become...",
        options: &[
            "The leader who sets direction",
            "The motivator who keeps energy high",
            "The supporter who helps everyone succeed",
            "The planner who organizes the details",
        ],
    },
    CatalogQuestion {
        id: "feedback",
        prompt: "How do you prefer to receive feedback?",
        options: &[
            "Direct and to the point",
            "In a positive, encouraging conversation",
            "Privately and with care",
            "In writing, with specific examples",
        ],
    },
    CatalogQuestion {
        id: "learning_style",
        prompt: "How do you pick up a new skill?",
        options: &[
            "Jump in and learn by doing",
            "Learn alongside other people",
            "Follow a mentor step by step",
            "Read the documentation first",
        ],
    },
    CatalogQuestion {
        id: "ideal_environment",
        prompt: "Your ideal work environment is...",
        options: &[
            "Competitive and goal-oriented",
            "Creative and social",
            "Collaborative and harmonious",
            "Structured and quiet",
        ],
    },
    CatalogQuestion {
        id: "work_location",
        prompt: "Where would you prefer to work?",
        options: &["Remote", "Hybrid", "On-site", "No preference"],
    },
    CatalogQuestion {
        id: "start_availability",
        prompt: "When could you start?",
        options: &[
            "Immediately",
            "Within 2 weeks",
            "Within a month",
            "More than a month",
        ],
    },
];

pub fn questions() -> &'static [CatalogQuestion] {
    QUESTIONS
}

pub fn find(id: &str) -> Option<&'static CatalogQuestion> {
    QUESTIONS.iter().find(|q| q.id == id)
}
