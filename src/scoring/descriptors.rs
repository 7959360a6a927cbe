// src/scoring/descriptors.rs

use crate::models::{
    personality::{Color, PersonalityTrait},
    profile::{ColorProfile, TraitDescriptor},
};

/// Narrative used when no trait dominates or a trait has no entry.
pub static DEFAULT_TRAIT_DESCRIPTOR: TraitDescriptor = TraitDescriptor {
    title: "Balanced Contributor",
    work_style: "You adapt your approach to the situation and draw on a broad mix of strengths.",
    career_fit: &["Generalist roles", "Operations", "Project coordination"],
    insights: &[
        "Your answers do not point to a single dominant trait.",
        "Completing more of the assessment will sharpen this profile.",
    ],
};

pub static DEFAULT_COLOR_PROFILE: ColorProfile = ColorProfile {
    label: "Balanced",
    summary: "You move comfortably between behavioral styles depending on the team and the task.",
    motivators: &["Variety of work", "Clear expectations"],
    challenges: &["Communicating a clear personal preference"],
};

pub static TRAIT_DESCRIPTORS: &[(PersonalityTrait, TraitDescriptor)] = &[
    (
        PersonalityTrait::Openness,
        TraitDescriptor {
            title: "Creative Explorer",
            work_style: "You thrive on new ideas and are energized by experimenting with unfamiliar approaches.",
            career_fit: &["Product design", "Research and development", "Marketing strategy", "Entrepreneurship"],
            insights: &[
                "You are quick to see possibilities others miss.",
                "Routine work can drain your motivation; look for roles with room to experiment.",
                "Pair your ideas with a finisher to carry them over the line.",
            ],
        },
    ),
    (
        PersonalityTrait::Conscientiousness,
        TraitDescriptor {
            title: "Reliable Organizer",
            work_style: "You plan carefully, follow through on commitments and hold yourself to high standards.",
            career_fit: &["Project management", "Finance and accounting", "Quality assurance", "Operations"],
            insights: &[
                "Colleagues trust you to deliver what you promise.",
                "You do your best work with clear goals and defined processes.",
                "Watch for perfectionism slowing down decisions.",
            ],
        },
    ),
    (
        PersonalityTrait::Extraversion,
        TraitDescriptor {
            title: "Energetic Connector",
            work_style: "You gain energy from people and bring momentum to group work.",
            career_fit: &["Sales", "Business development", "Team leadership", "Public relations"],
            insights: &[
                "You build relationships quickly and keep teams engaged.",
                "Long stretches of solitary work may feel draining.",
                "Leave space for quieter voices in discussions.",
            ],
        },
    ),
    (
        PersonalityTrait::Agreeableness,
        TraitDescriptor {
            title: "Supportive Collaborator",
            work_style: "You put the team first and work to keep collaboration smooth and fair.",
            career_fit: &["Human resources", "Customer success", "Healthcare", "Education"],
            insights: &[
                "People feel heard and supported around you.",
                "You help resolve tension before it escalates.",
                "Practice voicing disagreement when your view differs.",
            ],
        },
    ),
    (
        PersonalityTrait::Neuroticism,
        TraitDescriptor {
            title: "Attentive Guardian",
            work_style: "You are alert to risks and care deeply about getting things right.",
            career_fit: &["Risk analysis", "Compliance", "Editing and review", "Safety engineering"],
            insights: &[
                "You notice problems early and raise them.",
                "Predictable environments help you perform at your best.",
                "Build in recovery time during high-pressure periods.",
            ],
        },
    ),
];

pub static COLOR_PROFILES: &[(Color, ColorProfile)] = &[
    (
        Color::Red,
        ColorProfile {
            label: "Red - The Driver",
            summary: "Direct, decisive and results-oriented. You set the pace and push toward goals.",
            motivators: &["Clear targets", "Autonomy", "Visible results"],
            challenges: &["Patience with slower processes", "Listening before acting"],
        },
    ),
    (
        Color::Yellow,
        ColorProfile {
            label: "Yellow - The Inspirer",
            summary: "Enthusiastic, sociable and optimistic. You bring energy and ideas to a team.",
            motivators: &["Recognition", "Variety", "Working with people"],
            challenges: &["Following through on details", "Staying focused on one task"],
        },
    ),
    (
        Color::Green,
        ColorProfile {
            label: "Green - The Supporter",
            summary: "Patient, loyal and harmony-seeking. You keep teams steady and connected.",
            motivators: &["Stable relationships", "Helping others", "A calm environment"],
            challenges: &["Handling sudden change", "Saying no"],
        },
    ),
    (
        Color::Blue,
        ColorProfile {
            label: "Blue - The Analyst",
            summary: "Precise, logical and thorough. You value accuracy and well-reasoned solutions.",
            motivators: &["Quality work", "Clear processes", "Time to think"],
            challenges: &["Deciding with incomplete information", "Tolerating ambiguity"],
        },
    ),
];

pub fn trait_descriptor(personality_trait: PersonalityTrait) -> &'static TraitDescriptor {
    TRAIT_DESCRIPTORS
        .iter()
        .find(|(t, _)| *t == personality_trait)
        .map(|(_, descriptor)| descriptor)
        .unwrap_or(&DEFAULT_TRAIT_DESCRIPTOR)
}

pub fn color_profile(color: Color) -> &'static ColorProfile {
    COLOR_PROFILES
        .iter()
        .find(|(c, _)| *c == color)
        .map(|(_, profile)| profile)
        .unwrap_or(&DEFAULT_COLOR_PROFILE)
}
