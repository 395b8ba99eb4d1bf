use serde::{Serialize, Deserialize};
use crate::quiz::Choice;
use super::CanonicalRecord;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PersonalityType {
    Introvert,
    Extrovert,
}

impl PersonalityType {
    pub fn as_str(&self) -> &str {
        match self {
            PersonalityType::Introvert => "Introvert",
            PersonalityType::Extrovert => "Extrovert",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "introvert" => Some(PersonalityType::Introvert),
            "extrovert" => Some(PersonalityType::Extrovert),
            _ => None,
        }
    }

    /// Negative scores are introverted; zero and above extroverted.
    pub fn from_score(score: i32) -> Self {
        if score < 0 {
            PersonalityType::Introvert
        } else {
            PersonalityType::Extrovert
        }
    }
}

impl std::fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreTerm {
    pub name: &'static str,
    pub contribution: i32,
}

fn flag_term(choice: Choice) -> i32 {
    match choice {
        Choice::Yes => -2,
        Choice::No => 1,
    }
}

fn band_term(value: i32, high_above: i32, low_below: i32) -> i32 {
    if value > high_above {
        2
    } else if value < low_below {
        -2
    } else {
        0
    }
}

/// Per-term contributions, in a fixed order. Thresholds differ per field
/// (posting uses `< 2`, friends uses `> 10`).
pub fn breakdown(record: &CanonicalRecord) -> [ScoreTerm; 7] {
    [
        ScoreTerm {
            name: "Alone time",
            contribution: if record.time_spent_alone > 6 { -2 } else { 1 },
        },
        ScoreTerm {
            name: "Stage fear",
            contribution: flag_term(record.stage_fear),
        },
        ScoreTerm {
            name: "Social events",
            contribution: band_term(record.social_event_attendance, 7, 3),
        },
        ScoreTerm {
            name: "Going outside",
            contribution: band_term(record.going_outside, 7, 3),
        },
        ScoreTerm {
            name: "Drained after socializing",
            contribution: flag_term(record.drained_after_socializing),
        },
        ScoreTerm {
            name: "Friends circle",
            contribution: band_term(record.friends_circle_size, 10, 3),
        },
        ScoreTerm {
            name: "Social media posting",
            contribution: band_term(record.post_frequency, 7, 2),
        },
    ]
}

pub fn score(record: &CanonicalRecord) -> i32 {
    breakdown(record).iter().map(|term| term.contribution).sum()
}

pub fn classify(record: &CanonicalRecord) -> PersonalityType {
    PersonalityType::from_score(score(record))
}
