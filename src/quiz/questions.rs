use serde::{Serialize, Deserialize};

/// Stable identifiers for the seven quiz questions, in presentation order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum QuestionId {
    HoursAlone,
    StageFear,
    SocialEvents,
    GoOutside,
    DrainedAfterSocializing,
    CloseFriends,
    SocialMediaPosting,
}

impl QuestionId {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionId::HoursAlone => "hoursAlone",
            QuestionId::StageFear => "stageFear",
            QuestionId::SocialEvents => "socialEvents",
            QuestionId::GoOutside => "goOutside",
            QuestionId::DrainedAfterSocializing => "drainedAfterSocializing",
            QuestionId::CloseFriends => "closeFriends",
            QuestionId::SocialMediaPosting => "socialMediaPosting",
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleLabels {
    pub low: &'static str,
    pub high: &'static str,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum QuestionKind {
    NumericEntry,
    BinaryChoice,
    ScaledSlider { min: i32, max: i32, labels: ScaleLabels },
}

#[derive(Serialize, Clone, Copy, Debug)]
pub struct Question {
    pub id: QuestionId,
    pub title: &'static str,
    pub emoji: &'static str,
    pub kind: QuestionKind,
}

impl Question {
    pub fn is_slider(&self) -> bool {
        matches!(self.kind, QuestionKind::ScaledSlider { .. })
    }

    /// Value a slider shows before the user touches it: the floored midpoint of its bounds.
    /// `None` for non-slider questions.
    pub fn slider_default(&self) -> Option<i32> {
        match self.kind {
            QuestionKind::ScaledSlider { min, max, .. } => Some((min + max).div_euclid(2)),
            _ => None,
        }
    }
}

const SLIDER_LABELS: ScaleLabels = ScaleLabels {
    low: "Never",
    high: "Very Often",
};

pub const QUESTION_COUNT: usize = 7;

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: QuestionId::HoursAlone,
        title: "How many hours per day (on average) do you spend alone?",
        emoji: "🏠",
        kind: QuestionKind::NumericEntry,
    },
    Question {
        id: QuestionId::StageFear,
        title: "Do you experience stage fear?",
        emoji: "🎭",
        kind: QuestionKind::BinaryChoice,
    },
    Question {
        id: QuestionId::SocialEvents,
        title: "On a scale of 0 to 10, how frequently do you attend social events?",
        emoji: "🎉",
        kind: QuestionKind::ScaledSlider { min: 0, max: 10, labels: SLIDER_LABELS },
    },
    Question {
        id: QuestionId::GoOutside,
        title: "On a scale of 0 to 10, how often do you go outside?",
        emoji: "🌳",
        kind: QuestionKind::ScaledSlider { min: 0, max: 10, labels: SLIDER_LABELS },
    },
    Question {
        id: QuestionId::DrainedAfterSocializing,
        title: "Do you feel drained or exhausted after socializing?",
        emoji: "😴",
        kind: QuestionKind::BinaryChoice,
    },
    Question {
        id: QuestionId::CloseFriends,
        title: "What is the approximate size of your close friends circle?",
        emoji: "👥",
        kind: QuestionKind::NumericEntry,
    },
    Question {
        id: QuestionId::SocialMediaPosting,
        title: "On a scale of 0 to 10, how often do you post on social media or other platforms?",
        emoji: "📱",
        kind: QuestionKind::ScaledSlider { min: 0, max: 10, labels: SLIDER_LABELS },
    },
];

pub fn question(id: QuestionId) -> &'static Question {
    // QUESTIONS is declared in QuestionId order
    &QUESTIONS[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_follow_id_order() {
        for (index, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.id as usize, index);
            assert_eq!(question(q.id).id, q.id);
        }
    }

    #[test]
    fn test_slider_default_is_midpoint() {
        assert_eq!(question(QuestionId::SocialEvents).slider_default(), Some(5));
        assert_eq!(question(QuestionId::HoursAlone).slider_default(), None);
        assert_eq!(question(QuestionId::StageFear).slider_default(), None);
    }

    #[test]
    fn test_question_id_names() {
        assert_eq!(QuestionId::CloseFriends.as_str(), "closeFriends");
        assert_eq!(
            serde_json::to_string(&QuestionId::DrainedAfterSocializing).unwrap(),
            "\"drainedAfterSocializing\""
        );
    }
}
