use serde::{Serialize, Deserialize};
use crate::quiz::{AnswerSet, Choice, QuestionId};

pub const DEFAULT_SCALE_VALUE: i32 = 5;
pub const DEFAULT_TIME_ALONE: i32 = 4;
pub const DEFAULT_CHOICE: Choice = Choice::No;

/// Fully populated view of the answers, in the field names the prediction service expects.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanonicalRecord {
    #[serde(rename = "Social_event_attendance")]
    pub social_event_attendance: i32,
    #[serde(rename = "Going_outside")]
    pub going_outside: i32,
    #[serde(rename = "Friends_circle_size")]
    pub friends_circle_size: i32,
    #[serde(rename = "Post_frequency")]
    pub post_frequency: i32,
    #[serde(rename = "Stage_fear")]
    pub stage_fear: Choice,
    #[serde(rename = "Drained_after_socializing")]
    pub drained_after_socializing: Choice,
    #[serde(rename = "Time_spent_Alone")]
    pub time_spent_alone: i32,
}

impl Default for CanonicalRecord {
    fn default() -> Self {
        Self {
            social_event_attendance: DEFAULT_SCALE_VALUE,
            going_outside: DEFAULT_SCALE_VALUE,
            friends_circle_size: DEFAULT_SCALE_VALUE,
            post_frequency: DEFAULT_SCALE_VALUE,
            stage_fear: DEFAULT_CHOICE,
            drained_after_socializing: DEFAULT_CHOICE,
            time_spent_alone: DEFAULT_TIME_ALONE,
        }
    }
}

impl CanonicalRecord {
    /// Present answers pass through unchanged; absent ones take the field default.
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let defaults = Self::default();
        Self {
            social_event_attendance: answers
                .number(QuestionId::SocialEvents)
                .unwrap_or(defaults.social_event_attendance),
            going_outside: answers
                .number(QuestionId::GoOutside)
                .unwrap_or(defaults.going_outside),
            friends_circle_size: answers
                .number(QuestionId::CloseFriends)
                .unwrap_or(defaults.friends_circle_size),
            post_frequency: answers
                .number(QuestionId::SocialMediaPosting)
                .unwrap_or(defaults.post_frequency),
            stage_fear: answers
                .choice(QuestionId::StageFear)
                .unwrap_or(defaults.stage_fear),
            drained_after_socializing: answers
                .choice(QuestionId::DrainedAfterSocializing)
                .unwrap_or(defaults.drained_after_socializing),
            time_spent_alone: answers
                .number(QuestionId::HoursAlone)
                .unwrap_or(defaults.time_spent_alone),
        }
    }
}

impl From<&AnswerSet> for CanonicalRecord {
    fn from(answers: &AnswerSet) -> Self {
        Self::from_answers(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answers_take_defaults() {
        let record = CanonicalRecord::from_answers(&AnswerSet::new());
        assert_eq!(record, CanonicalRecord::default());
        assert_eq!(record.time_spent_alone, 4);
        assert_eq!(record.social_event_attendance, 5);
        assert_eq!(record.stage_fear, Choice::No);
    }

    #[test]
    fn test_present_answers_pass_through() {
        let answers: AnswerSet = [
            (QuestionId::HoursAlone, 0.into()),
            (QuestionId::StageFear, Choice::Yes.into()),
            (QuestionId::SocialEvents, 0.into()),
            (QuestionId::CloseFriends, 40.into()),
        ]
        .into_iter()
        .collect();

        let record = CanonicalRecord::from(&answers);
        // zero is a real answer, not a gap
        assert_eq!(record.time_spent_alone, 0);
        assert_eq!(record.social_event_attendance, 0);
        assert_eq!(record.friends_circle_size, 40);
        assert_eq!(record.stage_fear, Choice::Yes);
        assert_eq!(record.going_outside, DEFAULT_SCALE_VALUE);
        assert_eq!(record.post_frequency, DEFAULT_SCALE_VALUE);
        assert_eq!(record.drained_after_socializing, Choice::No);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(CanonicalRecord::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Social_event_attendance": 5,
                "Going_outside": 5,
                "Friends_circle_size": 5,
                "Post_frequency": 5,
                "Stage_fear": "No",
                "Drained_after_socializing": "No",
                "Time_spent_Alone": 4
            })
        );
    }
}
