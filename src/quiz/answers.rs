use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use super::{QuestionId, QuestionKind};

/// Answer to a binary-choice question.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

impl Choice {
    pub const ALL: [Choice; 2] = [Choice::Yes, Choice::No];

    pub fn as_str(&self) -> &str {
        match self {
            Choice::Yes => "Yes",
            Choice::No => "No",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Some(Choice::Yes),
            "no" | "n" => Some(Choice::No),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(i32),
    Choice(Choice),
}

impl AnswerValue {
    pub fn as_number(&self) -> Option<i32> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Choice(_) => None,
        }
    }

    pub fn as_choice(&self) -> Option<Choice> {
        match self {
            AnswerValue::Choice(c) => Some(*c),
            AnswerValue::Number(_) => None,
        }
    }

    /// Whether this value has the shape a question of `kind` accepts. Ranges are not checked.
    pub fn fits(&self, kind: &QuestionKind) -> bool {
        match (self, kind) {
            (AnswerValue::Choice(_), QuestionKind::BinaryChoice) => true,
            (AnswerValue::Number(_), QuestionKind::NumericEntry) => true,
            (AnswerValue::Number(_), QuestionKind::ScaledSlider { .. }) => true,
            _ => false,
        }
    }
}

impl From<i32> for AnswerValue {
    fn from(n: i32) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<Choice> for AnswerValue {
    fn from(c: Choice) -> Self {
        AnswerValue::Choice(c)
    }
}

/// Responses collected so far, keyed by question.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: QuestionId) -> Option<&AnswerValue> {
        self.answers.get(&id)
    }

    pub fn number(&self, id: QuestionId) -> Option<i32> {
        self.get(id).and_then(AnswerValue::as_number)
    }

    pub fn choice(&self, id: QuestionId) -> Option<Choice> {
        self.get(id).and_then(AnswerValue::as_choice)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    // Shape checking happens in the collector
    pub(crate) fn insert(&mut self, id: QuestionId, value: AnswerValue) {
        self.answers.insert(id, value);
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
