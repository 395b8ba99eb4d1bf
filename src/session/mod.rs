pub mod manager;

pub use manager::*;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Where a quiz session is in the welcome → quiz → results flow.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizStage {
    Welcome,
    InProgress,
    Submitting,
    Completed,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Expected session stage {expected:?}, but it is {actual:?}")]
    InvalidStage { expected: QuizStage, actual: QuizStage },
    #[error("Question {0} has not been answered yet")]
    Unanswered(String),
    #[error("Cannot submit from question {index}; answers are submitted from the last question")]
    NotAtLastQuestion { index: usize },
    #[error(transparent)]
    Quiz(#[from] crate::quiz::QuizError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
