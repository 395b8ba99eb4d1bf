pub mod questions;
pub mod answers;
pub mod collector;

pub use questions::*;
pub use answers::*;
pub use collector::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("Answer {value:?} does not fit question {question}")]
    ShapeMismatch { question: String, value: AnswerValue },
}

pub type Result<T> = std::result::Result<T, QuizError>;
