use log::debug;
use super::{question, AnswerSet, AnswerValue, Question, QuestionId, QuizError, Result, QUESTIONS, QUESTION_COUNT};

/// Outcome of pressing "next".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Moved(usize),
    /// Already on the last question; the caller should submit.
    Submit,
}

/// Owns the in-progress answers and the cursor over the fixed question list.
#[derive(Debug, Clone, Default)]
pub struct AnswerCollector {
    answers: AnswerSet,
    current: usize,
}

impl AnswerCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or overwrites the answer for `id`. Values of the wrong shape are rejected and
    /// leave the answer set untouched.
    pub fn record_answer(&mut self, id: QuestionId, value: impl Into<AnswerValue>) -> Result<()> {
        let value = value.into();
        let target = question(id);
        if !value.fits(&target.kind) {
            return Err(QuizError::ShapeMismatch {
                question: id.as_str().to_string(),
                value,
            });
        }
        debug!("Recorded answer for {}: {:?}", id.as_str(), value);
        self.answers.insert(id, value);
        Ok(())
    }

    pub fn answer_current(&mut self, value: impl Into<AnswerValue>) -> Result<()> {
        let id = self.current_question().id;
        self.record_answer(id, value)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &'static Question {
        &QUESTIONS[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current == QUESTION_COUNT - 1
    }

    pub fn advance(&mut self) -> Advance {
        if self.is_last() {
            return Advance::Submit;
        }
        self.current += 1;
        Advance::Moved(self.current)
    }

    /// Steps back one question. No-op on the first question.
    pub fn retreat(&mut self) -> usize {
        if self.current > 0 {
            self.current -= 1;
        }
        self.current
    }

    /// Sliders always count as answered: they display their midpoint until moved.
    pub fn is_current_answered(&self) -> bool {
        let q = self.current_question();
        q.is_slider() || self.answers.contains(q.id)
    }

    /// Value a slider question currently shows, falling back to its midpoint.
    pub fn current_slider_value(&self) -> Option<i32> {
        let q = self.current_question();
        let default = q.slider_default()?;
        Some(self.answers.number(q.id).unwrap_or(default))
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn progress_percent(&self) -> f64 {
        (self.current + 1) as f64 / QUESTION_COUNT as f64 * 100.0
    }

    pub fn reset(&mut self) {
        self.answers = AnswerSet::new();
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Choice;

    #[test]
    fn test_retreat_at_start_is_noop() {
        let mut collector = AnswerCollector::new();
        assert_eq!(collector.retreat(), 0);
        assert_eq!(collector.current_index(), 0);
    }

    #[test]
    fn test_advance_until_submit() {
        let mut collector = AnswerCollector::new();
        for expected in 1..QUESTION_COUNT {
            assert_eq!(collector.advance(), Advance::Moved(expected));
        }
        assert!(collector.is_last());
        assert_eq!(collector.advance(), Advance::Submit);
        assert_eq!(collector.current_index(), QUESTION_COUNT - 1);

        assert_eq!(collector.retreat(), QUESTION_COUNT - 2);
    }

    #[test]
    fn test_answered_predicate_per_kind() {
        let mut collector = AnswerCollector::new();

        // hoursAlone: numeric entry
        assert!(!collector.is_current_answered());
        collector.answer_current(3).unwrap();
        assert!(collector.is_current_answered());

        // stageFear: binary choice
        collector.advance();
        assert!(!collector.is_current_answered());
        collector.answer_current(Choice::No).unwrap();
        assert!(collector.is_current_answered());

        // socialEvents: slider, answered without interaction
        collector.advance();
        assert!(collector.is_current_answered());
        assert!(!collector.answers().contains(QuestionId::SocialEvents));
    }

    #[test]
    fn test_slider_value_defaults_to_midpoint() {
        let mut collector = AnswerCollector::new();
        assert_eq!(collector.current_slider_value(), None);

        collector.advance();
        collector.advance();
        assert_eq!(collector.current_slider_value(), Some(5));
        collector.answer_current(9).unwrap();
        assert_eq!(collector.current_slider_value(), Some(9));
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let mut collector = AnswerCollector::new();
        let err = collector
            .record_answer(QuestionId::GoOutside, Choice::Yes)
            .unwrap_err();
        assert!(matches!(err, QuizError::ShapeMismatch { .. }));
        assert!(collector.answers().is_empty());
    }

    #[test]
    fn test_record_overwrites_and_reset_clears() {
        let mut collector = AnswerCollector::new();
        collector.record_answer(QuestionId::CloseFriends, 4).unwrap();
        collector.record_answer(QuestionId::CloseFriends, 12).unwrap();
        assert_eq!(collector.answers().number(QuestionId::CloseFriends), Some(12));
        assert_eq!(collector.answers().len(), 1);

        collector.advance();
        collector.reset();
        assert_eq!(collector.current_index(), 0);
        assert!(collector.answers().is_empty());
    }

    #[test]
    fn test_progress() {
        let mut collector = AnswerCollector::new();
        assert!((collector.progress_percent() - 100.0 / 7.0).abs() < 1e-9);
        while collector.advance() != Advance::Submit {}
        assert!((collector.progress_percent() - 100.0).abs() < 1e-9);
    }
}
