use log::info;
use crate::prediction::PredictionService;
use crate::quiz::{Advance, AnswerCollector, AnswerValue};
use crate::submission::{self, QuizOutcome};
use super::{QuizStage, Result, SessionError};

/// Puts a cancelled submission back in progress.
struct PendingSubmission<'a>(&'a mut QuizStage);

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        *self.0 = QuizStage::InProgress;
    }
}

/// One user's pass through the quiz. Owns the collector exclusively; restarting discards it.
#[derive(Debug, Clone)]
pub struct QuizSession {
    stage: QuizStage,
    collector: AnswerCollector,
    outcome: Option<QuizOutcome>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            stage: QuizStage::Welcome,
            collector: AnswerCollector::new(),
            outcome: None,
        }
    }

    pub fn stage(&self) -> QuizStage {
        self.stage
    }

    pub fn collector(&self) -> &AnswerCollector {
        &self.collector
    }

    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    fn expect_stage(&self, expected: QuizStage) -> Result<()> {
        if self.stage != expected {
            return Err(SessionError::InvalidStage {
                expected,
                actual: self.stage,
            });
        }
        Ok(())
    }

    pub fn start(&mut self) -> Result<()> {
        self.expect_stage(QuizStage::Welcome)?;
        self.collector.reset();
        self.stage = QuizStage::InProgress;
        info!("📝 Quiz started");
        Ok(())
    }

    pub fn answer(&mut self, value: impl Into<AnswerValue>) -> Result<()> {
        self.expect_stage(QuizStage::InProgress)?;
        self.collector.answer_current(value)?;
        Ok(())
    }

    /// Moves forward, refusing while the current question is unanswered.
    pub fn next(&mut self) -> Result<Advance> {
        self.expect_stage(QuizStage::InProgress)?;
        if !self.collector.is_current_answered() {
            let id = self.collector.current_question().id;
            return Err(SessionError::Unanswered(id.as_str().to_string()));
        }
        Ok(self.collector.advance())
    }

    pub fn previous(&mut self) -> Result<usize> {
        self.expect_stage(QuizStage::InProgress)?;
        Ok(self.collector.retreat())
    }

    /// Runs the submission once, from the answered last question. Remote failures never
    /// surface here. If the future is dropped mid-call the session goes back to `InProgress`.
    pub async fn submit(&mut self, service: &dyn PredictionService) -> Result<&QuizOutcome> {
        self.expect_stage(QuizStage::InProgress)?;
        if !self.collector.is_last() {
            return Err(SessionError::NotAtLastQuestion {
                index: self.collector.current_index(),
            });
        }
        if !self.collector.is_current_answered() {
            let id = self.collector.current_question().id;
            return Err(SessionError::Unanswered(id.as_str().to_string()));
        }

        self.stage = QuizStage::Submitting;
        let pending = PendingSubmission(&mut self.stage);
        info!("📤 Submitting {} answers", self.collector.answers().len());

        let outcome = submission::submit(self.collector.answers(), service).await;

        drop(pending);
        self.stage = QuizStage::Completed;
        let outcome: &QuizOutcome = self.outcome.insert(outcome);
        Ok(outcome)
    }

    /// Back to the welcome screen with no answers, index 0 and no outcome.
    pub fn restart(&mut self) {
        self.collector.reset();
        self.outcome = None;
        self.stage = QuizStage::Welcome;
        info!("🔄 Quiz restarted");
    }
}
