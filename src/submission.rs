use log::{info, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::prediction::{PredictionError, PredictionService, RemotePrediction};
use crate::quiz::AnswerSet;
use crate::scoring::{self, CanonicalRecord, PersonalityType};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    Remote,
    Local,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label: PersonalityType,
    pub source: LabelSource,
    /// Only present when the remote service supplied the label.
    pub confidence: Option<f64>,
    pub metadata: Option<Map<String, Value>>,
}

impl ClassificationResult {
    pub fn local(label: PersonalityType) -> Self {
        Self {
            label,
            source: LabelSource::Local,
            confidence: None,
            metadata: None,
        }
    }

    pub fn from_remote(remote: RemotePrediction) -> Self {
        Self {
            label: remote.label,
            source: LabelSource::Remote,
            confidence: remote.confidence,
            metadata: Some(remote.metadata),
        }
    }

    /// Collapses the remote outcome into one result: the remote label when there is one,
    /// otherwise `fallback`'s label with no confidence.
    pub fn resolve(
        remote: Result<RemotePrediction, PredictionError>,
        fallback: PersonalityType,
    ) -> Self {
        remote
            .map(Self::from_remote)
            .unwrap_or_else(|e| {
                match e {
                    PredictionError::Offline => info!("Remote prediction skipped, using local score"),
                    e => warn!("Remote prediction unavailable, using local score: {}", e),
                }
                Self::local(fallback)
            })
    }

    pub fn user_id(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get("user_id"))
            .and_then(Value::as_str)
    }
}

/// Everything the results page needs from one submission.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub result: ClassificationResult,
    pub answers: AnswerSet,
    pub record: CanonicalRecord,
    pub local_score: i32,
}

/// Classifies `answers` locally and asks `service` once for a remote label. Never fails:
/// any remote error degrades to the local label.
pub async fn submit(answers: &AnswerSet, service: &dyn PredictionService) -> QuizOutcome {
    let record = CanonicalRecord::from_answers(answers);
    let local_score = scoring::score(&record);
    let local_label = PersonalityType::from_score(local_score);

    let remote = service.predict(&record).await;
    let result = ClassificationResult::resolve(remote, local_label);

    info!(
        "🎯 Classified as {} ({:?} source, local score {})",
        result.label, result.source, local_score
    );

    QuizOutcome {
        result,
        answers: answers.clone(),
        record,
        local_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::LocalOnly;
    use crate::quiz::{Choice, QuestionId};
    use async_trait::async_trait;

    struct Fixed(PersonalityType, Option<f64>);

    #[async_trait]
    impl PredictionService for Fixed {
        async fn predict(&self, _record: &CanonicalRecord) -> Result<RemotePrediction, PredictionError> {
            let mut metadata = Map::new();
            metadata.insert("user_id".to_string(), Value::String("0123456789abcdef".to_string()));
            Ok(RemotePrediction {
                label: self.0,
                confidence: self.1,
                metadata,
            })
        }
    }

    struct Failing;

    #[async_trait]
    impl PredictionService for Failing {
        async fn predict(&self, _record: &CanonicalRecord) -> Result<RemotePrediction, PredictionError> {
            Err(PredictionError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    fn introvert_answers() -> AnswerSet {
        [
            (QuestionId::HoursAlone, 10.into()),
            (QuestionId::StageFear, Choice::Yes.into()),
            (QuestionId::SocialEvents, 1.into()),
            (QuestionId::GoOutside, 1.into()),
            (QuestionId::DrainedAfterSocializing, Choice::Yes.into()),
            (QuestionId::CloseFriends, 1.into()),
            (QuestionId::SocialMediaPosting, 1.into()),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_remote_label_wins() {
        let answers = introvert_answers();
        let outcome = submit(&answers, &Fixed(PersonalityType::Extrovert, Some(91.0))).await;

        assert_eq!(outcome.result.label, PersonalityType::Extrovert);
        assert_eq!(outcome.result.source, LabelSource::Remote);
        assert_eq!(outcome.result.confidence, Some(91.0));
        assert_eq!(outcome.result.user_id(), Some("0123456789abcdef"));
        assert_eq!(outcome.local_score, -14);
        assert_eq!(outcome.answers, answers);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_local() {
        let answers = introvert_answers();
        let outcome = submit(&answers, &Failing).await;

        assert_eq!(outcome.result, ClassificationResult::local(PersonalityType::Introvert));
        assert_eq!(outcome.result.confidence, None);
        assert_eq!(outcome.result.metadata, None);
    }

    #[tokio::test]
    async fn test_offline_uses_defaults_for_gaps() {
        let outcome = submit(&AnswerSet::new(), &LocalOnly).await;
        assert_eq!(outcome.record, CanonicalRecord::default());
        assert_eq!(outcome.result.label, PersonalityType::Extrovert);
        assert_eq!(outcome.result.source, LabelSource::Local);
        assert!(outcome.answers.is_empty());
    }

    #[test]
    fn test_resolve_prefers_success() {
        let remote = Ok(RemotePrediction {
            label: PersonalityType::Introvert,
            confidence: None,
            metadata: Map::new(),
        });
        let result = ClassificationResult::resolve(remote, PersonalityType::Extrovert);
        assert_eq!(result.label, PersonalityType::Introvert);
        assert_eq!(result.source, LabelSource::Remote);

        let result = ClassificationResult::resolve(
            Err(PredictionError::MissingLabel),
            PersonalityType::Extrovert,
        );
        assert_eq!(result, ClassificationResult::local(PersonalityType::Extrovert));
    }
}
