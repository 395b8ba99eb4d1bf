use personasense_lib::config::QuizConfig;
use personasense_lib::prediction::{PredictionClient, PredictionService};
use personasense_lib::quiz::Choice;
use personasense_lib::scoring::{self, CanonicalRecord};
use anyhow::Result;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = QuizConfig::from_env();
    let client = PredictionClient::new(config.predict_url()?, config.request_timeout);
    info!("🧪 Probing prediction endpoint {}", client.endpoint());

    let samples = [
        ("defaults", CanonicalRecord::default()),
        (
            "introvert",
            CanonicalRecord {
                social_event_attendance: 1,
                going_outside: 1,
                friends_circle_size: 1,
                post_frequency: 1,
                stage_fear: Choice::Yes,
                drained_after_socializing: Choice::Yes,
                time_spent_alone: 10,
            },
        ),
        (
            "extrovert",
            CanonicalRecord {
                social_event_attendance: 10,
                going_outside: 10,
                friends_circle_size: 15,
                post_frequency: 10,
                stage_fear: Choice::No,
                drained_after_socializing: Choice::No,
                time_spent_alone: 0,
            },
        ),
    ];

    println!("\n=== PREDICTION ENDPOINT RESULTS ===\n");
    let mut agreements = 0;
    for (name, record) in &samples {
        let local = scoring::classify(record);
        print!("{:<12} local={:<10} ", name, local.as_str());

        match client.predict(record).await {
            Ok(remote) => {
                let confidence = remote
                    .confidence
                    .map(|c| format!("{}%", c))
                    .unwrap_or_else(|| "n/a".to_string());
                println!("✅ remote={} (confidence {})", remote.label, confidence);
                if remote.label == local {
                    agreements += 1;
                }
            }
            Err(e) => println!("❌ remote failed: {}", e),
        }
    }

    info!("🏁 Probe complete. Remote agreed with local scoring on {}/{} samples.", agreements, samples.len());
    Ok(())
}
