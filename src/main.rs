#[tokio::main]
async fn main() {
    // Quiet by default so log lines don't interleave with the quiz prompts
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = personasense_lib::run().await {
        eprintln!("Error running PersonaSense: {}", e);
        std::process::exit(1);
    }
}
