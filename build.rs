use std::env;

const EMBEDDED_VARS: [&str; 5] = [
    "PERSONASENSE_API_BASE_URL",
    "PERSONASENSE_ORIGIN",
    "PERSONASENSE_REQUEST_TIMEOUT_SECS",
    "PERSONASENSE_OFFLINE",
    "PERSONASENSE_SHARE_URL",
];

fn main() {
    // Load .env file during build so deployment settings can be baked into the binary
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=BUILD.RS: Failed to load .env file: {}. Using system environment variables.", e);
    }

    // Embedded values are read at runtime via option_env!() when the runtime environment lacks them
    for key in EMBEDDED_VARS {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(value) = env::var(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
    println!("cargo:rerun-if-changed=.env");
}
