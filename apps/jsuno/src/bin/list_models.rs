//! Prints the Gemini models the configured API key can use for content generation.

use std::process::ExitCode;

use jsuno::config::Config;
use jsuno::credentials::{resolve_credential, API_KEY_VAR};
use jsuno::llm_client::GeminiClient;

const RULE: &str = "----------------------------------------";

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    jsuno::init_tracing("warn");

    let Some(credential) = resolve_credential(&config.secrets_path) else {
        println!("❌ Error: API key not found.");
        println!(
            "Add {API_KEY_VAR} to {} or export it as an environment variable.",
            config.secrets_path.display()
        );
        return ExitCode::FAILURE;
    };

    let client = match GeminiClient::new(credential, config.gemini_api_base, config.gemini_model) {
        Ok(client) => client,
        Err(e) => {
            println!("❌ Client error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("✅ Connected. Models available to your key:");
    println!("{RULE}");

    let status = match client.list_models().await {
        Ok(models) => {
            for model in models.iter().filter(|m| m.supports_generate_content()) {
                println!("Available model: {}", model.name);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("❌ Listing failed: {e}");
            ExitCode::FAILURE
        }
    };

    println!("{RULE}");
    status
}
