use std::process::ExitCode;

use clap::Parser;

use prompt_relay::config::UpstreamConfig;
use prompt_relay::upstream::types::parse_error_detail;
use prompt_relay::upstream::{UpstreamClient, UpstreamError};

const BILLING_URL: &str = "https://console.anthropic.com/settings/billing";

const CANDIDATE_MODELS: &[&str] = &[
    "claude-3-5-sonnet-20241022",
    "claude-3-5-sonnet-20240620",
    "claude-3-sonnet-20240229",
    "claude-3-opus-20240229",
    "claude-3-haiku-20240307",
    "claude-2.1",
    "claude-2.0",
];

#[derive(Parser)]
#[command(name = "probe-cli")]
#[command(about = "Find which models an API key can reach", long_about = None)]
struct Cli {
    /// API key to test.
    api_key: String,

    /// Messages endpoint.
    #[arg(short, long, default_value = "https://api.anthropic.com/v1/messages")]
    url: String,

    /// Model to try; repeat to try several in order. Defaults to a built-in list.
    #[arg(short, long = "model")]
    models: Vec<String>,

    /// Per-attempt timeout in seconds.
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let models: Vec<String> = if cli.models.is_empty() {
        CANDIDATE_MODELS.iter().map(|m| m.to_string()).collect()
    } else {
        cli.models.clone()
    };

    let shown: String = cli.api_key.chars().take(10).collect();
    println!("Testing API key: {shown}...");
    println!("{}", "=".repeat(60));

    for model in &models {
        println!("\nTesting model: {model}");

        let client = UpstreamClient::new(UpstreamConfig {
            url: cli.url.clone(),
            model: model.clone(),
            max_tokens: 10,
            timeout_secs: cli.timeout,
            ..UpstreamConfig::default()
        })?;

        match client.complete(&cli.api_key, "Hi").await {
            Ok(_) => {
                println!("  OK: this model works");
                println!("\nWorking model found: {model}");
                println!("Set upstream.model = \"{model}\" in the relay configuration.");
                return Ok(ExitCode::SUCCESS);
            }
            Err(UpstreamError::Rejected { status, raw, .. }) => {
                println!("  FAILED {}", describe_rejection(status.as_u16(), &raw));
            }
            Err(e) => println!("  FAILED: {e}"),
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("No working models found.");
    println!("\nPossible issues:");
    println!("1. API key doesn't have billing enabled");
    println!("2. Account needs credits added");
    println!("3. API key might be invalid");
    println!("\nPlease check: {BILLING_URL}");
    Ok(ExitCode::FAILURE)
}

/// `<status>: <type> - <message>` for one rejected attempt.
fn describe_rejection(status: u16, raw: &str) -> String {
    let (kind, message) = parse_error_detail(raw.as_bytes());
    format!(
        "{status}: {} - {}",
        kind.as_deref().unwrap_or("unknown"),
        message.as_deref().unwrap_or("No message"),
    )
}
