use anyhow::Context;
use clap::Parser;
use herald::{
    CallDescriptor, Config, DispatchError, IntentParser, KeywordIntentParser, Pipeline,
    config::{API_URL_ENV, DEFAULT_API_URL, TIMEOUT_ENV},
    transcript::CONVERSATION,
};
use std::{io::Read, path::PathBuf, time::Duration};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "herald", version, about = "Turn a conversation into a notification")]
struct Args {
    /// Destination for notification POSTs
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Send timeout in milliseconds
    #[arg(long, env = TIMEOUT_ENV, default_value_t = 10_000)]
    timeout_ms: u64,

    /// Read the transcript from a file ("-" for stdin) instead of the built-in conversation
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Print the parsed call descriptor without sending anything
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn config(&self) -> Result<Config, herald::ConfigError> {
        Config::new(&self.api_url, Duration::from_millis(self.timeout_ms))
    }
}

fn read_transcript(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        None => Ok(CONVERSATION.to_string()),
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read transcript from stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display())),
    }
}

/// Parse without sending. A transcript with no intent fails like a normal run.
fn describe<P: IntentParser>(
    pipeline: &Pipeline<P>,
    transcript: &str,
) -> Result<CallDescriptor, DispatchError> {
    pipeline
        .plan(transcript)
        .ok_or_else(DispatchError::no_intent)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the result.
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config()?;
    let transcript = read_transcript(args.transcript.as_ref())?;

    let pipeline = Pipeline::new(KeywordIntentParser::new(), herald::dispatcher(&config)?);

    if args.dry_run {
        let descriptor = describe(&pipeline, &transcript)?;
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        return Ok(());
    }

    tracing::info!(endpoint = %config.api_url(), "Dispatching transcript");
    let result = pipeline.run(&transcript).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
