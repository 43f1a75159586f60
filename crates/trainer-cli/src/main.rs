//! Terminal front end for the prompt-writing trainer.
//!
//! Owns all presentation concerns the core deliberately doesn't: session
//! persistence, API-key storage, and rendering. The core pipeline only
//! ever sees (scenario, tier, prompt) triples.

mod render;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use feedback::{
    clear_session_state, load_session_state, save_session_state, ClientConfig, Difficulty,
    KeyValidation, PromptTrainer, SessionState,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "prompt-trainer",
    version,
    about = "Practice writing AI prompts and get scored feedback"
)]
struct Cli {
    /// Directory holding session state and the stored API key
    #[arg(long, default_value = ".prompt-trainer")]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a new scenario for a difficulty tier
    Scenario {
        /// beginner, intermediate, or advanced (anything else means beginner)
        #[arg(long, default_value = "beginner")]
        tier: String,
    },
    /// Score a prompt against the current scenario
    Analyze {
        /// The prompt text; read from stdin when omitted
        #[arg(long)]
        prompt: Option<String>,
        /// Override the session's difficulty tier
        #[arg(long)]
        tier: Option<String>,
        /// Override the session's scenario
        #[arg(long)]
        scenario: Option<String>,
    },
    /// Store the API key forwarded to the scoring service
    SetKey {
        key: String,
        /// Check the key against the service before storing it
        #[arg(long)]
        validate: bool,
    },
    /// Remove the stored API key
    ClearKey,
    /// Check whether the scoring service is reachable
    Health,
    /// Forget the current scenario and prompt
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    std::fs::create_dir_all(&cli.state_dir)
        .with_context(|| format!("failed to create state dir {}", cli.state_dir.display()))?;

    match cli.command {
        Command::Scenario { tier } => scenario(&cli.state_dir, &tier),
        Command::Analyze {
            prompt,
            tier,
            scenario,
        } => analyze(&cli.state_dir, prompt, tier, scenario).await,
        Command::SetKey { key, validate } => set_key(&cli.state_dir, &key, validate).await,
        Command::ClearKey => clear_key(&cli.state_dir),
        Command::Health => health(&cli.state_dir).await,
        Command::Reset => reset(&cli.state_dir),
    }
}

fn session_path(state_dir: &Path) -> PathBuf {
    state_dir.join("session.json")
}

fn key_path(state_dir: &Path) -> PathBuf {
    state_dir.join("api_key")
}

/// Client configuration: environment defaults, with a stored key (if any)
/// taking precedence.
fn build_config(state_dir: &Path) -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Ok(key) = std::fs::read_to_string(key_path(state_dir)) {
        let key = key.trim();
        if !key.is_empty() {
            config = config.with_api_key(key);
        }
    }
    config
}

fn load_session(state_dir: &Path) -> Result<SessionState> {
    Ok(load_session_state(&session_path(state_dir))
        .context("failed to load session state")?
        .unwrap_or_default())
}

fn scenario(state_dir: &Path, tier: &str) -> Result<()> {
    let tier = Difficulty::parse(tier);
    let trainer = PromptTrainer::new(build_config(state_dir))?;
    let scenario = trainer.request_scenario(tier);

    println!("[{tier}] {scenario}");
    println!();
    println!("Write your prompt, then run: prompt-trainer analyze");

    let mut session = load_session(state_dir)?;
    session.difficulty = tier;
    session.scenario = Some(scenario.to_string());
    session.prompt = None;
    save_session_state(&session, &session_path(state_dir))
        .context("failed to save session state")?;
    Ok(())
}

async fn analyze(
    state_dir: &Path,
    prompt: Option<String>,
    tier: Option<String>,
    scenario: Option<String>,
) -> Result<()> {
    let mut session = load_session(state_dir)?;
    let tier = tier
        .map(|t| Difficulty::parse(&t))
        .unwrap_or(session.difficulty);
    let scenario = match scenario.or_else(|| session.scenario.clone()) {
        Some(s) => s,
        None => bail!("no scenario drawn yet; run `prompt-trainer scenario` first"),
    };
    let prompt = match prompt {
        Some(p) => p,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read prompt from stdin")?;
            buf
        }
    };
    if prompt.trim().is_empty() {
        bail!("please write a prompt before requesting feedback");
    }

    let trainer = PromptTrainer::new(build_config(state_dir))?;
    debug!(%tier, "requesting feedback");
    let contract = trainer.request_feedback(&scenario, tier, &prompt).await;

    session.difficulty = tier;
    session.scenario = Some(scenario);
    session.prompt = Some(prompt.trim().to_string());
    save_session_state(&session, &session_path(state_dir))
        .context("failed to save session state")?;

    print!("{}", render::render_feedback(&contract));
    Ok(())
}

async fn set_key(state_dir: &Path, key: &str, validate: bool) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        bail!("refusing to store an empty API key");
    }

    if validate {
        let trainer = PromptTrainer::new(build_config(state_dir))?;
        match trainer.client().validate_api_key(key).await {
            KeyValidation::Valid => println!("API key validated successfully."),
            KeyValidation::Inconclusive => {
                println!("API key may be invalid: the server returned a fallback response.");
            }
            KeyValidation::Rejected(message) => bail!("API key rejected: {message}"),
            KeyValidation::Failed(message) => {
                println!("Could not validate the key ({message}); storing it anyway.");
            }
        }
    }

    std::fs::write(key_path(state_dir), key).context("failed to store API key")?;
    println!("API key saved.");
    Ok(())
}

fn clear_key(state_dir: &Path) -> Result<()> {
    let path = key_path(state_dir);
    if path.exists() {
        std::fs::remove_file(&path).context("failed to remove API key")?;
    }
    println!("API key removed. Feedback will use the local heuristic unless the service accepts keyless requests.");
    Ok(())
}

async fn health(state_dir: &Path) -> Result<()> {
    let trainer = PromptTrainer::new(build_config(state_dir))?;
    if trainer.client().check_health().await {
        println!("Scoring service is reachable.");
    } else {
        println!("Scoring service is unreachable; feedback will fall back to local analysis.");
    }
    Ok(())
}

fn reset(state_dir: &Path) -> Result<()> {
    clear_session_state(&session_path(state_dir)).context("failed to clear session state")?;
    println!("Session cleared.");
    Ok(())
}
