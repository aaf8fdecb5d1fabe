//! Study Notes - CLI
//!
//! Stores a notes file for a user and turns it into flashcards.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use study_notes::flashcards::build_flashcard_prompt;
use study_notes::llm::HttpTextGenerator;
use study_notes::{Config, FlashcardGenerator, NoteStore, User};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "study-notes")]
#[command(about = "Turn study notes into flashcards with an LLM")]
struct Cli {
    /// Path to the YAML config file (default: ./config.yaml)
    #[arg(short, long, env = "STUDY_NOTES_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate flashcards from a notes file and print them as JSON
    Generate {
        /// Notes file, or "-" for stdin
        file: PathBuf,

        /// Numeric user id owning the notes
        #[arg(long, default_value = "1")]
        user_id: u64,

        /// Display name of the user
        #[arg(long, default_value = "student")]
        username: String,

        /// Note name (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Study subject (overrides config.yaml)
        #[arg(long)]
        subject: Option<String>,
    },

    /// Print the prompt that would be sent for a notes file
    Prompt {
        /// Notes file, or "-" for stdin
        file: PathBuf,

        /// Study subject (overrides config.yaml)
        #[arg(long)]
        subject: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,study_notes=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_yaml_and_env(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            file,
            user_id,
            username,
            name,
            subject,
        } => {
            let user = User::new(user_id, username);
            let name = name.unwrap_or_else(|| note_name_from_path(&file));
            let subject = subject.unwrap_or(config.subject.clone());
            run_generate(&config, &user, &name, &file, &subject).await
        }
        Commands::Prompt { file, subject } => {
            let content = read_notes(&file)?;
            let subject = subject.unwrap_or(config.subject);
            println!("{}", build_flashcard_prompt(&subject, &content));
            Ok(())
        }
    }
}

async fn run_generate(
    config: &Config,
    user: &User,
    name: &str,
    file: &Path,
    subject: &str,
) -> Result<()> {
    if config.llm.is_disabled() {
        anyhow::bail!("LLM backend is disabled (llm.url / LLM_URL)");
    }
    let llm = HttpTextGenerator::new(&config.llm)?;

    let content = read_notes(file)?;
    let mut store = NoteStore::new();
    store.add(user, name, content)?;
    let note = store.get(user, name)?;

    let set = FlashcardGenerator::new(&store)
        .with_subject(subject)
        .generate(user, note, &llm)
        .await?;

    tracing::info!("Generated {} flashcards for '{}'", set.len(), name);
    println!("{}", serde_json::to_string_pretty(&set)?);
    Ok(())
}

fn read_notes(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read notes from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read notes file {}", path.display()))
}

fn note_name_from_path(path: &Path) -> String {
    if path == Path::new("-") {
        return "stdin".to_string();
    }
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string())
}
