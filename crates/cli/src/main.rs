use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use xofa_core::logging::{self, LoggingGuard, init_logging};
use xofa_core::{Config, ThemeVariant};
use xofa_providers::CompletionClient;
use xofa_ui::App;

/// Xofa - an Islamic AI assistant in your terminal
#[derive(Parser, Debug)]
#[command(name = "xofa")]
#[command(about = "Terminal chat client for the Xofa assistant, backed by Gemini", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to xofa.toml (default: ./xofa.toml)
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Model to use instead of the configured one
    #[arg(short, long, value_name = "MODEL", global = true)]
    model: Option<String>,

    /// Theme to start with (classic, ocean, midnight, sky)
    #[arg(short, long, value_name = "THEME", global = true)]
    theme: Option<ThemeVariant>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Start the interactive chat (default)
    Chat,
    /// Ask a single question without history and print the reply
    Ask {
        /// Question to send
        #[arg(required = true, value_name = "PROMPT")]
        prompt: String,
    },
    /// List the available themes
    Themes,
    /// Print an example configuration file
    Config,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Chat);

    match command {
        Commands::Themes => return cmd_themes(),
        Commands::Config => {
            print!("{}", Config::example());
            return Ok(());
        }
        Commands::Chat | Commands::Ask { .. } => {}
    }

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from("xofa.toml"));
    let config = load_config(&config_path, cli.model.as_deref())?;
    let interactive = command == Commands::Chat;
    let _guard = setup_logging(&config, interactive, cli.verbose)?;

    if cli.verbose && !interactive {
        println!("{} Using config: {}", "Info:".blue().bold(), config_path.display());
        println!("{} Model: {}", "Info:".blue().bold(), config.provider.model().cyan());
    }

    let client = CompletionClient::from_config(&config.provider).context("Failed to create provider")?;

    match command {
        Commands::Ask { prompt } => cmd_ask(&client, &prompt).await,
        _ => cmd_chat(client, cli.theme.unwrap_or(config.ui.theme)).await,
    }
}

/// Load the config file (or defaults) and apply command-line overrides
fn load_config(path: &Path, model: Option<&str>) -> Result<Config> {
    let mut config = Config::load_or_default(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    if let Some(model) = model {
        if model.trim().is_empty() {
            anyhow::bail!("--model must not be empty");
        }
        config.provider = config.provider.with_model(model);
    }

    Ok(config)
}

/// Initialize tracing; the chat screen owns the terminal so stderr stays quiet there
fn setup_logging(config: &Config, interactive: bool, verbose: bool) -> Result<LoggingGuard> {
    let mut logging_config = logging::LoggingConfig::from(config.logging.clone());
    if verbose {
        logging_config = logging_config.with_level("debug");
    }
    if interactive {
        logging_config = logging_config.without_stderr();
    }

    init_logging(Some(logging_config)).context("Failed to initialize logging")
}

/// Start the interactive chat
async fn cmd_chat(client: CompletionClient, theme: ThemeVariant) -> Result<()> {
    let mut app = App::new(client, theme);
    xofa_ui::run(&mut app).await.context("Terminal UI failed")
}

/// Send one prompt with no prior turns and print the reply
async fn cmd_ask(client: &CompletionClient, prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        anyhow::bail!("Prompt must not be blank");
    }

    match client.complete(&[], prompt).await {
        Ok(reply) => {
            println!("{}", reply);
            Ok(())
        }
        Err(err) => anyhow::bail!("{}", err.user_message()),
    }
}

/// List theme names with their labels
fn cmd_themes() -> Result<()> {
    println!("{}", "Xofa Themes".green().bold().underline());
    println!();
    for variant in ThemeVariant::VALUES {
        println!("  {:<10} {}", variant.as_str().cyan(), variant.label());
    }
    Ok(())
}
