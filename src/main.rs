//! Lecture Tutor - keyword-matched answers with spoken narration.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lecture_tutor::api::{ServerError, TutorServer};
use lecture_tutor::config::{ConfigError, ConfigLoader, PORT_ENV};
use lecture_tutor::knowledge::{KnowledgeBase, KnowledgeError};
use lecture_tutor::tutor::TutorService;

#[derive(Parser)]
#[command(
    name = "lecture-tutor",
    about = "Answer student questions with narrated explanations",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Config file to use instead of the default search paths.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Port to listen on; overrides the config file and $PORT.
        #[arg(short, long)]
        port: Option<u16>,
        /// Knowledge base JSON file; overrides the config file.
        #[arg(short, long)]
        knowledge: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
    #[error(transparent)]
    Server(#[from] ServerError),
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbosity: u8) {
    let level = level_for(verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

async fn serve(
    config_path: Option<PathBuf>,
    port: Option<u16>,
    knowledge_path: Option<PathBuf>,
) -> Result<(), StartupError> {
    let loader = config_path.map_or_else(ConfigLoader::new, ConfigLoader::with_path);
    let mut config = loader.load()?;

    config
        .server
        .apply_port_env(std::env::var(PORT_ENV).ok().as_deref());
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(path) = knowledge_path {
        config.knowledge.path = path;
    }

    // A missing or malformed knowledge base is fatal.
    let knowledge = Arc::new(KnowledgeBase::load(&config.knowledge.path)?);
    let tutor = Arc::new(TutorService::from_config(&config, knowledge));

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received Ctrl-C");
                shutdown.cancel();
            }
            Err(e) => tracing::warn!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });

    TutorServer::new(tutor)
        .with_config(config.server)
        .with_cancel(cancel)
        .run()
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve {
            config,
            port,
            knowledge,
        } => serve(config, port, knowledge).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Lecture tutor failed to start");
            ExitCode::FAILURE
        }
    }
}
