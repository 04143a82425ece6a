//! flashdeck CLI — study flashcards in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "flashdeck", version, about = "Terminal flashcard trainer")]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory the deck is persisted in
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Base URL serving /cards.json
    #[arg(long, global = true, conflicts_with = "no_remote")]
    pub remote: Option<String>,

    /// Skip the remote fetch even if one is configured
    #[arg(long, global = true)]
    pub no_remote: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Study the deck interactively
    Study,

    /// Print the resolved deck with its scores
    List,

    /// Delete the persisted deck
    Reset,

    /// Create a starter config and a sample cards.json
    Init,
}

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flashdeck=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Study => commands::study::execute(&cli.global).await,
        Commands::List => commands::list::execute(&cli.global).await,
        Commands::Reset => commands::reset::execute(&cli.global),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
