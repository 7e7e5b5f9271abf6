/// Main entry point for the FocusFlow server
///
/// This file sets up logging, parses command line arguments, and starts the
/// MCP server. Habit state is seeded fresh on every start; only the sign-in
/// flag survives under the state directory.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use focusflow::FocusFlowServer;

/// Find a writable state directory for the sign-in flag
fn default_state_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let potential_dirs = [
        dirs::data_dir().map(|mut p| {
            p.push("focusflow");
            p
        }),
        dirs::home_dir().map(|mut p| {
            p.push(".focusflow");
            p
        }),
        std::env::current_dir().ok().map(|mut p| {
            p.push(".focusflow");
            p
        }),
    ];

    for dir in potential_dirs.iter().flatten() {
        if std::fs::create_dir_all(dir).is_ok() {
            return Ok(dir.clone());
        }
    }

    // Last resort: a temp directory, losing the flag across reboots
    let mut temp = std::env::temp_dir();
    temp.push("focusflow");
    std::fs::create_dir_all(&temp)?;
    tracing::warn!("Using temporary directory for session state: {}", temp.display());
    Ok(temp)
}

/// Command line arguments for the FocusFlow server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the persisted sign-in flag
    /// If not provided, uses a default location in the user's data directory
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Seed for the demo data generator
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("focusflow={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting FocusFlow server");

    let state_dir = match args.state_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            dir
        }
        None => default_state_dir()?,
    };

    info!("Session state at: {}", state_dir.display());

    let server = FocusFlowServer::new(state_dir, args.seed);
    server.run().await?;

    info!("FocusFlow server shutdown complete");
    Ok(())
}
