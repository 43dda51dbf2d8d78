//! Terminal front end for the Sombraportal adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sombra",
    about = "Sombraportal: a point-and-click adventure for practising Spanish",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample game_data.json into a new directory
    Init {
        /// Directory to create
        dir: PathBuf,
    },

    /// Load and validate a world file
    Check {
        /// World configuration file
        #[arg(short, long, default_value = "game_data.json")]
        world: PathBuf,
    },

    /// List rooms and their objects
    Rooms {
        /// World configuration file
        #[arg(short, long, default_value = "game_data.json")]
        world: PathBuf,
    },

    /// Play from the terminal, one command or directive per line
    Play {
        /// World configuration file
        #[arg(short, long, default_value = "game_data.json")]
        world: PathBuf,

        /// Start in this room instead of the configured start room
        #[arg(short, long)]
        room: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { dir } => commands::init::run(&dir),
        Commands::Check { world } => commands::check::run(&world),
        Commands::Rooms { world } => commands::rooms::run(&world),
        Commands::Play { world, room } => commands::play::run(&world, room.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
