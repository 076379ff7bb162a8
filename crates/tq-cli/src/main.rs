//! Console front end for the TextQuest scenario engine.

mod commands;
mod input;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tq_engine::config::DEFAULT_SCENARIOS_ROOT;

#[derive(Parser)]
#[command(
    name = "textquest",
    about = "TextQuest: branching text adventures from plain-text scenario files",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. warn, debug, tq_engine=trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a scenario from the menu and play it (the default)
    Play {
        /// Directory whose subdirectories are scenarios
        #[arg(short, long, default_value = DEFAULT_SCENARIOS_ROOT)]
        root: PathBuf,

        /// Start this scenario immediately instead of showing the menu first
        #[arg(short, long)]
        scenario: Option<String>,

        /// Keep parsed branches in memory instead of re-reading files on each visit
        #[arg(long)]
        cache: bool,
    },

    /// List the available scenarios
    List {
        /// Directory whose subdirectories are scenarios
        #[arg(short, long, default_value = DEFAULT_SCENARIOS_ROOT)]
        root: PathBuf,
    },

    /// Print the parsed content of one branch
    Show {
        /// Scenario name
        scenario: String,

        /// Branch name, e.g. 1_2 (default: the entry branch)
        #[arg(short, long, default_value = "")]
        branch: String,

        /// Directory whose subdirectories are scenarios
        #[arg(short, long, default_value = DEFAULT_SCENARIOS_ROOT)]
        root: PathBuf,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let command = cli.command.unwrap_or(Commands::Play {
        root: PathBuf::from(DEFAULT_SCENARIOS_ROOT),
        scenario: None,
        cache: false,
    });

    let result = match command {
        Commands::Play {
            root,
            scenario,
            cache,
        } => commands::play::run(&root, scenario.as_deref(), cache),
        Commands::List { root } => commands::list::run(&root),
        Commands::Show {
            scenario,
            branch,
            root,
        } => commands::show::run(&root, &scenario, &branch),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
