use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use tally::models::config::CONFIG_FILE_NAME;
use tally::{Result, TallyConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tally")]
#[command(author = "Chris Cheng <chris.cheng@shopee.com>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Checklist reports and stub queues for markdown TODO files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (used only if it exists)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). TALLY_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the checklist into JSON records and a summary report
    Parse(tally::cli::parse::ParseArgs),

    /// Generate stub queues (diagrams, playbooks, ...) from open items
    Stubs(tally::cli::stubs::StubsArgs),

    /// Print status counts for the checklist
    Summary(tally::cli::summary::SummaryArgs),

    /// Write the default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    match cli.command {
        Commands::Init { force } => {
            tally::cli::init::run(&config_path, force)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "tally", &mut io::stdout());
        }

        Commands::Parse(args) => {
            let config = TallyConfig::load(&config_path)?;
            tally::cli::parse::run(args, &config)?;
        }

        Commands::Stubs(args) => {
            let config = TallyConfig::load(&config_path)?;
            tally::cli::stubs::run(args, &config)?;
        }

        Commands::Summary(args) => {
            let config = TallyConfig::load(&config_path)?;
            tally::cli::summary::run(args, &config)?;
        }
    }

    Ok(())
}
