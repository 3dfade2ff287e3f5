use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scaffold backend projects and probe the local toolchain")]
#[command(long_about = "A small CLI that writes a FastAPI backend skeleton, checks which package managers and runtimes are installed on this machine, and runs a native dialog smoke test.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check which package managers and runtimes are available
    Probe {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Skip the npm/pip create-use-delete cycle
        #[arg(long)]
        skip_operations: bool,

        /// Per-command timeout in seconds (overrides config)
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Only probe the named tools
        #[arg(long, value_delimiter = ',')]
        only: Option<Vec<String>>,
    },

    /// Generate a FastAPI backend project skeleton
    Fastapi {
        /// Directory to create the project in (overrides config, default: backend)
        #[arg(value_name = "PROJECT_DIR")]
        path: Option<PathBuf>,

        /// Print the files that would be written without touching disk
        #[arg(long)]
        dry_run: bool,

        /// Do not create a virtual environment
        #[arg(long)]
        skip_venv: bool,

        /// Do not install dependencies into the virtual environment
        #[arg(long)]
        skip_install: bool,
    },

    /// Show a native hello-world dialog and print confirmation
    Hello {
        /// Only print to the console
        #[arg(long)]
        no_dialog: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
