//! # Scaffold Scripts
//!
//! A small command-line toolbox for bootstrapping backend work on a new
//! machine.
//!
//! ## Features
//!
//! - **Environment Probe**: Reports which package managers and runtimes answer
//!   their version command, with install hints for the missing ones
//! - **Package Operations**: Runs a throwaway npm project and `pip list` to
//!   check the managers actually work
//! - **FastAPI Scaffold**: Writes a fixed backend skeleton and sets up its
//!   virtual environment
//! - **Dialog Smoke Test**: Pops a native hello-world dialog
//!
//! ## Example
//!
//! ```rust,no_run
//! use scaffold_scripts::prober::{Prober, ToolDetector, default_tools};
//!
//! # async fn run() {
//! let report = Prober::new(default_tools(), ToolDetector::new())
//!     .silent()
//!     .run()
//!     .await;
//! println!("available: {}", report.available.join(", "));
//! # }
//! ```

pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod handlers;
pub mod hello;
pub mod prober;
pub mod scaffold;

// Re-export commonly used types and functions
pub use error::{Result, ScaffoldError};
pub use handlers::{ProbeOptions, handle_fastapi, handle_hello, handle_probe};
use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn run_command(command: Commands, config: &Config) -> Result<()> {
    if !config.output.color {
        colored::control::set_override(false);
    }

    match command {
        Commands::Probe {
            format,
            skip_operations,
            timeout,
            only,
        } => {
            handle_probe(
                ProbeOptions {
                    format,
                    skip_operations,
                    timeout,
                    only,
                },
                config,
            )
            .await
        }
        Commands::Fastapi {
            path,
            dry_run,
            skip_venv,
            skip_install,
        } => handle_fastapi(path, dry_run, skip_venv, skip_install, config).await,
        Commands::Hello { no_dialog } => handle_hello(no_dialog).await,
    }
}
