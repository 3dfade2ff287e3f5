use crate::common::command_utils::{CommandOutcome, run_command};
use crate::config::types::ScaffoldConfig;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How to create and populate the project's virtual environment
#[derive(Debug, Clone)]
pub struct EnvironmentSetup {
    pub python: String,
    pub venv_dir: String,
    pub create_venv: bool,
    pub install_dependencies: bool,
}

/// `None` means the step was skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentOutcome {
    pub venv_created: Option<bool>,
    pub dependencies_installed: Option<bool>,
}

impl From<&ScaffoldConfig> for EnvironmentSetup {
    fn from(config: &ScaffoldConfig) -> Self {
        Self {
            python: config.python.clone(),
            venv_dir: config.venv_dir.clone(),
            create_venv: true,
            install_dependencies: true,
        }
    }
}

impl EnvironmentSetup {
    /// Run both steps inside `root`. Failures print a warning and never stop
    /// the scaffold.
    pub async fn run(&self, root: &Path) -> EnvironmentOutcome {
        let mut outcome = EnvironmentOutcome::default();

        if self.create_venv {
            println!("🐍 Creating Python virtual environment...");
            let created = step(
                "Creating virtual environment",
                &self.python,
                &["-m", "venv", self.venv_dir.as_str()],
                root,
            )
            .await;
            if !created {
                println!(
                    "{}",
                    "⚠️  Continuing without virtual environment...".yellow()
                );
            }
            outcome.venv_created = Some(created);
        }

        if self.install_dependencies {
            println!("📦 Installing dependencies...");
            // The child runs inside `root`, so a relative program path would
            // be resolved twice.
            let base = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
            let pip = base.join(pip_path(&self.venv_dir, cfg!(windows)));
            let installed = step(
                "Installing dependencies",
                &pip.to_string_lossy(),
                &["install", "-r", "requirements.txt"],
                root,
            )
            .await;
            if !installed {
                println!(
                    "{}",
                    "⚠️  You may need to manually install dependencies later".yellow()
                );
                println!("Run: pip install -r requirements.txt");
            }
            outcome.dependencies_installed = Some(installed);
        }

        outcome
    }
}

/// pip inside the virtual environment, relative to the project root
pub fn pip_path(venv_dir: &str, windows: bool) -> PathBuf {
    if windows {
        Path::new(venv_dir).join("Scripts").join("pip")
    } else {
        Path::new(venv_dir).join("bin").join("pip")
    }
}

/// Shell command that activates the virtual environment
pub fn activate_command(venv_dir: &str, windows: bool) -> String {
    if windows {
        format!("{}\\Scripts\\activate", venv_dir)
    } else {
        format!("source {}/bin/activate", venv_dir)
    }
}

async fn step(description: &str, program: &str, args: &[&str], cwd: &Path) -> bool {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("🔧 {}...", description));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = run_command(program, args, Some(cwd), None).await;
    spinner.finish_and_clear();

    report(description, &outcome)
}

fn report(description: &str, outcome: &CommandOutcome) -> bool {
    if !outcome.success {
        println!("{} Failed: {}", "❌".red(), description);
        println!("Error: {}", outcome.stderr.trim());
        warn!("{} failed", description);
        return false;
    }

    if !outcome.stdout.trim().is_empty() {
        println!("{}", outcome.stdout.trim_end());
    }
    debug!("{} succeeded", description);
    true
}
