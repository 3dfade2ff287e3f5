//! # FastAPI Scaffold
//!
//! Writes a fixed backend skeleton and then tries to give it a virtual
//! environment with its dependencies installed.

pub mod generator;
pub mod layout;
pub mod venv;

pub use generator::{GeneratedTree, write_layout};
pub use layout::{ScaffoldLayout, TemplateValues};
pub use venv::{EnvironmentOutcome, EnvironmentSetup};

use crate::error::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Result of `scaffold_fastapi`
#[derive(Debug, Clone)]
pub struct ScaffoldSummary {
    pub root: PathBuf,
    pub tree: Option<GeneratedTree>,
    pub environment: EnvironmentOutcome,
}

/// Generate the project under `root` and set up its environment.
///
/// With `dry_run` nothing is written and no commands run.
pub async fn scaffold_fastapi(
    root: &Path,
    values: &TemplateValues,
    setup: &EnvironmentSetup,
    dry_run: bool,
) -> Result<ScaffoldSummary> {
    println!("🚀 Creating Python FastAPI project...");
    let layout = ScaffoldLayout::fastapi(values)?;

    if dry_run {
        generator::print_plan(root, &layout);
        return Ok(ScaffoldSummary {
            root: root.to_path_buf(),
            tree: None,
            environment: EnvironmentOutcome::default(),
        });
    }

    println!("📁 Creating project structure...");
    let tree = write_layout(root, &layout)?;
    let environment = setup.run(root).await;

    print_next_steps(root, &setup.venv_dir);

    Ok(ScaffoldSummary {
        root: root.to_path_buf(),
        tree: Some(tree),
        environment,
    })
}

fn print_next_steps(root: &Path, venv_dir: &str) {
    let location = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    println!(
        "{} Python FastAPI project created successfully!",
        "✅".green()
    );
    println!("📁 Project location: {}", location.display());
    println!("🔧 To start the server:");
    println!("   {}", venv::activate_command(venv_dir, cfg!(windows)));
    println!("   uvicorn app.main:app --reload");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn no_env() -> EnvironmentSetup {
        EnvironmentSetup {
            python: "python".to_string(),
            venv_dir: "venv".to_string(),
            create_venv: false,
            install_dependencies: false,
        }
    }

    #[tokio::test]
    async fn dry_run_touches_nothing() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("backend");
        let summary = scaffold_fastapi(&root, &TemplateValues::default(), &no_env(), true)
            .await
            .unwrap();
        assert!(summary.tree.is_none());
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn writes_project_without_environment() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("backend");
        let summary = scaffold_fastapi(&root, &TemplateValues::default(), &no_env(), false)
            .await
            .unwrap();
        let tree = summary.tree.unwrap();
        assert_eq!(tree.files.len(), 14);
        assert!(root.join("app/api/v1/router.py").is_file());
        assert_eq!(summary.environment, EnvironmentOutcome::default());
    }
}
