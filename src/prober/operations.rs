//! Create/use/delete cycle against npm and pip.
//!
//! Each step's outcome is printed and recorded; a failed step never aborts
//! the probe. The npm scratch project lives in a `tempfile` directory, so it
//! is removed whether or not the install succeeded.

use super::detector::ToolDetector;
use crate::common::command_utils::run_command;
use colored::Colorize;
use log::{debug, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

const NPM_PROJECT_PREFIX: &str = "test-npm-project";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationCheck {
    pub manager: String,
    pub step: String,
    pub success: bool,
}

impl OperationCheck {
    fn new(manager: &str, step: &str, success: bool) -> Self {
        Self {
            manager: manager.to_string(),
            step: step.to_string(),
            success,
        }
    }
}

/// Which binaries to exercise and where to put the scratch project
#[derive(Debug, Clone)]
pub struct PackageOperations {
    pub npm: String,
    pub pip: String,
    pub base_dir: PathBuf,
    pub verbose_output: bool,
}

impl PackageOperations {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            npm: "npm".to_string(),
            pip: "pip".to_string(),
            base_dir: base_dir.into(),
            verbose_output: true,
        }
    }

    /// Run the npm and pip checks for whichever managers are available
    pub async fn run(&self, detector: &mut ToolDetector) -> Vec<OperationCheck> {
        self.say(&format!("\n{}", "📦 Testing package operations...".bold()));

        let mut checks = Vec::new();

        if detector.is_available(&self.npm).await {
            checks.extend(self.npm_cycle(detector).await);
        } else {
            debug!("Skipping npm operations, {} not available", self.npm);
        }

        if detector.is_available(&self.pip).await {
            self.say("  Testing pip...");
            let timeout = Some(detector.config().timeout);
            let listed = run_command(&self.pip, &["list"], None, timeout).await;
            self.report_step("pip list", listed.success);
            checks.push(OperationCheck::new("pip", "list", listed.success));
        } else {
            debug!("Skipping pip operations, {} not available", self.pip);
        }

        checks
    }

    async fn npm_cycle(&self, detector: &ToolDetector) -> Vec<OperationCheck> {
        self.say("  Testing npm...");
        let mut checks = Vec::new();
        let timeout = Some(detector.config().timeout);

        let project = match tempfile::Builder::new()
            .prefix(NPM_PROJECT_PREFIX)
            .tempdir_in(&self.base_dir)
        {
            Ok(dir) => dir,
            Err(e) => {
                warn!(
                    "Could not create npm scratch project in {}: {}",
                    self.base_dir.display(),
                    e
                );
                checks.push(OperationCheck::new("npm", "create project", false));
                return checks;
            }
        };
        debug!("Created npm scratch project at {}", project.path().display());

        let init = run_command(&self.npm, &["init", "-y"], Some(project.path()), timeout).await;
        self.report_step("npm init", init.success);
        checks.push(OperationCheck::new("npm", "init", init.success));

        if init.success {
            let install = run_command(
                &self.npm,
                &["install", "lodash", "--save"],
                Some(project.path()),
                timeout,
            )
            .await;
            self.report_step("npm install", install.success);
            checks.push(OperationCheck::new("npm", "install", install.success));
        }

        cleanup(project);
        checks
    }

    fn report_step(&self, label: &str, success: bool) {
        if success {
            self.say(&format!("    {} {} successful", "✅".green(), label));
        } else {
            self.say(&format!("    {} {} failed", "❌".red(), label));
        }
    }

    fn say(&self, line: &str) {
        if self.verbose_output {
            println!("{}", line);
        }
    }
}

/// Best-effort removal of the scratch project
fn cleanup(project: tempfile::TempDir) {
    let path = project.path().to_path_buf();
    if let Err(e) = project.close() {
        warn!("Failed to remove {}: {}", path.display(), e);
    }
}

/// Scratch project directories left under `dir`
pub fn leftover_projects(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| {
                    path.file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.starts_with(NPM_PROJECT_PREFIX))
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn fake_manager(dir: &Path, name: &str, script: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn quiet_ops(base: &Path, bin: &Path, npm_script: &str) -> PackageOperations {
        PackageOperations {
            npm: fake_manager(bin, "npm", npm_script),
            pip: bin.join("missing-pip").to_string_lossy().into_owned(),
            base_dir: base.to_path_buf(),
            verbose_output: false,
        }
    }

    #[tokio::test]
    async fn npm_project_removed_when_install_fails() {
        let base = tempdir().unwrap();
        let bin = tempdir().unwrap();
        let ops = quiet_ops(
            base.path(),
            bin.path(),
            r#"case "$1" in
  --version) echo 10.2.0 ;;
  init) echo '{}' > package.json ;;
  *) exit 1 ;;
esac"#,
        );

        let checks = ops.run(&mut ToolDetector::new()).await;

        assert_eq!(
            checks,
            vec![
                OperationCheck::new("npm", "init", true),
                OperationCheck::new("npm", "install", false),
            ]
        );
        assert!(leftover_projects(base.path()).is_empty());
    }

    #[tokio::test]
    async fn npm_project_removed_when_install_succeeds() {
        let base = tempdir().unwrap();
        let bin = tempdir().unwrap();
        let ops = quiet_ops(
            base.path(),
            bin.path(),
            r#"case "$1" in
  --version) echo 10.2.0 ;;
  init) echo '{}' > package.json ;;
  install) mkdir -p node_modules/lodash ;;
esac"#,
        );

        let checks = ops.run(&mut ToolDetector::new()).await;

        assert!(checks.iter().all(|c| c.success));
        assert_eq!(checks.len(), 2);
        assert!(leftover_projects(base.path()).is_empty());
    }

    #[tokio::test]
    async fn failed_init_skips_install() {
        let base = tempdir().unwrap();
        let bin = tempdir().unwrap();
        let ops = quiet_ops(
            base.path(),
            bin.path(),
            r#"[ "$1" = "--version" ] && echo 10.2.0 && exit 0
exit 1"#,
        );

        let checks = ops.run(&mut ToolDetector::new()).await;

        assert_eq!(checks, vec![OperationCheck::new("npm", "init", false)]);
        assert!(leftover_projects(base.path()).is_empty());
    }

    #[tokio::test]
    async fn unavailable_managers_produce_no_checks() {
        let base = tempdir().unwrap();
        let ops = PackageOperations {
            npm: "scaffold-missing-npm".to_string(),
            pip: "scaffold-missing-pip".to_string(),
            base_dir: base.path().to_path_buf(),
            verbose_output: false,
        };
        assert!(ops.run(&mut ToolDetector::new()).await.is_empty());
    }

    #[tokio::test]
    async fn pip_list_is_recorded() {
        let base = tempdir().unwrap();
        let bin = tempdir().unwrap();
        let ops = PackageOperations {
            npm: "scaffold-missing-npm".to_string(),
            pip: fake_manager(bin.path(), "pip", "exit 0"),
            base_dir: base.path().to_path_buf(),
            verbose_output: false,
        };
        let checks = ops.run(&mut ToolDetector::new()).await;
        assert_eq!(checks, vec![OperationCheck::new("pip", "list", true)]);
    }
}
