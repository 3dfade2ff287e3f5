//! Native dialog smoke test.
//!
//! The dialog is drawn by whatever helper the platform ships with; if none
//! of them works the console lines are still printed.

use crate::common::command_utils::run_command;
use colored::Colorize;
use log::{debug, warn};
use std::path::Path;

pub const DIALOG_TITLE: &str = "Scaffold Scripts CLI Test";

/// Body text shown in the dialog
pub fn dialog_message(cwd: &Path) -> String {
    format!(
        "Hello World! 🚀\n\nScript executed successfully from Scaffold Scripts CLI!\n\nWorking directory: {}",
        cwd.display()
    )
}

/// Candidate (program, args) pairs that show an info dialog on `os`
pub fn dialog_commands(os: &str, title: &str, message: &str) -> Vec<(String, Vec<String>)> {
    match os {
        "macos" => vec![(
            "osascript".to_string(),
            vec![
                "-e".to_string(),
                format!(
                    "display dialog \"{}\" with title \"{}\" buttons {{\"OK\"}} default button \"OK\"",
                    applescript_escape(message),
                    applescript_escape(title)
                ),
            ],
        )],
        "windows" => vec![(
            "powershell".to_string(),
            vec![
                "-NoProfile".to_string(),
                "-Command".to_string(),
                format!(
                    "Add-Type -AssemblyName PresentationFramework; [System.Windows.MessageBox]::Show('{}', '{}') | Out-Null",
                    message.replace('\'', "''"),
                    title.replace('\'', "''")
                ),
            ],
        )],
        _ => vec![
            (
                "zenity".to_string(),
                vec![
                    "--info".to_string(),
                    format!("--title={}", title),
                    format!("--text={}", message),
                ],
            ),
            (
                "kdialog".to_string(),
                vec![
                    "--title".to_string(),
                    title.to_string(),
                    "--msgbox".to_string(),
                    message.to_string(),
                ],
            ),
        ],
    }
}

fn applescript_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Show the dialog (unless `show_dialog` is false) and print confirmation.
/// Returns whether a dialog was displayed.
pub async fn run_hello(show_dialog: bool) -> bool {
    let cwd = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());

    let displayed = if show_dialog {
        show_info_dialog(&cwd).await
    } else {
        false
    };

    println!("{} Script executed successfully!", "✅".green());
    println!("📁 Working directory: {}", cwd.display());
    if displayed {
        println!("🎉 Native alert box displayed");
    } else if show_dialog {
        println!(
            "{}",
            "⚠️  No native dialog helper available, console output only".yellow()
        );
    }

    displayed
}

async fn show_info_dialog(cwd: &Path) -> bool {
    let message = dialog_message(cwd);
    for (program, args) in dialog_commands(std::env::consts::OS, DIALOG_TITLE, &message) {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let outcome = run_command(&program, &args, None, None).await;
        if outcome.success {
            debug!("Dialog shown with {}", program);
            return true;
        }
        debug!("{} could not show a dialog: {}", program, outcome.stderr.trim());
    }
    warn!("No dialog helper succeeded");
    false
}
