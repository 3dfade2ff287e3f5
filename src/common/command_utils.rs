use log::debug;
use serde::Serialize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Result of a single external command.
///
/// A failed or timed-out command is still a value, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
}

impl CommandOutcome {
    fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
            timed_out: false,
        }
    }

    /// First line of stdout, trimmed
    pub fn first_line(&self) -> &str {
        first_line(&self.stdout)
    }
}

/// Run a program by name and wait for it, optionally bounded by `timeout`.
///
/// The child is killed if the timeout elapses.
pub async fn run_command(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
    timeout: Option<Duration>,
) -> CommandOutcome {
    debug!("Executing command: {} {}", program, args.join(" "));

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            debug!("Failed to spawn {}: {}", program, e);
            return CommandOutcome::failed(e.to_string());
        }
    };

    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(result) => result,
            Err(_) => {
                debug!("{} timed out after {:?}", program, limit);
                return CommandOutcome {
                    timed_out: true,
                    ..CommandOutcome::failed("Command timed out")
                };
            }
        },
        None => child.wait_with_output().await,
    };

    match output {
        Ok(output) => CommandOutcome {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            timed_out: false,
        },
        Err(e) => CommandOutcome::failed(e.to_string()),
    }
}

/// Split a command line into program and arguments
pub fn split_command_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// First line of the trimmed text, or an empty string
pub fn first_line(text: &str) -> &str {
    text.trim().lines().next().unwrap_or("").trim()
}
