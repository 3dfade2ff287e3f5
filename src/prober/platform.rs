use serde::Serialize;
use std::path::PathBuf;

/// Where the probe ran
#[derive(Debug, Clone, Serialize)]
pub struct PlatformInfo {
    pub os: String,
    pub family: String,
    pub arch: String,
    pub cli_version: String,
    pub working_directory: Option<PathBuf>,
}

impl PlatformInfo {
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            family: std::env::consts::FAMILY.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cli_version: crate::VERSION.to_string(),
            working_directory: std::env::current_dir().ok(),
        }
    }

    pub fn display_name(&self) -> &str {
        match self.os.as_str() {
            "macos" => "macOS",
            "linux" => "Linux",
            "windows" => "Windows",
            other => other,
        }
    }
}

/// Package management advice for an OS as reported by `std::env::consts::OS`
pub fn recommendations_for(os: &str) -> Vec<&'static str> {
    match os {
        "windows" => vec![
            "Use PowerShell or Command Prompt",
            "Consider Windows Package Manager (winget)",
            "Use Chocolatey for package management",
        ],
        "linux" => vec![
            "Use your distribution's package manager (apt, yum, etc.)",
            "Consider using Snap or Flatpak",
        ],
        "macos" => vec![
            "Use Homebrew for package management",
            "Consider MacPorts as alternative",
        ],
        _ => Vec::new(),
    }
}
