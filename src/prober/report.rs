use super::detector::ToolStatus;
use super::operations::OperationCheck;
use super::platform::PlatformInfo;
use crate::error::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

/// Everything one probe run found
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub platform: PlatformInfo,
    pub tools: Vec<ToolStatus>,
    pub available: Vec<String>,
    pub operations: Vec<OperationCheck>,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl ProbeReport {
    pub fn new(
        platform: PlatformInfo,
        tools: Vec<ToolStatus>,
        operations: Vec<OperationCheck>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            available: available_names(&tools),
            platform,
            tools,
            operations,
            recommendations,
            generated_at: Utc::now(),
        }
    }

    pub fn missing(&self) -> impl Iterator<Item = &ToolStatus> {
        self.tools.iter().filter(|t| !t.available)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Names of available tools, in table order
pub fn available_names(statuses: &[ToolStatus]) -> Vec<String> {
    statuses
        .iter()
        .filter(|s| s.available)
        .map(|s| s.name.clone())
        .collect()
}

pub fn print_header(platform: &PlatformInfo) {
    println!("{}", "🚀 Cross-platform Package Manager Test".bold());
    println!("{}", "=".repeat(50));
    println!("🖥️  Platform: {} {}", platform.display_name(), platform.arch);
    println!("🦀 scaffold: {}", platform.cli_version);
    if let Some(ref cwd) = platform.working_directory {
        println!("📂 Working Directory: {}", cwd.display());
    }
    println!();
}

pub fn print_checking(name: &str) {
    println!("🔍 Checking {}...", name);
}

pub fn print_tool_status(status: &ToolStatus) {
    if status.available {
        println!(
            "  {} {}: {}",
            "✅".green(),
            status.name,
            status.version_line.as_deref().unwrap_or("")
        );
    } else {
        println!("  {} {}: {}", "❌".red(), status.name, "Not found".red());
        if let Some(ref hint) = status.install_hint {
            println!("     Install with: {}", hint);
        }
    }
}

pub fn print_summary(available: &[String]) {
    println!(
        "\n{} Available package managers: {}",
        "✅".green(),
        available.join(", ")
    );
}

pub fn print_recommendations(recommendations: &[String]) {
    println!("\n{}", "🎯 Platform-specific recommendations:".bold());
    for line in recommendations {
        println!("  • {}", line);
    }
}

pub fn print_footer() {
    println!(
        "\n{} Cross-platform package manager test completed!",
        "✅".green()
    );
}
