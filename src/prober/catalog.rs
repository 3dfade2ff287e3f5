use crate::common::command_utils::split_command_line;
use crate::config::types::{ProbeConfig, ToolEntry};
use log::warn;
use serde::Serialize;

/// One row of the probe table: how to ask a tool for its version and what to
/// tell the user when it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSpec {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    pub install_hint: Option<String>,
}

impl ToolSpec {
    pub fn new(name: &str, command: &str, install_hint: Option<&str>) -> Option<Self> {
        let (program, args) = split_command_line(command)?;
        Some(Self {
            name: name.to_string(),
            program: program.to_string(),
            args: args.into_iter().map(str::to_string).collect(),
            install_hint: install_hint.map(str::to_string),
        })
    }

    /// The version command as typed on a shell
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TryFrom<&ToolEntry> for ToolSpec {
    type Error = String;

    fn try_from(entry: &ToolEntry) -> Result<Self, Self::Error> {
        ToolSpec::new(&entry.name, &entry.command, entry.install_hint.as_deref())
            .ok_or_else(|| format!("tool '{}' has an empty command", entry.name))
    }
}

const DEFAULT_TOOLS: &[(&str, &str, &str)] = &[
    ("Node.js", "node --version", "https://nodejs.org/"),
    ("npm", "npm --version", "Comes with Node.js"),
    ("Python", "python --version", "https://python.org/"),
    ("pip", "pip --version", "Comes with Python"),
    ("Git", "git --version", "https://git-scm.com/"),
    (".NET", "dotnet --version", "https://dotnet.microsoft.com/"),
    ("Docker", "docker --version", "https://docker.com/"),
    ("Yarn", "yarn --version", "npm install -g yarn"),
    ("pnpm", "pnpm --version", "npm install -g pnpm"),
];

/// Built-in probe table, in output order
pub fn default_tools() -> Vec<ToolSpec> {
    DEFAULT_TOOLS
        .iter()
        .filter_map(|(name, command, hint)| ToolSpec::new(name, command, Some(hint)))
        .collect()
}

/// Probe table after applying config: defaults (unless replaced) followed by
/// the configured extras. Entries with an empty command are skipped.
pub fn tools_from_config(config: &ProbeConfig) -> Vec<ToolSpec> {
    let mut tools = if config.replace_defaults {
        Vec::new()
    } else {
        default_tools()
    };

    for entry in &config.tools {
        match ToolSpec::try_from(entry) {
            Ok(spec) => tools.push(spec),
            Err(e) => warn!("Skipping configured {}", e),
        }
    }

    tools
}

/// Keep only the tools whose name matches one of `names` (case-insensitive)
pub fn filter_by_name(tools: Vec<ToolSpec>, names: &[String]) -> Vec<ToolSpec> {
    tools
        .into_iter()
        .filter(|tool| names.iter().any(|n| n.eq_ignore_ascii_case(&tool.name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_order_is_stable() {
        let names: Vec<_> = default_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec!["Node.js", "npm", "Python", "pip", "Git", ".NET", "Docker", "Yarn", "pnpm"]
        );
    }

    #[test]
    fn specs_split_program_and_args() {
        let tools = default_tools();
        let dotnet = tools.iter().find(|t| t.name == ".NET").unwrap();
        assert_eq!(dotnet.program, "dotnet");
        assert_eq!(dotnet.args, vec!["--version"]);
        assert_eq!(dotnet.command_line(), "dotnet --version");
        assert_eq!(
            dotnet.install_hint.as_deref(),
            Some("https://dotnet.microsoft.com/")
        );
    }

    #[test]
    fn config_appends_and_replaces() {
        let mut config = ProbeConfig::default();
        config.tools.push(ToolEntry {
            name: "Cargo".to_string(),
            command: "cargo --version".to_string(),
            install_hint: None,
        });
        config.tools.push(ToolEntry {
            name: "Broken".to_string(),
            command: "   ".to_string(),
            install_hint: None,
        });

        let appended = tools_from_config(&config);
        assert_eq!(appended.len(), 10);
        assert_eq!(appended.last().unwrap().name, "Cargo");

        config.replace_defaults = true;
        let replaced = tools_from_config(&config);
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].program, "cargo");
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_order() {
        let filtered = filter_by_name(
            default_tools(),
            &["pnpm".to_string(), "git".to_string()],
        );
        let names: Vec<_> = filtered.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Git", "pnpm"]);
    }
}
