use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub probe: ProbeConfig,
    pub scaffold: ScaffoldConfig,
    pub output: OutputConfig,
}

/// Environment probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Seconds to wait for each version command
    pub timeout_secs: u64,
    /// Seconds a detection result stays cached within one run
    pub cache_ttl_secs: u64,
    /// Drop the built-in tool table and probe only `tools`
    pub replace_defaults: bool,
    /// Extra tools appended to the table
    pub tools: Vec<ToolEntry>,
}

/// One user-supplied row of the probe table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    pub name: String,
    /// Full version command, e.g. `"cargo --version"`
    pub command: String,
    #[serde(default)]
    pub install_hint: Option<String>,
}

/// Project scaffold configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub project_dir: String,
    pub python: String,
    pub venv_dir: String,
    pub title: String,
    pub version: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            cache_ttl_secs: 300, // 5 minutes
            replace_defaults: false,
            tools: Vec::new(),
        }
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            project_dir: "backend".to_string(),
            python: "python".to_string(),
            venv_dir: "venv".to_string(),
            title: "FastAPI Backend".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
