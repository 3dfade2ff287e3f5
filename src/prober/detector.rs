use super::catalog::ToolSpec;
use crate::common::command_utils::run_command;
use crate::config::types::ProbeConfig;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub name: String,
    pub command: String,
    pub available: bool,
    /// First line of the version command's stdout
    pub version_line: Option<String>,
    /// Dotted version number pulled out of `version_line`
    pub version: Option<String>,
    pub install_hint: Option<String>,
    pub timed_out: bool,
    #[serde(skip)]
    pub last_checked: SystemTime,
}

#[derive(Debug, Clone)]
pub struct ToolDetectionConfig {
    pub timeout: Duration,
    pub cache_ttl: Duration,
    pub enable_cache: bool,
}

impl Default for ToolDetectionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            cache_ttl: Duration::from_secs(300), // 5 minutes
            enable_cache: true,
        }
    }
}

impl From<&ProbeConfig> for ToolDetectionConfig {
    fn from(config: &ProbeConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
            enable_cache: config.cache_ttl_secs > 0,
        }
    }
}

/// Runs version commands and remembers the answers for a while
pub struct ToolDetector {
    cache: HashMap<String, ToolStatus>,
    config: ToolDetectionConfig,
}

impl ToolDetector {
    pub fn new() -> Self {
        Self::with_config(ToolDetectionConfig::default())
    }

    pub fn with_config(config: ToolDetectionConfig) -> Self {
        Self {
            cache: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &ToolDetectionConfig {
        &self.config
    }

    /// Detect tool availability with caching
    pub async fn detect(&mut self, spec: &ToolSpec) -> ToolStatus {
        let key = spec.command_line();

        if self.config.enable_cache
            && let Some(cached) = self.cache.get(&key)
            && cached.last_checked.elapsed().unwrap_or(Duration::MAX) < self.config.cache_ttl
        {
            debug!(
                "Using cached status for {}: available={}",
                key, cached.available
            );
            return ToolStatus {
                name: spec.name.clone(),
                install_hint: spec.install_hint.clone(),
                ..cached.clone()
            };
        }

        let status = self.detect_real_time(spec).await;
        if self.config.enable_cache {
            self.cache.insert(key, status.clone());
        }
        status
    }

    /// Detect every tool in table order
    pub async fn detect_all(&mut self, specs: &[ToolSpec]) -> Vec<ToolStatus> {
        let mut results = Vec::with_capacity(specs.len());
        for spec in specs {
            results.push(self.detect(spec).await);
        }
        results
    }

    /// Whether `program --version` succeeds, reusing any cached probe of the
    /// same command
    pub async fn is_available(&mut self, program: &str) -> bool {
        match ToolSpec::new(program, &format!("{program} --version"), None) {
            Some(spec) => self.detect(&spec).await.available,
            None => false,
        }
    }

    /// Clear the cache to force fresh detection
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    async fn detect_real_time(&self, spec: &ToolSpec) -> ToolStatus {
        debug!("Starting real-time detection for {}", spec.name);

        let args: Vec<&str> = spec.args.iter().map(String::as_str).collect();
        let outcome = run_command(&spec.program, &args, None, Some(self.config.timeout)).await;

        let version_line = if outcome.success {
            Some(outcome.first_line().to_string()).filter(|line| !line.is_empty())
        } else {
            None
        };
        let version = version_line.as_deref().and_then(extract_version_generic);

        if outcome.success {
            info!("Found {} with version {:?}", spec.name, version_line);
        } else {
            debug!(
                "{} unavailable (timed_out={}): {}",
                spec.name,
                outcome.timed_out,
                outcome.stderr.trim()
            );
        }

        ToolStatus {
            name: spec.name.clone(),
            command: spec.command_line(),
            available: outcome.success,
            version_line,
            version,
            install_hint: spec.install_hint.clone(),
            timed_out: outcome.timed_out,
            last_checked: SystemTime::now(),
        }
    }
}

impl Default for ToolDetector {
    fn default() -> Self {
        Self::new()
    }
}

static VERSION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(\d+\.\d+\.\d+(?:[+-][a-zA-Z0-9.-]+)?)\b",
        r"\bv?(\d+\.\d+\.\d+)\b",
        r"\b(\d+\.\d+)\b",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Extract version using common patterns
pub fn extract_version_generic(text: &str) -> Option<String> {
    VERSION_PATTERNS.iter().find_map(|re| {
        re.captures(text)
            .and_then(|captures| captures.get(1))
            .map(|version| version.as_str().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_versions_from_common_outputs() {
        assert_eq!(
            extract_version_generic("v20.11.1").as_deref(),
            Some("20.11.1")
        );
        assert_eq!(
            extract_version_generic("git version 2.43.0").as_deref(),
            Some("2.43.0")
        );
        assert_eq!(
            extract_version_generic("Docker version 24.0.7, build afdd53b").as_deref(),
            Some("24.0.7")
        );
        assert_eq!(
            extract_version_generic("pip 23.3.1 from /usr/lib/python3/dist-packages/pip (python 3.12)")
                .as_deref(),
            Some("23.3.1")
        );
        assert_eq!(
            extract_version_generic("8.0.100-rc.2").as_deref(),
            Some("8.0.100-rc.2")
        );
        assert_eq!(extract_version_generic("Python 3.12").as_deref(), Some("3.12"));
        assert_eq!(extract_version_generic("unknown"), None);
    }

    #[tokio::test]
    async fn missing_tool_is_unavailable() {
        let mut detector = ToolDetector::new();
        let spec = ToolSpec::new(
            "Nothing",
            "scaffold-no-such-tool --version",
            Some("https://example.invalid/"),
        )
        .unwrap();
        let status = detector.detect(&spec).await;
        assert!(!status.available);
        assert!(status.version_line.is_none());
        assert_eq!(status.install_hint.as_deref(), Some("https://example.invalid/"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn zero_exit_is_available_with_first_line() {
        let mut detector = ToolDetector::new();
        let spec = ToolSpec::new("Echo", "echo tool 1.4.2", None).unwrap();
        let status = detector.detect(&spec).await;
        assert!(status.available);
        assert_eq!(status.version_line.as_deref(), Some("tool 1.4.2"));
        assert_eq!(status.version.as_deref(), Some("1.4.2"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_unavailable() {
        let mut detector = ToolDetector::new();
        let spec = ToolSpec::new("False", "false", None).unwrap();
        assert!(!detector.detect(&spec).await.available);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn cached_status_keeps_caller_name() {
        let mut detector = ToolDetector::new();
        let first = ToolSpec::new("First", "echo 1.0.0", None).unwrap();
        let second = ToolSpec::new("Second", "echo 1.0.0", Some("hint")).unwrap();

        let a = detector.detect(&first).await;
        let b = detector.detect(&second).await;
        assert_eq!(a.name, "First");
        assert_eq!(b.name, "Second");
        assert_eq!(b.install_hint.as_deref(), Some("hint"));
        assert_eq!(a.last_checked, b.last_checked);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_tool_times_out() {
        let mut detector = ToolDetector::with_config(ToolDetectionConfig {
            timeout: Duration::from_millis(100),
            ..ToolDetectionConfig::default()
        });
        let spec = ToolSpec::new("Sleepy", "sleep 5", None).unwrap();
        let status = detector.detect(&spec).await;
        assert!(!status.available);
        assert!(status.timed_out);
    }
}
