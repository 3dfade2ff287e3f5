//! # Environment Prober
//!
//! Checks which package managers and runtimes answer their version command,
//! optionally exercises npm and pip, and prints platform advice.

pub mod catalog;
pub mod detector;
pub mod operations;
pub mod platform;
pub mod report;

pub use catalog::{ToolSpec, default_tools, tools_from_config};
pub use detector::{ToolDetectionConfig, ToolDetector, ToolStatus};
pub use operations::{OperationCheck, PackageOperations};
pub use platform::PlatformInfo;
pub use report::ProbeReport;

/// One probe run
pub struct Prober {
    tools: Vec<ToolSpec>,
    detector: ToolDetector,
    operations: Option<PackageOperations>,
    print: bool,
}

impl Prober {
    pub fn new(tools: Vec<ToolSpec>, detector: ToolDetector) -> Self {
        Self {
            tools,
            detector,
            operations: None,
            print: true,
        }
    }

    /// Also run the npm/pip create-use-delete cycle
    pub fn with_operations(mut self, operations: PackageOperations) -> Self {
        self.operations = Some(operations);
        self
    }

    /// Collect results without printing progress lines
    pub fn silent(mut self) -> Self {
        self.print = false;
        if let Some(ref mut ops) = self.operations {
            ops.verbose_output = false;
        }
        self
    }

    pub async fn run(mut self) -> ProbeReport {
        let info = PlatformInfo::current();
        if self.print {
            report::print_header(&info);
        }

        let mut statuses = Vec::with_capacity(self.tools.len());
        for spec in &self.tools {
            if self.print {
                report::print_checking(&spec.name);
            }
            let status = self.detector.detect(spec).await;
            if self.print {
                report::print_tool_status(&status);
            }
            statuses.push(status);
        }

        let available = report::available_names(&statuses);
        if self.print {
            report::print_summary(&available);
        }

        let checks = match self.operations {
            Some(ref ops) => ops.run(&mut self.detector).await,
            None => Vec::new(),
        };

        let recommendations: Vec<String> = platform::recommendations_for(&info.os)
            .into_iter()
            .map(str::to_string)
            .collect();
        if self.print {
            if !recommendations.is_empty() {
                report::print_recommendations(&recommendations);
            }
            report::print_footer();
        }

        ProbeReport::new(info, statuses, checks, recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn available_equals_zero_exit_subset() {
        let tools = vec![
            ToolSpec::new("Yes", "true", Some("n/a")).unwrap(),
            ToolSpec::new("No", "false", Some("n/a")).unwrap(),
            ToolSpec::new("Missing", "scaffold-missing-tool --version", None).unwrap(),
            ToolSpec::new("Echo", "echo 3.1.4", None).unwrap(),
        ];

        let report = Prober::new(tools, ToolDetector::new()).silent().run().await;

        assert_eq!(report.available, vec!["Yes", "Echo"]);
        assert_eq!(report.tools.len(), 4);
        assert!(report.operations.is_empty());
        assert_eq!(report.missing().count(), 2);
    }

    #[tokio::test]
    async fn empty_table_reports_nothing_available() {
        let report = Prober::new(Vec::new(), ToolDetector::new()).silent().run().await;
        assert!(report.available.is_empty());
        assert_eq!(report.platform.os, std::env::consts::OS);
    }
}
