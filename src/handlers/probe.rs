use crate::{
    cli::OutputFormat,
    config::types::Config,
    prober::{self, PackageOperations, Prober, ToolDetectionConfig, ToolDetector},
};
use log::{debug, warn};
use std::time::Duration;

/// Flags accepted by `scaffold probe`
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub format: OutputFormat,
    pub skip_operations: bool,
    pub timeout: Option<u64>,
    pub only: Option<Vec<String>>,
}

pub async fn handle_probe(options: ProbeOptions, config: &Config) -> crate::Result<()> {
    let mut tools = prober::tools_from_config(&config.probe);
    if let Some(ref names) = options.only {
        tools = prober::catalog::filter_by_name(tools, names);
        if tools.is_empty() {
            warn!("No configured tool matches {}", names.join(", "));
        }
    }
    debug!("Probing {} tools", tools.len());

    let mut detection = ToolDetectionConfig::from(&config.probe);
    if let Some(secs) = options.timeout {
        detection.timeout = Duration::from_secs(secs);
    }

    let mut prober = Prober::new(tools, ToolDetector::with_config(detection));
    if !options.skip_operations {
        let cwd = std::env::current_dir()?;
        prober = prober.with_operations(PackageOperations::new(cwd));
    }

    match options.format {
        OutputFormat::Table => {
            prober.run().await;
        }
        OutputFormat::Json => {
            let report = prober.silent().run().await;
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}
