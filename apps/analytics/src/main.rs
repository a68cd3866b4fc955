mod config;
mod errors;
mod hiring;
mod models;
mod report;
mod samples;
mod scoring;
mod workforce;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, OutputFormat};
use crate::hiring::skill_match::{SkillMatcher, SubstringSkillMatcher};
use crate::report::{render_json, run_demo, TextReport};

fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting people analytics demo v{}", env!("CARGO_PKG_VERSION"));

    let matcher: Arc<dyn SkillMatcher> = Arc::new(SubstringSkillMatcher);

    let report = run_demo(matcher).map_err(|e| {
        error!(code = e.code(), "Demo run failed: {e}");
        e
    })?;

    match config.report_format {
        OutputFormat::Text => {
            print!(
                "{}",
                TextReport::new(&report, config.feedback_preview_chars)
            );
        }
        OutputFormat::Json => {
            let json = render_json(&report).context("Failed to render report as JSON")?;
            println!("{json}");
        }
    }

    info!("Demo complete");
    Ok(())
}
