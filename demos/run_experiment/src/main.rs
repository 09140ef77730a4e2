//! End-to-end experiment: load the sample config, send every prompt
//! variant to Gemini, and print the comparison.
//!
//! Needs `GOOGLE_API_KEY` in the environment or in a `.env` file next to
//! the working directory.

use std::sync::Arc;

use promptlab::config::{api_key_from_env, load_env_file, ExperimentConfig};
use promptlab::core::LabError;
use promptlab::models::HttpBackend;
use promptlab::report::{issue_matrix, summary_table};
use promptlab::runner::ExperimentRunner;

#[tokio::main]
async fn main() -> Result<(), LabError> {
    tracing_subscriber::fmt::init();

    load_env_file(".env")?;
    let api_key = api_key_from_env("GOOGLE_API_KEY")?;

    let config = ExperimentConfig::from_path("config/experiment_config.yaml")?;
    let runner = ExperimentRunner::from_config(&config, &api_key, Arc::new(HttpBackend::new()))?;

    println!("=== Variants ===");
    for preview in runner.prompts().preview_rows() {
        println!("[{}] {}: {}", preview.variant_id, preview.name, preview.preview);
    }
    println!();

    let report = runner.run().await?;

    println!("=== Summary ===");
    println!("{}", summary_table(&report.summary_rows()));

    println!("=== Issues ===");
    match issue_matrix(&report.evaluations()) {
        Some(matrix) => println!("{}", matrix.render()),
        None => println!("No failure behaviors detected in any variant."),
    }

    Ok(())
}
