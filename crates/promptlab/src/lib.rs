//! Promptlab — compare prompt variants against an LLM provider and score
//! the responses with keyword heuristics.
//!
//! This crate re-exports the promptlab sub-crates for single-import usage.
//! Enable features to control which layers are available.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use promptlab::config::ExperimentConfig;
//! use promptlab::models::HttpBackend;
//! use promptlab::report::summary_table;
//! use promptlab::runner::ExperimentRunner;
//! ```

/// Core traits and types: CompletionModel, Generation, LabError.
/// Always available.
pub use promptlab_core as core;

/// Experiment configuration: YAML loading, .env bootstrapping.
#[cfg(feature = "config")]
pub use promptlab_config as config;

/// Prompt variants and template rendering.
#[cfg(feature = "prompts")]
pub use promptlab_prompts as prompts;

/// Provider adapters (Gemini), retry wrapper, test doubles.
#[cfg(feature = "models")]
pub use promptlab_models as models;

/// Response scoring: accuracy, completeness, efficiency, failure behaviors.
#[cfg(feature = "eval")]
pub use promptlab_eval as eval;

/// Text rendering of evaluation results: tables, bars, issue matrix.
#[cfg(feature = "report")]
pub use promptlab_report as report;

/// Experiment orchestration: config in, scored report out.
#[cfg(feature = "runner")]
pub use promptlab_runner as runner;
