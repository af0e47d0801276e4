//! Generation Pipeline - Single Entry Point
//!
//! CRITICAL: generate MUST validate the configuration internally. No bypass.
//! The configuration is read fresh from disk on every run; nothing is cached
//! between invocations, so an edit to the file is always picked up.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{GridConfig, OutputStyle};
use crate::emit;
use crate::hashing::sha256_hex;
use crate::validation::{ValidationResult, Validator};
use crate::GENERATOR_VERSION;

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static CONFIG_LOAD_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_config_load_count() -> u32 {
    CONFIG_LOAD_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_config_load_count() {
    CONFIG_LOAD_COUNT.store(0, Ordering::SeqCst);
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Filesystem error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generator_version: String,
    pub created_at: DateTime<Utc>,
    pub output_style: OutputStyle,
    pub columns: u32,
    pub validation: ValidationResult,
    pub files: Vec<GeneratedFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub bytes: u64,
    pub hash: String,
}

/// The generation pipeline - single entry point for all grid operations
pub struct GridPipeline {
    validator: Validator,
}

impl GridPipeline {
    pub fn new() -> Self {
        Self {
            validator: Validator::new(),
        }
    }

    /// Read and parse the configuration file.
    ///
    /// Always hits the filesystem. Parse failures (missing `columns`,
    /// unparsable lengths, malformed JSON) are configuration errors.
    pub fn load_config(&self, path: &Path) -> Result<GridConfig, PipelineError> {
        #[cfg(feature = "test-hooks")]
        CONFIG_LOAD_COUNT.fetch_add(1, Ordering::SeqCst);

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PipelineError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Validate a configuration
    ///
    /// This is the ONLY validation entry point.
    pub fn validate_config(&self, config: &GridConfig) -> ValidationResult {
        self.validator.validate(config)
    }

    /// Generate grid partials into `out_dir`.
    ///
    /// CRITICAL: This ALWAYS validates first. Error-severity violations
    /// abort the run before anything touches the filesystem. On success the
    /// dialect's partial is rewritten and the other dialect's stale partial,
    /// if any, is removed.
    pub fn generate(
        &self,
        config: &GridConfig,
        out_dir: &Path,
    ) -> Result<GenerationReport, PipelineError> {
        // MANDATORY: validation is always called. This is non-negotiable.
        let validation = self.validate_config(config);

        if !validation.valid {
            let messages: Vec<_> = validation
                .violations
                .iter()
                .map(|v| format!("{}: {}", v.rule, v.message))
                .collect();
            return Err(PipelineError::ValidationFailed(messages.join("; ")));
        }

        if !out_dir.is_dir() {
            return Err(PipelineError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("output directory not found: {}", out_dir.display()),
            )));
        }

        let content = emit::render(config);
        let path = out_dir.join(config.output_style.file_name());
        fs::write(&path, content.as_bytes())?;

        // An outputStyle switch would otherwise leave the previous
        // dialect's partial behind.
        let stale = out_dir.join(config.output_style.other().file_name());
        if stale.exists() {
            fs::remove_file(&stale)?;
        }

        Ok(GenerationReport {
            generator_version: GENERATOR_VERSION.to_string(),
            created_at: Utc::now(),
            output_style: config.output_style,
            columns: config.columns,
            validation,
            files: vec![GeneratedFile {
                path,
                bytes: content.len() as u64,
                hash: sha256_hex(content.as_bytes()),
            }],
        })
    }

    /// Load fresh, validate, generate. The orchestration-facing operation:
    /// the file watcher (external to this crate) re-invokes this whenever
    /// the configuration file changes.
    pub fn run(
        &self,
        config_path: &Path,
        out_dir: &Path,
    ) -> Result<GenerationReport, PipelineError> {
        let config = self.load_config(config_path)?;
        self.generate(&config, out_dir)
    }
}

impl Default for GridPipeline {
    fn default() -> Self {
        Self::new()
    }
}
