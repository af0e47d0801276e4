//! SmartGrid Core - Responsive Grid Generator
//!
//! # The Five Rules (Non-Negotiable)
//! 1. The Configuration File Is Truth
//! 2. Configuration Is Read Fresh Every Run
//! 3. Validation Runs Before Emission
//! 4. Output Is Deterministic
//! 5. Generated Partials Are Fully Replaced

pub mod config;
pub mod validation;
pub mod hashing;
pub mod emit;
pub mod pipeline;

pub use config::{BreakpointSpec, ContainerSpec, CssLength, GridConfig, OutputStyle, ResolvedBreakpoint};
pub use validation::{ValidationResult, ValidationRule, ValidationViolation, ViolationSeverity};
pub use hashing::sha256_hex;
pub use emit::render;
pub use pipeline::{GeneratedFile, GenerationReport, GridPipeline, PipelineError};

pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
