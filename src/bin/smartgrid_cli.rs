//! SmartGrid CLI - Bridge interface for build orchestration
//!
//! Commands: check, generate
//! Outputs JSON to stdout
//! Returns non-zero on validation failure

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use smartgrid_core::{GridPipeline, PipelineError};

#[derive(Parser)]
#[command(name = "smartgrid-cli")]
#[command(about = "SmartGrid CLI - Responsive Grid Generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the breakpoint configuration file
    #[arg(short, long, default_value = "smartgrid.json")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration without writing output
    Check,

    /// Generate grid partials into the target directory
    Generate {
        /// Directory holding the grid library partials
        #[arg(short, long)]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let pipeline = GridPipeline::new();

    match cli.command {
        Commands::Check => {
            let config = match pipeline.load_config(&cli.config) {
                Ok(c) => c,
                Err(e) => {
                    println!(r#"{{"valid": false, "error": "{}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let result = pipeline.validate_config(&config);
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
            if result.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2) // Validation failure
            }
        }

        Commands::Generate { out_dir } => match pipeline.run(&cli.config, &out_dir) {
            Ok(report) => {
                let output = serde_json::json!({
                    "success": true,
                    "report": report,
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
                ExitCode::SUCCESS
            }
            Err(e @ (PipelineError::ValidationFailed(_) | PipelineError::Config(_))) => {
                let output = serde_json::json!({
                    "success": false,
                    "error": e.to_string(),
                });
                println!("{}", serde_json::to_string(&output).unwrap());
                ExitCode::from(2) // Configuration/validation failure
            }
            Err(e) => {
                let output = serde_json::json!({
                    "success": false,
                    "error": e.to_string(),
                });
                println!("{}", serde_json::to_string(&output).unwrap());
                ExitCode::FAILURE
            }
        },
    }
}
