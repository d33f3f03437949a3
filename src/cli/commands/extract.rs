//! Extract command: resolve a single text

use clap::Parser;
use std::time::Instant;

use super::super::output::{format_rows, log_info, write_output};
use super::super::parser::{OutputFormat, PipelineArgs};
use super::super::utils::{build_pipeline, get_input_text};

/// Extract names or codes from one text
#[derive(Parser, Debug, Clone, Default)]
pub struct ExtractArgs {
    /// Input text to process
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Positional text argument
    #[arg(trailing_var_arg = true)]
    pub positional: Vec<String>,
}

/// Run `fio extract`.
pub fn run(args: ExtractArgs) -> Result<(), String> {
    let text = get_input_text(&args.text, args.file.as_deref(), &args.positional)?;
    let text = text.trim_end_matches(['\r', '\n']);
    let pipeline = build_pipeline(&args.pipeline)?;

    let start = Instant::now();
    let rows = pipeline
        .run(&[text])
        .map_err(|e| format!("Extraction failed: {}", e))?;
    let elapsed = start.elapsed();

    let output = format_rows(&rows, args.format)?;
    write_output(&output, None)?;

    log_info(&format!(
        "Resolved {} row(s) in {:.2}ms",
        rows.len(),
        elapsed.as_secs_f64() * 1000.0
    ));
    Ok(())
}
