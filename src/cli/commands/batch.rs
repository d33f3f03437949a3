//! Batch command: records in, deduplicated rows out

use clap::Parser;
use std::time::Instant;

use super::super::output::{format_rows, log_info, write_output};
use super::super::parser::{InputFormat, OutputFormat, PipelineArgs};
use super::super::utils::{build_pipeline, read_input};

use crate::ingest::parse_texts;

/// Process a batch of records into rows
#[derive(Parser, Debug, Clone, Default)]
pub struct BatchArgs {
    /// Input file (JSON, JSONL or CSV). Reads stdin when omitted or `-`
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// Input format (default: from file extension, else json)
    #[arg(long, value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write rows to file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

impl BatchArgs {
    fn resolved_input_format(&self) -> crate::InputFormat {
        if let Some(f) = self.input_format {
            return f.into();
        }
        self.input
            .as_deref()
            .and_then(crate::InputFormat::from_extension)
            .unwrap_or_default()
    }
}

/// Run `fio batch`.
pub fn run(args: BatchArgs) -> Result<(), String> {
    let input = read_input(args.input.as_deref())?;
    let format = args.resolved_input_format();
    let texts = parse_texts(&input, format).map_err(|e| format!("Failed to read records: {}", e))?;

    let pipeline = build_pipeline(&args.pipeline)?;

    let start = Instant::now();
    let rows = pipeline
        .run(&texts)
        .map_err(|e| format!("Batch failed: {}", e))?;
    let elapsed = start.elapsed();

    let output = format_rows(&rows, args.format)?;
    write_output(&output, args.output.as_deref())?;

    log_info(&format!(
        "Processed {} record(s) into {} row(s) in {:.2}ms",
        texts.len(),
        rows.len(),
        elapsed.as_secs_f64() * 1000.0
    ));
    Ok(())
}
