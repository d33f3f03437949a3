//! Utility functions for CLI commands

use std::io::{self, Read};
use std::time::Duration;

use super::parser::PipelineArgs;
use crate::{ExtractorConfig, FailurePolicy, Pipeline};

/// Get input text from various sources (text arg, file, positional, or stdin)
pub fn get_input_text(
    text: &Option<String>,
    file: Option<&str>,
    positional: &[String],
) -> Result<String, String> {
    if let Some(t) = text {
        Ok(t.clone())
    } else if let Some(f) = file {
        read_input_file(f)
    } else if !positional.is_empty() {
        Ok(positional.join(" "))
    } else {
        read_stdin()
    }
}

/// Read a file, or stdin for `None` / `-`.
pub fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        None | Some("-") => read_stdin(),
        Some(p) => read_input_file(p),
    }
}

/// Read input from file
pub fn read_input_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read file {}: {}", path, e))
}

fn read_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Failed to read from stdin: {}", e))?;
    Ok(buffer)
}

/// Load a config file, or the defaults.
pub fn load_config(path: Option<&str>) -> Result<ExtractorConfig, String> {
    match path {
        Some(p) => ExtractorConfig::from_toml_file(p).map_err(|e| e.to_string()),
        None => Ok(ExtractorConfig::default()),
    }
}

/// Effective config: file (or defaults) with command-line overrides on top.
pub fn resolve_config(args: &PipelineArgs) -> Result<ExtractorConfig, String> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(ms) = args.timeout_ms {
        config = config.with_tagger_timeout(Duration::from_millis(ms));
    }
    if args.sequential {
        config = config.with_parallel(false);
    }
    if args.abort_on_tagger_failure {
        config = config.with_failure_policy(FailurePolicy::Abort);
    }
    if !args.stop_words.is_empty() {
        config = config.with_extra_stop_words(args.stop_words.iter().map(String::as_str));
    }
    Ok(config)
}

/// Build a pipeline from command-line options.
///
/// The CLI ships no statistical tagger; detection is pattern-only.
pub fn build_pipeline(args: &PipelineArgs) -> Result<Pipeline, String> {
    let config = resolve_config(args)?;
    Ok(Pipeline::builder().config(config).build())
}
