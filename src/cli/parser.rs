//! CLI argument parsing and structure definitions

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::commands::{BatchArgs, ConfigArgs, ExtractArgs};

/// Full-name extraction for Russian customer-service text
#[derive(Parser, Debug)]
#[command(name = "fio")]
#[command(
    author,
    version,
    about = "Full-name (FIO) extraction for Russian customer-service text",
    long_about = r#"
fio - find surname / given name / patronymic in free-form requests

Each text is resolved to the full names it mentions. Partial forms covered
by a full name are dropped. Texts without any name fall back to 4xxx
request codes. Output is one row per name or code, or one empty row.

EXAMPLES:
  fio extract "Иванов Иван Иванович обратился по вопросу"
  fio batch -i requests.json --format tsv
  cat requests.csv | fio batch --input-format csv
  fio config init fio.toml
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Text to extract from (shorthand for `fio extract`)
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract names or codes from one text
    #[command(visible_alias = "x")]
    Extract(ExtractArgs),

    /// Process a batch of records into rows
    #[command(visible_alias = "b")]
    Batch(BatchArgs),

    /// Show or create a configuration file
    Config(ConfigArgs),
}

/// Options shared by every command that builds a pipeline.
#[derive(Args, Debug, Clone, Default)]
pub struct PipelineArgs {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Tagger deadline in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Process texts one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Fail the whole batch when the tagger fails
    #[arg(long)]
    pub abort_on_tagger_failure: bool,

    /// Additional stop word (repeatable)
    #[arg(long = "stop-word", value_name = "WORD")]
    pub stop_words: Vec<String>,
}

/// Row output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned `text -> name` lines
    Human,
    /// Pretty JSON array
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
    /// Tab-separated with header
    Tsv,
    /// Comma-separated with header
    Csv,
}

impl OutputFormat {
    /// The library format, or `None` for human output.
    #[must_use]
    pub fn as_rows_format(self) -> Option<crate::OutputFormat> {
        match self {
            OutputFormat::Human => None,
            OutputFormat::Json => Some(crate::OutputFormat::Json),
            OutputFormat::Jsonl => Some(crate::OutputFormat::Jsonl),
            OutputFormat::Tsv => Some(crate::OutputFormat::Tsv),
            OutputFormat::Csv => Some(crate::OutputFormat::Csv),
        }
    }
}

/// Record input format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Array of records, bare strings, or columns
    Json,
    /// One record per line
    #[value(alias = "ndjson")]
    Jsonl,
    /// Header row, one record per line
    Csv,
}

impl From<InputFormat> for crate::InputFormat {
    fn from(f: InputFormat) -> Self {
        match f {
            InputFormat::Json => crate::InputFormat::Json,
            InputFormat::Jsonl => crate::InputFormat::Jsonl,
            InputFormat::Csv => crate::InputFormat::Csv,
        }
    }
}
