//! fio - full-name extraction CLI
//!
//! ```bash
//! fio extract "Иванов Иван Иванович обратился по вопросу"
//! fio batch -i requests.csv --format tsv -o rows.tsv
//! fio config show
//! ```

use std::process::ExitCode;

use clap::Parser;

use fio_extract::cli::commands::{batch, config, extract, ExtractArgs};
use fio_extract::cli::output::color;
use fio_extract::cli::parser::{Cli, Commands, OutputFormat};

fn init_logging(verbose: bool, quiet: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result: Result<(), String> = match cli.command {
        Some(Commands::Extract(args)) => extract::run(args),
        Some(Commands::Batch(args)) => batch::run(args),
        Some(Commands::Config(args)) => config::run(args),
        None => {
            // No subcommand: treat positional args as text to extract
            if cli.text.is_empty() {
                eprintln!("No input provided. Run `fio --help` for usage.");
                return ExitCode::FAILURE;
            }
            extract::run(ExtractArgs {
                text: Some(cli.text.join(" ")),
                format: OutputFormat::Human,
                ..Default::default()
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
