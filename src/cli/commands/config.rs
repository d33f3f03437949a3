//! Config command: inspect and create TOML configuration

use clap::{Parser, Subcommand};
use std::path::Path;

use super::super::output::{log_info, write_output};
use super::super::utils::load_config;

use crate::ExtractorConfig;

/// Default file written by `fio config init`.
pub const DEFAULT_CONFIG_PATH: &str = "fio.toml";

/// Show or create a configuration file
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    /// Config action
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show {
        /// Configuration file to load (defaults otherwise)
        #[arg(short, long, value_name = "PATH")]
        config: Option<String>,
    },
    /// Write the default configuration to a file
    Init {
        /// Destination
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run `fio config`.
pub fn run(args: ConfigArgs) -> Result<(), String> {
    match args.action {
        ConfigAction::Show { config } => {
            let config = load_config(config.as_deref())?;
            let toml = config
                .to_toml_string()
                .map_err(|e| format!("Failed to render config: {}", e))?;
            write_output(&toml, None)
        }
        ConfigAction::Init { path, force } => {
            if Path::new(&path).exists() && !force {
                return Err(format!("{} already exists (use --force to overwrite)", path));
            }
            let toml = ExtractorConfig::default()
                .to_toml_string()
                .map_err(|e| format!("Failed to render config: {}", e))?;
            write_output(&toml, Some(&path))?;
            log_info(&format!("Wrote {}", path));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fio.toml").to_string_lossy().into_owned();

        run(ConfigArgs {
            action: ConfigAction::Init { path: path.clone(), force: false },
        })
        .unwrap();

        let loaded = ExtractorConfig::from_toml_file(&path).unwrap();
        assert_eq!(loaded, ExtractorConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fio.toml");
        std::fs::write(&path, "parallel = false\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let err = run(ConfigArgs {
            action: ConfigAction::Init { path: path.clone(), force: false },
        })
        .unwrap_err();
        assert!(err.contains("already exists"));

        run(ConfigArgs {
            action: ConfigAction::Init { path: path.clone(), force: true },
        })
        .unwrap();
        assert!(ExtractorConfig::from_toml_file(&path).unwrap().parallel);
    }
}
