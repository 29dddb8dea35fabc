use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::CatalogSource;
use crate::config::Settings;

/// Notebook Configurator - pick a cover colour and page layout
#[derive(Parser)]
#[command(name = "notebook-configurator")]
#[command(about = "Choose a notebook's cover colour and page layout and see its price")]
#[command(version)]
pub struct Cli {
    /// Catalog JSON file (overrides the settings file; embedded catalog if neither is set)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Settings JSON file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file.
    ///
    /// Without it the interactive screen discards logs, and headless commands
    /// log to stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive configurator (default)
    Run,
    /// Check a catalog file for parse errors and invariant violations
    Validate {
        /// Path to the catalog file
        catalog: PathBuf,
    },
    /// List the colour and layout options derived from the catalog
    Options,
    /// Print heading and summary for a colour/layout choice
    Quote {
        /// Colour value or label (e.g. red or Sunset)
        #[arg(short, long)]
        color: Option<String>,
        /// Layout value or label (e.g. dotted)
        #[arg(short, long)]
        layout: Option<String>,
    },
    /// Write a settings file with default values
    InitConfig {
        /// Destination path
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether this invocation opens the interactive screen
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Run))
    }

    /// Catalog to load: `--catalog`, then the settings file, then embedded
    pub fn catalog_source(&self, settings: &Settings) -> CatalogSource {
        CatalogSource::from_path(self.catalog.clone().or_else(|| settings.catalog_path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let result = Cli::try_parse_from(["notebook-configurator"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_cli_validate_command() {
        let cli = Cli::try_parse_from(["notebook-configurator", "validate", "/path/to/products.json"])
            .unwrap();
        match cli.command {
            Some(Commands::Validate { catalog }) => {
                assert_eq!(catalog.to_str().unwrap(), "/path/to/products.json");
            }
            _ => panic!("Expected Validate command"),
        }
        assert!(!Cli::try_parse_from(["notebook-configurator", "options"]).unwrap().is_interactive());
    }

    #[test]
    fn test_cli_quote_command() {
        let cli = Cli::try_parse_from([
            "notebook-configurator",
            "quote",
            "--color",
            "red",
            "--layout",
            "dotted",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Quote { color, layout }) => {
                assert_eq!(color.as_deref(), Some("red"));
                assert_eq!(layout.as_deref(), Some("dotted"));
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_global_catalog_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["notebook-configurator", "options", "--catalog", "c.json"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("c.json")));
    }

    #[test]
    fn test_catalog_source_precedence() {
        let settings = Settings {
            catalog_path: Some(PathBuf::from("from-settings.json")),
            ..Settings::default()
        };

        let cli = Cli::try_parse_from(["notebook-configurator"]).unwrap();
        assert_eq!(
            cli.catalog_source(&settings),
            CatalogSource::File(PathBuf::from("from-settings.json"))
        );
        assert_eq!(cli.catalog_source(&Settings::default()), CatalogSource::Embedded);

        let cli = Cli::try_parse_from(["notebook-configurator", "--catalog", "cli.json"]).unwrap();
        assert_eq!(cli.catalog_source(&settings), CatalogSource::File(PathBuf::from("cli.json")));
    }
}
