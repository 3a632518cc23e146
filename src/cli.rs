/// CLI argument definitions for the `pp` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli_help;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "pp", version, about = "Exam percentile predictor")]
pub struct Cli {
    /// TOML file replacing the built-in sitting table and score policy
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict the percentile for a raw score in a sitting
    #[command(long_about = cli_help::PREDICT)]
    Predict {
        /// Sitting id (e.g. 24S1)
        shift: String,

        /// Raw score (whole number, 0-300)
        #[arg(allow_hyphen_values = true)]
        marks: String,

        /// Output the response body as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the difficulty-adjusted curve for a sitting
    #[command(long_about = cli_help::CURVE)]
    Curve {
        /// Sitting id (e.g. 24S1)
        #[arg(required_unless_present = "m99", conflicts_with = "m99")]
        shift: Option<String>,

        /// Use this reference value instead of a sitting from the table
        #[arg(long)]
        m99: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known sittings and their reference values
    #[command(long_about = cli_help::SITTINGS)]
    Sittings {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_predict() {
        let cli = Cli::try_parse_from(["pp", "predict", "24S1", "170", "--json"]).unwrap();
        match cli.command {
            Commands::Predict { shift, marks, json } => {
                assert_eq!(shift, "24S1");
                assert_eq!(marks, "170");
                assert!(json);
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn negative_marks_reach_validation() {
        let cli = Cli::try_parse_from(["pp", "predict", "24S1", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::Predict { ref marks, .. } if marks == "-5"));
    }

    #[test]
    fn curve_requires_shift_or_m99() {
        assert!(Cli::try_parse_from(["pp", "curve"]).is_err());
        assert!(Cli::try_parse_from(["pp", "curve", "24S1"]).is_ok());
        assert!(Cli::try_parse_from(["pp", "curve", "--m99", "190"]).is_ok());
        assert!(Cli::try_parse_from(["pp", "curve", "24S1", "--m99", "190"]).is_err());
    }

    #[test]
    fn config_is_global() {
        let cli = Cli::try_parse_from(["pp", "sittings", "--config", "pp.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pp.toml")));
    }
}
