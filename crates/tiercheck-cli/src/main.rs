mod commands;
mod config;
mod output;
mod telemetry;

use clap::{Parser, Subcommand};
use config::AppConfig;
use output::OutputFormat;
use std::path::PathBuf;
use tiercheck_core::Decimal;

#[derive(Parser)]
#[command(
    name = "tiercheck",
    version,
    about = "NBC 9.36 energy compliance calculator for residential buildings"
)]
struct Cli {
    /// Log filter (overrides TIERCHECK_LOG_LEVEL; RUST_LOG wins over both)
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a project record (JSON) and report status, points and warnings
    Score {
        /// Path to the JSON project record
        input_file: PathBuf,

        /// Custom JSON table file (overrides TIERCHECK_TABLES)
        #[arg(short, long, value_name = "FILE")]
        tables: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,

        /// Show per-field lookup reasoning
        #[arg(long)]
        verbose: bool,

        /// Include the decision trace
        #[arg(long)]
        trace: bool,

        /// Minimum total points for a Pass (overrides TIERCHECK_MIN_POINTS)
        #[arg(long, value_name = "POINTS")]
        min_points: Option<Decimal>,
    },
    /// Check the code minimums for a single field of a project record
    Check {
        /// Path to the JSON project record
        input_file: PathBuf,

        /// Field to check (e.g., wall_rsi)
        #[arg(short, long)]
        field: String,

        /// Custom JSON table file (overrides TIERCHECK_TABLES)
        #[arg(short, long, value_name = "FILE")]
        tables: Option<PathBuf>,
    },
    /// Inspect and validate lookup tables
    Tables {
        #[command(subcommand)]
        action: TablesAction,
    },
    /// List the compliance pathway codes
    Pathways,
}

#[derive(Subcommand)]
enum TablesAction {
    /// List predefined table sets
    List,
    /// Show the brackets and code minimums for a field
    Explain {
        /// Field name (e.g., "wall_rsi")
        field: String,

        /// Custom JSON table file (overrides TIERCHECK_TABLES)
        #[arg(short, long, value_name = "FILE")]
        tables: Option<PathBuf>,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom table file
    Validate {
        /// Path to JSON table file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    if let Err(e) = telemetry::init(log_level) {
        eprintln!("warning: logging disabled: {e}");
    }

    let result = match cli.command {
        Commands::Score {
            input_file,
            tables,
            output,
            verbose,
            trace,
            min_points,
        } => commands::score::run(
            commands::score::ScoreArgs {
                input_file,
                tables,
                output,
                verbose,
                trace,
                min_points: min_points.unwrap_or(config.min_points),
            },
            config.tables_path,
        ),
        Commands::Check {
            input_file,
            field,
            tables,
        } => commands::check::run(input_file, &field, tables, config.tables_path),
        Commands::Tables { action } => match action {
            TablesAction::List => commands::tables::list(),
            TablesAction::Explain { field, tables } => {
                commands::tables::explain(&field, tables, config.tables_path)
            }
            TablesAction::Schema => commands::tables::schema(),
            TablesAction::Validate { file } => commands::tables::validate(&file),
        },
        Commands::Pathways => commands::pathways::list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_defaults_to_table() {
        let cli = Cli::try_parse_from(["tiercheck", "score", "record.json"]).unwrap();
        match cli.command {
            Commands::Score { output, .. } => assert_eq!(output, OutputFormat::Table),
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn output_format_accepts_json() {
        let cli = Cli::try_parse_from(["tiercheck", "score", "record.json", "-o", "json"]).unwrap();
        match cli.command {
            Commands::Score { output, .. } => assert_eq!(output, OutputFormat::Json),
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        assert!(Cli::try_parse_from(["tiercheck", "score", "record.json", "-o", "jsn"]).is_err());
    }
}
