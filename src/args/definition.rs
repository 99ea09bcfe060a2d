//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

use super::utils::parse_param;

/// translated - Resolve translation tables for one language from the command line
#[derive(Parser, Debug)]
#[command(name = "translated")]
#[command(version)]
#[command(about = "Resolve ICU-style translation tables for one language", long_about = None)]
pub struct Args {
    /// Translation table: a YAML file or a directory of YAML files
    #[arg(short, long)]
    pub translations: PathBuf,

    /// Active language (default: the default language)
    #[arg(short = 'L', long)]
    pub language: Option<String>,

    /// Default language (default: system locale, else en_US)
    #[arg(short, long)]
    pub default_language: Option<String>,

    /// Template parameter as name=value; numeric values become numbers
    #[arg(short, long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// YAML file with number format overrides
    #[arg(long)]
    pub format_config: Option<PathBuf>,

    /// Print the resolved messages as JSON
    #[arg(long)]
    pub json: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
