//! Configuration handling for rowmatch

use std::path::PathBuf;

/// Output format for comparison results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Unified,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "unified" => Ok(OutputFormat::Unified),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for a comparison
#[derive(Debug, Clone)]
pub struct Config {
    /// Path bound to `file_one`
    pub file_one: PathBuf,
    /// Path bound to `file_two`
    pub file_two: PathBuf,
    /// Field delimiter byte
    pub delimiter: u8,
    /// Output format
    pub output_format: OutputFormat,
    /// Only show statistics, not the records themselves
    pub stats_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_one: PathBuf::new(),
            file_two: PathBuf::new(),
            delimiter: b',',
            output_format: OutputFormat::default(),
            stats_only: false,
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(file_one: impl Into<PathBuf>, file_two: impl Into<PathBuf>) -> Self {
        Self {
            file_one: file_one.into(),
            file_two: file_two.into(),
            ..Default::default()
        }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Enable stats-only mode
    pub fn with_stats_only(mut self, stats_only: bool) -> Self {
        self.stats_only = stats_only;
        self
    }
}
