//! Parser layer for reading delimited files into records

mod csv;

use std::io::Read;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::Record;

pub use self::csv::CsvParser;

/// Trait for parsing a source into records
pub trait Parser: Send + Sync {
    /// Read every row of `reader` as a record
    fn parse(&self, reader: &mut dyn Read) -> ::csv::Result<Vec<Record>>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Extensions this parser accepts
    fn extensions(&self) -> &'static [&'static str];
}

/// Factory for selecting a parser based on file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn Parser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParserFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserFactory")
            .field("extensions", &self.supported_extensions())
            .finish()
    }
}

impl ParserFactory {
    /// Create a parser factory with default parser settings
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a parser factory honoring the configured delimiter
    pub fn from_config(config: &Config) -> Self {
        Self {
            parsers: vec![Box::new(CsvParser::new(config.delimiter))],
        }
    }

    /// Extensions accepted by any registered parser
    pub fn supported_extensions(&self) -> &'static [&'static str] {
        // Only one parser is registered.
        self.parsers
            .first()
            .map(|p| p.extensions())
            .unwrap_or(&[])
    }

    /// Get a parser for the given file path
    ///
    /// The check only looks at the text after the last `.` of the file
    /// name; no content sniffing. A file named just `.csv` is accepted.
    pub fn get_parser(&self, path: &Path) -> Result<&dyn Parser> {
        let ext = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .unwrap_or("");

        for parser in &self.parsers {
            if parser.supports_extension(ext) {
                return Ok(parser.as_ref());
            }
        }

        Err(Error::UnsupportedFileType {
            path: path.to_path_buf(),
            supported: self.supported_extensions(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_parser_by_extension() {
        let factory = ParserFactory::new();
        assert!(factory.get_parser(Path::new("dir.v2/users.csv")).is_ok());
        assert!(factory.get_parser(Path::new("exports/.csv")).is_ok());

        for bad in ["users.txt", "users", "users.csv.bak", "users.CSV", "dir.csv/users", ".csv.txt"] {
            let err = factory.get_parser(Path::new(bad)).err().unwrap();
            assert!(
                matches!(err, Error::UnsupportedFileType { supported, .. } if supported == ["csv"]),
                "{bad} should be rejected"
            );
        }
    }
}
