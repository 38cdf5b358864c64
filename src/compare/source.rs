//! A validated, opened input file

use std::fs::File;
use std::io::{self, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Record;
use crate::parser::ParserFactory;

/// A file bound to one side of a comparison
#[derive(Debug)]
pub struct Source {
    path: PathBuf,
    file: File,
}

impl Source {
    /// Validate the extension, then open the file for reading.
    ///
    /// The extension is checked before any I/O happens. A directory is
    /// reported as a generic I/O error.
    pub fn open(path: impl AsRef<Path>, parsers: &ParserFactory) -> Result<Self> {
        let path = path.as_ref();
        parsers.get_parser(path)?;

        let file = File::open(path).map_err(|e| Error::from_open(path, e))?;
        let metadata = file.metadata().map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if metadata.is_dir() {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source: io::Error::other("path is a directory"),
            });
        }

        debug!(path = %path.display(), bytes = metadata.len(), "opened source");
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row from the start of the file
    pub fn load_records(&mut self, parsers: &ParserFactory) -> Result<Vec<Record>> {
        let parser = parsers.get_parser(&self.path)?;

        self.file.seek(SeekFrom::Start(0)).map_err(|e| Error::Csv {
            path: self.path.clone(),
            source: e.into(),
        })?;

        let mut reader = BufReader::new(&self.file);
        parser.parse(&mut reader).map_err(|e| Error::Csv {
            path: self.path.clone(),
            source: e,
        })
    }
}
