//! Two-file comparator with cached results

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::model::{RecordSet, SourceId};
use crate::parser::ParserFactory;

use super::{compare_records, Comparison, ComparisonCache, Source, UniqueRecords};

/// Compares the rows of two CSV files.
///
/// Both sources are validated and opened when bound. The comparison itself
/// runs on first access to the results and is cached until either source
/// is rebound.
///
/// Records are compared as sets: a row repeated within one file counts once.
/// [`crate::compare::ComparisonStats::duplicates`] reports how many rows
/// collapsed that way.
#[derive(Debug)]
pub struct FileComparator {
    parsers: ParserFactory,
    sources: [Source; 2],
    cache: ComparisonCache,
}

impl FileComparator {
    /// Bind `file_one` and `file_two` using the default CSV dialect
    pub fn new(file_one: impl AsRef<Path>, file_two: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(&Config::new(
            file_one.as_ref().to_path_buf(),
            file_two.as_ref().to_path_buf(),
        ))
    }

    /// Bind both sources named in `config`; fails on the first bad source
    pub fn with_config(config: &Config) -> Result<Self> {
        let parsers = ParserFactory::from_config(config);
        let file_one = Source::open(&config.file_one, &parsers)?;
        let file_two = Source::open(&config.file_two, &parsers)?;

        Ok(Self {
            parsers,
            sources: [file_one, file_two],
            cache: ComparisonCache::new(),
        })
    }

    /// Rebind one source to a new path and drop any cached result.
    ///
    /// On error the previous binding and cache are kept.
    pub fn bind(&mut self, source: SourceId, path: impl AsRef<Path>) -> Result<()> {
        let opened = Source::open(path, &self.parsers)?;
        debug!(%source, path = %opened.path().display(), "rebound source");

        self.sources[source.index()] = opened;
        self.cache.invalidate();
        Ok(())
    }

    /// The source currently bound to `source`
    pub fn source(&self, source: SourceId) -> &Source {
        &self.sources[source.index()]
    }

    pub fn path(&self, source: SourceId) -> PathBuf {
        self.source(source).path().to_path_buf()
    }

    /// Check whether a comparison result is cached
    pub fn is_cached(&self) -> bool {
        self.cache.is_valid()
    }

    /// Records present in both sources
    pub fn matching_records(&mut self) -> Result<&RecordSet> {
        Ok(&self.comparison()?.matching)
    }

    /// Records present in only one source, keyed by source
    pub fn unique_records(&mut self) -> Result<&UniqueRecords> {
        Ok(&self.comparison()?.unique)
    }

    /// The full comparison, computed on first use
    pub fn comparison(&mut self) -> Result<&Comparison> {
        let Self {
            parsers,
            sources,
            cache,
        } = self;

        cache.get_or_try_insert_with(|| {
            let [file_one, file_two] = sources;
            let one = file_one.load_records(parsers)?;
            let two = file_two.load_records(parsers)?;

            let result = compare_records(one, two);
            debug!(
                matching = result.stats.matching,
                unique_file_one = result.stats.unique(SourceId::FileOne),
                unique_file_two = result.stats.unique(SourceId::FileTwo),
                "compared sources"
            );
            Ok(result)
        })
    }
}
