//! JSON output format

use std::path::Path;

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;
use termcolor::WriteColor;

use crate::compare::Comparison;
use crate::model::{Record, SourceId};

use super::{sorted, OutputFormatter};

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file_one: String,
    file_two: String,
    matching: Vec<&'a Record>,
    unique: IndexMap<SourceId, Vec<&'a Record>>,
    stats: JsonStats,
}

#[derive(Serialize)]
struct JsonStats {
    matching: usize,
    file_one: JsonSourceStats,
    file_two: JsonSourceStats,
}

#[derive(Serialize)]
struct JsonSourceStats {
    rows: usize,
    duplicates: usize,
    unique: usize,
}

impl JsonSourceStats {
    fn of(comparison: &Comparison, source: SourceId) -> Self {
        let stats = &comparison.stats;
        Self {
            rows: stats.rows(source),
            duplicates: stats.duplicates(source),
            unique: stats.unique(source),
        }
    }
}

impl OutputFormatter for JsonOutput {
    fn render(
        &self,
        comparison: &Comparison,
        file_one: &Path,
        file_two: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        let unique = comparison
            .unique
            .iter()
            .map(|(source, records)| (*source, sorted(records)))
            .collect();

        let output = JsonReport {
            file_one: file_one.display().to_string(),
            file_two: file_two.display().to_string(),
            matching: sorted(&comparison.matching),
            unique,
            stats: JsonStats {
                matching: comparison.stats.matching,
                file_one: JsonSourceStats::of(comparison, SourceId::FileOne),
                file_two: JsonSourceStats::of(comparison, SourceId::FileTwo),
            },
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_records;
    use termcolor::NoColor;

    #[test]
    fn test_render_shape() {
        let comparison = compare_records(
            vec![Record::from(["h"]), Record::from(["a"]), Record::from(["a"])],
            vec![Record::from(["h"]), Record::from(["b"])],
        );

        let mut writer = NoColor::new(Vec::new());
        JsonOutput::compact()
            .render(&comparison, Path::new("one.csv"), Path::new("two.csv"), &mut writer)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&writer.into_inner()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "file_one": "one.csv",
                "file_two": "two.csv",
                "matching": [["h"]],
                "unique": { "file_one": [["a"]], "file_two": [["b"]] },
                "stats": {
                    "matching": 1,
                    "file_one": { "rows": 3, "duplicates": 1, "unique": 1 },
                    "file_two": { "rows": 2, "duplicates": 0, "unique": 1 }
                }
            })
        );
    }
}
