//! Output formatting for comparison results

mod json;
mod terminal;
mod unified;

use std::path::Path;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::compare::Comparison;
use crate::config::OutputFormat;
use crate::model::{Record, RecordSet};

pub use json::JsonOutput;
pub use terminal::TerminalOutput;
pub use unified::UnifiedOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a comparison to a writer
    fn render(
        &self,
        comparison: &Comparison,
        file_one: &Path,
        file_two: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::Unified => Box::new(UnifiedOutput::new()),
        }
    }
}

/// Render a comparison to stdout
pub fn render_to_stdout(
    comparison: &Comparison,
    file_one: &Path,
    file_two: &Path,
    format: OutputFormat,
    color: ColorChoice,
) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let mut stdout = StandardStream::stdout(color);
    formatter.render(comparison, file_one, file_two, &mut stdout)
}

/// Records of a set in a stable order for display
pub(crate) fn sorted(records: &RecordSet) -> Vec<&Record> {
    let mut sorted: Vec<_> = records.iter().collect();
    sorted.sort();
    sorted
}

/// Encode a record as one CSV line, without the line terminator
pub(crate) fn csv_line(record: &Record) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(Vec::new());
    writer.write_record(record.fields())?;
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e.error()))?;
    let line = String::from_utf8(bytes)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_line_quotes_when_needed() {
        let record = Record::from(["a", "b,c", "say \"hi\"", ""]);
        assert_eq!(csv_line(&record).unwrap(), r#"a,"b,c","say ""hi""","#);
    }

    #[test]
    fn test_sorted() {
        let set: RecordSet = [Record::from(["b"]), Record::from(["a"]), Record::from(["c"])]
            .into_iter()
            .collect();
        let order: Vec<_> = sorted(&set).into_iter().map(|r| r.fields()[0].clone()).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }
}
