//! Diff-style line output

use std::path::Path;

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::compare::Comparison;
use crate::model::{Record, SourceId};

use super::{csv_line, sorted, OutputFormatter};

/// One CSV line per record: ` ` matching, `-` only in file_one, `+` only in file_two
pub struct UnifiedOutput;

impl UnifiedOutput {
    pub fn new() -> Self {
        Self
    }

    fn write_line(
        &self,
        prefix: char,
        color: Option<Color>,
        record: &Record,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        writer.set_color(ColorSpec::new().set_fg(color))?;
        write!(writer, "{}{}", prefix, csv_line(record)?)?;
        writer.reset()?;
        writeln!(writer)?;
        Ok(())
    }
}

impl Default for UnifiedOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for UnifiedOutput {
    fn render(
        &self,
        comparison: &Comparison,
        file_one: &Path,
        file_two: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        writeln!(writer, "--- {}", file_one.display())?;
        writeln!(writer, "+++ {}", file_two.display())?;

        for record in sorted(&comparison.matching) {
            self.write_line(' ', None, record, writer)?;
        }
        for record in sorted(comparison.unique_to(SourceId::FileOne)) {
            self.write_line('-', Some(Color::Red), record, writer)?;
        }
        for record in sorted(comparison.unique_to(SourceId::FileTwo)) {
            self.write_line('+', Some(Color::Green), record, writer)?;
        }

        Ok(())
    }
}
