//! Colored terminal output

use std::path::Path;

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::compare::Comparison;
use crate::model::{Record, SourceId};

use super::{sorted, OutputFormatter};

/// Terminal output with boxed tables
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn write_header(&self, writer: &mut dyn WriteColor, file_one: &Path, file_two: &Path) -> Result<()> {
        writeln!(writer, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(writer, " rowmatch: {} ↔ {}", file_one.display(), file_two.display())?;
        writeln!(writer, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_summary(&self, comparison: &Comparison, writer: &mut dyn WriteColor) -> Result<()> {
        let stats = &comparison.stats;
        writeln!(
            writer,
            "Summary: {} matching, {} only in file_one, {} only in file_two (out of {} / {} rows)",
            stats.matching,
            stats.unique(SourceId::FileOne),
            stats.unique(SourceId::FileTwo),
            stats.rows(SourceId::FileOne),
            stats.rows(SourceId::FileTwo),
        )?;

        for source in SourceId::ALL {
            let duplicates = stats.duplicates(source);
            if duplicates > 0 {
                writeln!(
                    writer,
                    "Note: {} duplicate row(s) in {} counted once",
                    duplicates, source
                )?;
            }
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_section(
        &self,
        title: &str,
        color: Option<Color>,
        records: &[&Record],
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        writer.set_color(ColorSpec::new().set_fg(color).set_bold(true))?;
        write!(writer, "{} ({}):", title, records.len())?;
        writer.reset()?;
        writeln!(writer)?;

        writeln!(writer, "{}", build_table(records))?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(
        &self,
        comparison: &Comparison,
        file_one: &Path,
        file_two: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        self.write_header(writer, file_one, file_two)?;
        self.write_summary(comparison, writer)?;

        let matching = sorted(&comparison.matching);
        self.write_section("Matching Records", None, &matching, writer)?;

        if !comparison.has_differences() {
            writeln!(writer, "No differences found.")?;
            return Ok(());
        }

        let only_one = sorted(comparison.unique_to(SourceId::FileOne));
        self.write_section("Only in file_one", Some(Color::Red), &only_one, writer)?;

        let only_two = sorted(comparison.unique_to(SourceId::FileTwo));
        self.write_section("Only in file_two", Some(Color::Green), &only_two, writer)?;

        Ok(())
    }
}

/// Build a box-drawn table; rows may differ in width
fn build_table(records: &[&Record]) -> String {
    if records.is_empty() {
        return String::new();
    }
    // A blank-line record still gets one empty cell.
    let col_count = records.iter().map(|r| r.len()).max().unwrap_or(0).max(1);

    let mut col_widths: Vec<usize> = vec![0; col_count];
    for record in records {
        for (i, field) in record.fields().iter().enumerate() {
            col_widths[i] = col_widths[i].max(display_width(field));
        }
    }

    let border = |left: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (i, width) in col_widths.iter().enumerate() {
            line.push_str(&"─".repeat(*width + 2));
            if i < col_widths.len() - 1 {
                line.push(mid);
            }
        }
        line.push(right);
        line.push('\n');
        line
    };

    let mut output = border('┌', '┬', '┐');
    for record in records {
        output.push('│');
        for (i, width) in col_widths.iter().enumerate() {
            let field = record.get(i).unwrap_or("");
            let pad = width - display_width(field);
            output.push(' ');
            output.push_str(&escape(field));
            output.push_str(&" ".repeat(pad));
            output.push_str(" │");
        }
        output.push('\n');
    }
    output.push_str(&border('└', '┴', '┘'));

    output
}

/// Embedded line breaks would break the table layout
fn escape(field: &str) -> String {
    field.replace('\r', "\\r").replace('\n', "\\n")
}

fn display_width(field: &str) -> usize {
    escape(field).chars().count()
}
