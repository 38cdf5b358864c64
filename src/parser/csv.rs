//! CSV file parser

use std::io::Read;

use crate::model::Record;

use super::Parser;

/// Parser for CSV files
///
/// Every row, the header included, becomes a record. Fields are kept as raw
/// strings and rows may have any width.
pub struct CsvParser {
    delimiter: u8,
}

impl CsvParser {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl Parser for CsvParser {
    fn parse(&self, reader: &mut dyn Read) -> csv::Result<Vec<Record>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(bytes.as_slice());

        let mut records = Vec::new();
        let mut row = csv::StringRecord::new();
        let mut start = 0;
        loop {
            let more = csv_reader.read_record(&mut row)?;

            // The reader skips blank lines; each one is still a row.
            let blanks = blank_lines(&bytes, start);
            records.extend(std::iter::repeat_with(Record::default).take(blanks));

            if !more {
                break;
            }
            records.push(Record::from(&row));
            start = csv_reader.position().byte() as usize;
        }

        Ok(records)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        self.extensions().contains(&ext)
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["csv"]
    }
}

/// Count the empty lines at `start`, where the previous read stopped.
///
/// `\n`, `\r\n` and a lone `\r` each end one line. A `\n` completing the
/// previous record's `\r\n` is not a blank line.
fn blank_lines(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    if i > 0 && bytes[i - 1] == b'\r' && bytes.get(i) == Some(&b'\n') {
        i += 1;
    }

    let mut count = 0;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'\n' => i += 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => i += 2,
            b'\r' => i += 1,
            _ => break,
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<Record> {
        CsvParser::default().parse(&mut input.as_bytes()).unwrap()
    }

    #[test]
    fn test_header_is_a_record() {
        let records = parse("id,name\n1,Donald\n");
        assert_eq!(
            records,
            vec![Record::from(["id", "name"]), Record::from(["1", "Donald"])]
        );
    }

    #[test]
    fn test_quoted_fields() {
        let records = parse("\"dduck\",\"Duck, Donald\",\"\"\n\"say \"\"hi\"\"\",x,\"a\nb\"\n");
        assert_eq!(records[0], Record::from(["dduck", "Duck, Donald", ""]));
        assert_eq!(records[1], Record::from(["say \"hi\"", "x", "a\nb"]));
    }

    #[test]
    fn test_blank_lines_are_empty_records() {
        let blank = Record::default();
        let a = Record::from(["a"]);
        let b = Record::from(["b"]);

        assert_eq!(parse("a\n\nb\n"), vec![a.clone(), blank.clone(), b.clone()]);
        assert_eq!(parse("a\r\n\r\nb\r\n"), vec![a.clone(), blank.clone(), b.clone()]);
        assert_eq!(parse("\na\n\n\n"), vec![blank.clone(), a.clone(), blank.clone(), blank.clone()]);
        assert_eq!(parse("a\r\n\nb"), vec![a.clone(), blank.clone(), b.clone()]);
        assert_eq!(
            parse("\"x\ny\"\n\nb\n"),
            vec![Record::from(["x\ny"]), blank, b]
        );
        assert_eq!(parse("a\r\n"), vec![a]);
    }

    #[test]
    fn test_ragged_rows_and_crlf() {
        let records = parse("a,b,c\r\nd\r\ne,f\r\n");
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], Record::from(["d"]));
        assert_eq!(records[2], Record::from(["e", "f"]));
    }

    #[test]
    fn test_no_type_coercion() {
        let records = parse(" 42 ,3.10,true\n");
        assert_eq!(records[0], Record::from([" 42 ", "3.10", "true"]));
    }

    #[test]
    fn test_custom_delimiter() {
        let records = CsvParser::new(b';')
            .parse(&mut "a;b,c\n".as_bytes())
            .unwrap();
        assert_eq!(records, vec![Record::from(["a", "b,c"])]);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        assert!(CsvParser::default().parse(&mut &bytes[..]).is_err());
    }

    #[test]
    fn test_extensions() {
        let parser = CsvParser::default();
        assert!(parser.supports_extension("csv"));
        assert!(!parser.supports_extension("tsv"));
    }
}
