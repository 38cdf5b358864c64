//! Record data structure

use std::fmt;

use serde::Serialize;

/// One parsed CSV row: an ordered tuple of raw string fields.
///
/// Equality and hashing are structural over the fields, so a header row
/// is just another record. Ordering is lexicographic and only used to make
/// rendered output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Create a record from its fields
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field values in column order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Get a field by position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields in this row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl From<&csv::StringRecord> for Record {
    fn from(record: &csv::StringRecord) -> Self {
        Self::new(record.iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Record {
    fn from(fields: [&str; N]) -> Self {
        Self::new(fields.iter().map(|f| f.to_string()).collect())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        let a = Record::from(["mmouse", "Mouse", "maintain"]);
        let b = Record::new(vec!["mmouse".into(), "Mouse".into(), "maintain".into()]);
        assert_eq!(a, b);

        let set: HashSet<Record> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_width_is_part_of_identity() {
        assert_ne!(Record::from(["a", "b"]), Record::from(["a", "b", ""]));
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&Record::from(["a", "b,c"])).unwrap();
        assert_eq!(json, r#"["a","b,c"]"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(Record::from(["x", "", "y"]).to_string(), "(x, , y)");
    }
}
