//! Row-set comparison engine

mod cache;
mod comparator;
mod source;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{Record, RecordSet, SourceId};

pub use cache::ComparisonCache;
pub use comparator::FileComparator;
pub use source::Source;

/// Records exclusive to each source, keyed `file_one` then `file_two`
pub type UniqueRecords = IndexMap<SourceId, RecordSet>;

/// Statistics about one comparison
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonStats {
    /// Rows read from each source, duplicates included
    pub rows: [usize; 2],
    /// Distinct records in each source
    pub distinct: [usize; 2],
    pub matching: usize,
    pub unique: [usize; 2],
}

impl ComparisonStats {
    /// Rows of `source` that collapsed into an earlier identical row
    pub fn duplicates(&self, source: SourceId) -> usize {
        self.rows[source.index()] - self.distinct[source.index()]
    }

    pub fn rows(&self, source: SourceId) -> usize {
        self.rows[source.index()]
    }

    pub fn unique(&self, source: SourceId) -> usize {
        self.unique[source.index()]
    }

    /// Check if either source holds a record the other lacks
    pub fn has_differences(&self) -> bool {
        self.unique.iter().any(|&n| n > 0)
    }
}

/// Result of comparing two record sources
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Records present in both sources
    pub matching: RecordSet,
    /// Records present in exactly one source
    pub unique: UniqueRecords,
    pub stats: ComparisonStats,
}

impl Comparison {
    /// Records found only in `source`
    pub fn unique_to(&self, source: SourceId) -> &RecordSet {
        &self.unique[&source]
    }

    pub fn has_differences(&self) -> bool {
        self.stats.has_differences()
    }
}

/// Classify two record sequences with set algebra.
///
/// Duplicate rows within one sequence collapse to a single record, and
/// the order of elements in the produced sets is unspecified.
pub fn compare_records(file_one: Vec<Record>, file_two: Vec<Record>) -> Comparison {
    let rows = [file_one.len(), file_two.len()];
    let one: RecordSet = file_one.into_iter().collect();
    let two: RecordSet = file_two.into_iter().collect();

    let matching: RecordSet = one.intersection(&two).cloned().collect();
    let only_one: RecordSet = one.difference(&two).cloned().collect();
    let only_two: RecordSet = two.difference(&one).cloned().collect();

    let stats = ComparisonStats {
        rows,
        distinct: [one.len(), two.len()],
        matching: matching.len(),
        unique: [only_one.len(), only_two.len()],
    };

    let mut unique = UniqueRecords::with_capacity(2);
    unique.insert(SourceId::FileOne, only_one);
    unique.insert(SourceId::FileTwo, only_two);

    Comparison {
        matching,
        unique,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(records: &[Record]) -> RecordSet {
        records.iter().cloned().collect()
    }

    fn header() -> Record {
        Record::from(["UserId", "Last Name", "User Type"])
    }

    #[test]
    fn test_classifies_rows() {
        let a = vec![
            header(),
            Record::from(["dduck", "Duck", "registered"]),
            Record::from(["mmouse", "Mouse", "maintain"]),
        ];
        let b = vec![
            header(),
            Record::from(["mmouse", "Mouse", "maintain"]),
            Record::from(["goofy", "Goofy", "maintain"]),
        ];

        let result = compare_records(a, b);

        assert_eq!(
            result.matching,
            set(&[header(), Record::from(["mmouse", "Mouse", "maintain"])])
        );
        assert_eq!(
            result.unique_to(SourceId::FileOne),
            &set(&[Record::from(["dduck", "Duck", "registered"])])
        );
        assert_eq!(
            result.unique_to(SourceId::FileTwo),
            &set(&[Record::from(["goofy", "Goofy", "maintain"])])
        );
        assert!(result.has_differences());
    }

    #[test]
    fn test_unique_keys_are_ordered() {
        let result = compare_records(Vec::new(), Vec::new());
        let keys: Vec<_> = result.unique.keys().copied().collect();
        assert_eq!(keys, SourceId::ALL);
        assert!(result.matching.is_empty());
        assert!(!result.has_differences());
    }

    #[test]
    fn test_duplicates_collapse() {
        let row = Record::from(["a", "1"]);
        let result = compare_records(vec![row.clone(), row.clone(), row.clone()], vec![row.clone()]);

        assert_eq!(result.matching, set(&[row]));
        assert_eq!(result.stats.rows(SourceId::FileOne), 3);
        assert_eq!(result.stats.duplicates(SourceId::FileOne), 2);
        assert_eq!(result.stats.duplicates(SourceId::FileTwo), 0);
        assert!(!result.has_differences());
    }

    #[test]
    fn test_position_does_not_matter() {
        let a = vec![Record::from(["1"]), Record::from(["2"])];
        let b = vec![Record::from(["2"]), Record::from(["1"])];
        let result = compare_records(a, b);
        assert_eq!(result.stats.matching, 2);
        assert!(!result.has_differences());
    }

    #[test]
    fn test_serializes_unique_by_label() {
        let result = compare_records(vec![Record::from(["x"])], Vec::new());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["unique"]["file_one"], serde_json::json!([["x"]]));
        assert_eq!(json["unique"]["file_two"], serde_json::json!([]));
        assert_eq!(json["stats"]["unique"], serde_json::json!([1, 0]));
    }
}
