//! Data model for compared rows

mod record;
mod source;

pub use record::Record;
pub use source::SourceId;

/// A set of distinct records
pub type RecordSet = rustc_hash::FxHashSet<Record>;
