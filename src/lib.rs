//! rowmatch - Set comparison of CSV rows
//!
//! Loads two CSV files as sets of records and reports which records both
//! files share and which are unique to each. Rows are compared as raw
//! string tuples: the header is an ordinary record, and a row repeated
//! within one file counts once.
//!
//! ```no_run
//! use rowmatch::{FileComparator, SourceId};
//!
//! let mut comparator = FileComparator::new("old_users.csv", "new_users.csv")?;
//! for record in comparator.matching_records()? {
//!     println!("{record}");
//! }
//! let unique = comparator.unique_records()?;
//! println!("{} only in file_one", unique[&SourceId::FileOne].len());
//! # Ok::<(), rowmatch::Error>(())
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;

pub use compare::{compare_records, Comparison, FileComparator};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{Record, SourceId};
