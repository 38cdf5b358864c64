//! Source identifiers

use std::fmt;

use serde::Serialize;

/// Label of one of the two compared inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    FileOne,
    FileTwo,
}

impl SourceId {
    /// Both identifiers, in reporting order
    pub const ALL: [SourceId; 2] = [SourceId::FileOne, SourceId::FileTwo];

    /// The label used in result maps and output
    pub fn as_str(self) -> &'static str {
        match self {
            SourceId::FileOne => "file_one",
            SourceId::FileTwo => "file_two",
        }
    }

    /// The opposite side of the comparison
    pub fn other(self) -> SourceId {
        match self {
            SourceId::FileOne => SourceId::FileTwo,
            SourceId::FileTwo => SourceId::FileOne,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            SourceId::FileOne => 0,
            SourceId::FileTwo => 1,
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file_one" => Ok(SourceId::FileOne),
            "file_two" => Ok(SourceId::FileTwo),
            _ => Err(format!("Unknown source: {}", s)),
        }
    }
}
