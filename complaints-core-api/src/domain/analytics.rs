use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One calendar day in the submission trend; days without submissions carry
/// a zero count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub count: i64,
}

/// One bucket of a status/category/priority distribution. Only observed
/// values are present; absent buckets are not zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub name: String,
    pub value: i64,
}

/// Grouping dimension for distribution queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Status,
    Category,
    Priority,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Status => write!(f, "status"),
            Dimension::Category => write!(f, "category"),
            Dimension::Priority => write!(f, "priority"),
        }
    }
}

impl FromStr for Dimension {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Dimension::Status),
            "category" => Ok(Dimension::Category),
            "priority" => Ok(Dimension::Priority),
            _ => Err(()),
        }
    }
}
