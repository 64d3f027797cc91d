use serde::{Deserialize, Serialize};

use super::complaint_status::ComplaintStatus;
use super::priority::Priority;

/// Listing filters. All fields are conjunctive; `search` matches
/// case-insensitively over title, description, and reference id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplaintFilters {
    pub status: Option<ComplaintStatus>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ComplaintFilters {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_status(status: ComplaintStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
