use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status of a call request, independent of the parent complaint's status.
///
/// `completed` and `cancelled` are terminal; a complaint may accumulate many
/// terminal call-request rows but at most one non-terminal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "call_request_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum CallRequestStatus {
    Pending,
    Scheduled,
    Completed,
    Cancelled,
}

impl CallRequestStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            CallRequestStatus::Completed | CallRequestStatus::Cancelled
        )
    }

    pub fn can_transition_to(self, target: CallRequestStatus) -> bool {
        use CallRequestStatus::*;
        matches!(
            (self, target),
            (Pending, Scheduled) | (Pending, Cancelled) | (Scheduled, Completed) | (Scheduled, Cancelled)
        )
    }
}

impl std::fmt::Display for CallRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallRequestStatus::Pending => write!(f, "pending"),
            CallRequestStatus::Scheduled => write!(f, "scheduled"),
            CallRequestStatus::Completed => write!(f, "completed"),
            CallRequestStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for CallRequestStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CallRequestStatus::Pending),
            "scheduled" => Ok(CallRequestStatus::Scheduled),
            "completed" => Ok(CallRequestStatus::Completed),
            "cancelled" => Ok(CallRequestStatus::Cancelled),
            _ => Err(()),
        }
    }
}
