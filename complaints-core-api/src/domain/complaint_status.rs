use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a complaint.
///
/// The nominal path is `new -> in_review -> in_progress -> resolved ->
/// closed`; `reopened` is reachable from `resolved` or `closed` and feeds
/// back into triage. `closed` is terminal in practice but reachable again
/// through `reopened`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "complaint_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    New,
    InReview,
    InProgress,
    Resolved,
    Closed,
    Reopened,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 6] = [
        ComplaintStatus::New,
        ComplaintStatus::InReview,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
        ComplaintStatus::Closed,
        ComplaintStatus::Reopened,
    ];

    /// Allowed edge set of the status state machine.
    ///
    /// A reopened complaint restarts triage with the same options as a
    /// freshly filed one.
    pub fn can_transition_to(self, target: ComplaintStatus) -> bool {
        use ComplaintStatus::*;
        matches!(
            (self, target),
            (New, InReview)
                | (New, InProgress)
                | (InReview, InProgress)
                | (InProgress, Resolved)
                | (Resolved, Closed)
                | (Resolved, Reopened)
                | (Closed, Reopened)
                | (Reopened, InReview)
                | (Reopened, InProgress)
        )
    }

    /// Whether the owner may request a reopen from this status.
    pub fn is_reopenable(self) -> bool {
        matches!(self, ComplaintStatus::Resolved | ComplaintStatus::Closed)
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplaintStatus::New => write!(f, "new"),
            ComplaintStatus::InReview => write!(f, "in_review"),
            ComplaintStatus::InProgress => write!(f, "in_progress"),
            ComplaintStatus::Resolved => write!(f, "resolved"),
            ComplaintStatus::Closed => write!(f, "closed"),
            ComplaintStatus::Reopened => write!(f, "reopened"),
        }
    }
}

impl FromStr for ComplaintStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ComplaintStatus::New),
            "in_review" => Ok(ComplaintStatus::InReview),
            "in_progress" => Ok(ComplaintStatus::InProgress),
            "resolved" => Ok(ComplaintStatus::Resolved),
            "closed" => Ok(ComplaintStatus::Closed),
            "reopened" => Ok(ComplaintStatus::Reopened),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_path_is_allowed() {
        use ComplaintStatus::*;
        assert!(New.can_transition_to(InReview));
        assert!(InReview.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Resolved));
        assert!(Resolved.can_transition_to(Closed));
    }

    #[test]
    fn reopen_edges() {
        use ComplaintStatus::*;
        assert!(Resolved.can_transition_to(Reopened));
        assert!(Closed.can_transition_to(Reopened));
        assert!(Reopened.can_transition_to(InReview));
        assert!(!New.can_transition_to(Reopened));
        assert!(!InProgress.can_transition_to(Reopened));
    }

    #[test]
    fn shortcuts_are_rejected() {
        use ComplaintStatus::*;
        assert!(!New.can_transition_to(Resolved));
        assert!(!New.can_transition_to(Closed));
        assert!(!InReview.can_transition_to(Closed));
        assert!(!Closed.can_transition_to(New));
    }

    #[test]
    fn wire_names_round_trip() {
        for status in ComplaintStatus::ALL {
            assert_eq!(status.to_string().parse::<ComplaintStatus>(), Ok(status));
        }
    }
}
