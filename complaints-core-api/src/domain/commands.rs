use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Intake payload for filing a complaint.
///
/// Category and priority arrive as raw strings from the intake forms and are
/// validated against the recognized sets by the complaint service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewComplaint {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 1000, message = "description must be 1-1000 characters"))]
    pub description: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "priority is required"))]
    pub priority: String,

    #[serde(default)]
    pub anonymous: bool,

    /// Opaque storage URLs for uploaded attachments, in upload order.
    #[serde(default)]
    pub attachment_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewComment {
    #[validate(length(min = 1, max = 1000, message = "comment body must not be empty"))]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCallRequest {
    #[validate(length(max = 500, message = "notes must be at most 500 characters"))]
    pub notes: Option<String>,

    /// Requester hint only; staff confirm the actual time at scheduling.
    pub preferred_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleCallRequest {
    pub scheduled_time: DateTime<Utc>,

    #[validate(length(max = 500, message = "admin notes must be at most 500 characters"))]
    pub admin_notes: Option<String>,
}
