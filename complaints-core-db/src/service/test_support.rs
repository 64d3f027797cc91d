//! In-memory repository fakes and fixtures for service tests.
//!
//! The fakes hold their rows behind a single mutex each, so the
//! compare-and-set and insert-if-no-active contracts behave atomically,
//! matching what the SQL implementations guarantee.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use complaints_core_api::domain::{
    CallRequestStatus, ComplaintFilters, ComplaintStatus, NewComplaint, Priority,
};
use heapless::String as HeaplessString;
use uuid::Uuid;

use crate::models::call_request::CallRequestModel;
use crate::models::comment::CommentModel;
use crate::models::complaint::ComplaintModel;
use crate::models::principal::PrincipalModel;
use crate::repository::call_request_repository::CallRequestRepository;
use crate::repository::comment_repository::CommentRepository;
use crate::repository::complaint_repository::ComplaintRepository;
use crate::repository::principal_repository::PrincipalRepository;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A complaint row owned by `owner`, for tests that bypass the service.
pub fn sample_complaint(owner: Uuid) -> ComplaintModel {
    let now = Utc::now();
    ComplaintModel {
        id: Uuid::new_v4(),
        reference_id: HeaplessString::from_str("CMP-TEST01").unwrap(),
        title: HeaplessString::from_str("Leaky faucet").unwrap(),
        description: HeaplessString::from_str("Room 14, drips all night").unwrap(),
        category: HeaplessString::from_str("Hostel").unwrap(),
        priority: Priority::Medium,
        status: ComplaintStatus::New,
        anonymous: false,
        attachment_urls: Vec::new(),
        owner_person_id: owner,
        created_at: now,
        updated_at: now,
    }
}

/// Valid intake payload with the given title.
pub fn new_complaint_input(title: &str) -> NewComplaint {
    NewComplaint {
        title: title.to_string(),
        description: format!("details about: {title}"),
        category: "Hostel".to_string(),
        priority: "medium".to_string(),
        anonymous: false,
        attachment_urls: Vec::new(),
    }
}

fn matches_filters(complaint: &ComplaintModel, filters: &ComplaintFilters) -> bool {
    if let Some(status) = filters.status {
        if complaint.status != status {
            return false;
        }
    }
    if let Some(priority) = filters.priority {
        if complaint.priority != priority {
            return false;
        }
    }
    if let Some(category) = &filters.category {
        if complaint.category.as_str() != category {
            return false;
        }
    }
    if let Some(search) = &filters.search {
        let needle = search.to_lowercase();
        let haystacks = [
            complaint.title.as_str().to_lowercase(),
            complaint.description.as_str().to_lowercase(),
            complaint.reference_id.as_str().to_lowercase(),
        ];
        if !haystacks.iter().any(|h| h.contains(&needle)) {
            return false;
        }
    }
    true
}

#[derive(Default)]
pub struct InMemoryComplaintRepository {
    rows: Mutex<Vec<ComplaintModel>>,
}

impl InMemoryComplaintRepository {
    /// Rewrite a row's creation time, for trend tests.
    pub fn backdate(&self, id: Uuid, created_at: DateTime<Utc>) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
            row.created_at = created_at;
        }
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn create(
        &self,
        complaint: ComplaintModel,
    ) -> Result<Option<ComplaintModel>, BoxError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|r| r.reference_id == complaint.reference_id)
        {
            return Ok(None);
        }
        rows.push(complaint.clone());
        Ok(Some(complaint))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ComplaintModel>, BoxError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn exists_by_reference_id(&self, reference_id: &str) -> Result<bool, BoxError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|r| r.reference_id.as_str() == reference_id))
    }

    async fn list(
        &self,
        owner: Option<Uuid>,
        filters: &ComplaintFilters,
    ) -> Result<Vec<ComplaintModel>, BoxError> {
        let rows = self.rows.lock().unwrap();
        let mut result: Vec<ComplaintModel> = rows
            .iter()
            .filter(|r| owner.map_or(true, |o| r.owner_person_id == o))
            .filter(|r| matches_filters(r, filters))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected: ComplaintStatus,
        target: ComplaintStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ComplaintModel>, BoxError> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|r| r.id == id && r.status == expected)
        {
            Some(row) => {
                row.status = target;
                row.updated_at = updated_at;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn count_by_day(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, i64)>, BoxError> {
        let rows = self.rows.lock().unwrap();
        let mut counts: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for row in rows.iter() {
            let day = row.created_at.date_naive();
            if day >= start && day <= end {
                *counts.entry(day).or_insert(0) += 1;
            }
        }
        Ok(counts.into_iter().collect())
    }

    async fn count_by_status(&self) -> Result<Vec<(ComplaintStatus, i64)>, BoxError> {
        let rows = self.rows.lock().unwrap();
        let mut counts: BTreeMap<String, (ComplaintStatus, i64)> = BTreeMap::new();
        for row in rows.iter() {
            counts
                .entry(row.status.to_string())
                .or_insert((row.status, 0))
                .1 += 1;
        }
        Ok(counts.into_values().collect())
    }

    async fn count_by_category(&self) -> Result<Vec<(String, i64)>, BoxError> {
        let rows = self.rows.lock().unwrap();
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for row in rows.iter() {
            *counts.entry(row.category.as_str().to_string()).or_insert(0) += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn count_by_priority(&self) -> Result<Vec<(Priority, i64)>, BoxError> {
        let rows = self.rows.lock().unwrap();
        let mut counts: BTreeMap<String, (Priority, i64)> = BTreeMap::new();
        for row in rows.iter() {
            counts
                .entry(row.priority.to_string())
                .or_insert((row.priority, 0))
                .1 += 1;
        }
        Ok(counts.into_values().collect())
    }
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    rows: Mutex<Vec<CommentModel>>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: CommentModel) -> Result<CommentModel, BoxError> {
        let mut rows = self.rows.lock().unwrap();
        rows.push(comment.clone());
        Ok(comment)
    }

    async fn list_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<Vec<CommentModel>, BoxError> {
        let rows = self.rows.lock().unwrap();
        let mut result: Vec<CommentModel> = rows
            .iter()
            .filter(|r| r.complaint_id == complaint_id)
            .cloned()
            .collect();
        // Stable sort preserves insertion order for equal timestamps.
        result.sort_by_key(|r| r.created_at);
        Ok(result)
    }
}

#[derive(Default)]
pub struct InMemoryCallRequestRepository {
    rows: Mutex<Vec<CallRequestModel>>,
}

#[async_trait]
impl CallRequestRepository for InMemoryCallRequestRepository {
    async fn create_if_no_active(
        &self,
        request: CallRequestModel,
    ) -> Result<Option<CallRequestModel>, BoxError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|r| r.complaint_id == request.complaint_id && r.is_active())
        {
            return Ok(None);
        }
        rows.push(request.clone());
        Ok(Some(request))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CallRequestModel>, BoxError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn find_active_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<Option<CallRequestModel>, BoxError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.complaint_id == complaint_id && r.is_active())
            .cloned())
    }

    async fn schedule(
        &self,
        id: Uuid,
        scheduled_time: DateTime<Utc>,
        admin_notes: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, BoxError> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|r| r.id == id && r.status == CallRequestStatus::Pending)
        {
            Some(row) => {
                row.status = CallRequestStatus::Scheduled;
                row.scheduled_time = Some(scheduled_time);
                row.admin_notes = admin_notes
                    .map(HeaplessString::from_str)
                    .transpose()
                    .map_err(|_| "admin notes too long")?;
                row.updated_at = updated_at;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn complete(
        &self,
        id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, BoxError> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|r| r.id == id && r.status == CallRequestStatus::Scheduled)
        {
            Some(row) => {
                row.status = CallRequestStatus::Completed;
                row.updated_at = updated_at;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn cancel(
        &self,
        id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, BoxError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == id && r.is_active()) {
            Some(row) => {
                row.status = CallRequestStatus::Cancelled;
                row.updated_at = updated_at;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }
}

#[derive(Default)]
pub struct InMemoryPrincipalRepository {
    rows: Mutex<Vec<PrincipalModel>>,
}

#[async_trait]
impl PrincipalRepository for InMemoryPrincipalRepository {
    async fn create(&self, principal: PrincipalModel) -> Result<PrincipalModel, BoxError> {
        let mut rows = self.rows.lock().unwrap();
        rows.push(principal.clone());
        Ok(principal)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PrincipalModel>, BoxError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }
}
