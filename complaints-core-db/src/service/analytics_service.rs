use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use complaints_core_api::domain::{AuthContext, Dimension, DistributionEntry, TrendPoint};
use complaints_core_api::error::{CoreError, CoreResult};

use crate::repository::complaint_repository::ComplaintRepository;

/// Read-side aggregations over the complaint store for staff dashboards.
///
/// Everything here is recomputed from the current complaint set on each
/// call; slightly stale counts are acceptable and nothing is cached.
pub struct AnalyticsService {
    complaints: Arc<dyn ComplaintRepository>,
}

impl AnalyticsService {
    pub fn new(complaints: Arc<dyn ComplaintRepository>) -> Self {
        Self { complaints }
    }

    fn ensure_staff(ctx: &AuthContext) -> CoreResult<()> {
        if ctx.is_admin() {
            Ok(())
        } else {
            Err(CoreError::Forbidden(
                "analytics are restricted to staff".into(),
            ))
        }
    }

    /// Daily submission counts for every calendar day in `[start, end]`,
    /// zero-filled and chronological.
    pub async fn trends(
        &self,
        ctx: &AuthContext,
        start: NaiveDate,
        end: NaiveDate,
    ) -> CoreResult<Vec<TrendPoint>> {
        Self::ensure_staff(ctx)?;
        if start > end {
            return Err(CoreError::Validation(
                "start date must not be after end date".into(),
            ));
        }

        let counts: HashMap<NaiveDate, i64> = self
            .complaints
            .count_by_day(start, end)
            .await
            .map_err(super::db_err)?
            .into_iter()
            .collect();

        let points = start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|date| TrendPoint {
                date,
                count: counts.get(&date).copied().unwrap_or(0),
            })
            .collect();
        Ok(points)
    }

    /// Complaint counts grouped by the requested dimension. Only observed
    /// values appear; absent buckets are not zero-filled.
    pub async fn distribution(
        &self,
        ctx: &AuthContext,
        dimension: Dimension,
    ) -> CoreResult<Vec<DistributionEntry>> {
        Self::ensure_staff(ctx)?;

        let entries = match dimension {
            Dimension::Status => self
                .complaints
                .count_by_status()
                .await
                .map_err(super::db_err)?
                .into_iter()
                .map(|(status, value)| DistributionEntry {
                    name: status.to_string(),
                    value,
                })
                .collect(),
            Dimension::Category => self
                .complaints
                .count_by_category()
                .await
                .map_err(super::db_err)?
                .into_iter()
                .map(|(name, value)| DistributionEntry { name, value })
                .collect(),
            Dimension::Priority => self
                .complaints
                .count_by_priority()
                .await
                .map_err(super::db_err)?
                .into_iter()
                .map(|(priority, value)| DistributionEntry {
                    name: priority.to_string(),
                    value,
                })
                .collect(),
        };
        Ok(entries)
    }
}
