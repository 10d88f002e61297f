//! Dashboard and reset endpoints

use reqwest::Method;

use super::{ApiClient, ApiRequest, QueryParams};
use crate::{
    error::AppResult,
    models::{DashboardSummary, Distribution, ResetOutcome},
};

impl ApiClient {
    /// GET /dashboard/summary
    pub async fn dashboard_summary(&self) -> AppResult<DashboardSummary> {
        self.get(&["dashboard", "summary"], None).await
    }

    /// GET /dashboard/recent-distributions
    pub async fn recent_distributions(&self, query: Option<&QueryParams>) -> AppResult<Vec<Distribution>> {
        self.get(&["dashboard", "recent-distributions"], query).await
    }

    /// POST /reset
    ///
    /// Deletes every item, distribution and master-data record on the server.
    /// There is no undo.
    pub async fn reset_all_data(&self) -> AppResult<ResetOutcome> {
        tracing::warn!("Requesting full data reset");
        self.fetch(ApiRequest::new(Method::POST, &["reset"])).await
    }
}
