//! Dashboard summary snapshot and reset outcome

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Read-only summary computed by the backend; refetched on every view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_items: u64,
    pub items_in_warehouse: u64,
    pub items_in_opd: u64,
    /// Condition label → item count, as sent by the server
    #[serde(default)]
    pub condition_counts: IndexMap<String, u64>,
    #[serde(default)]
    pub top_categories: Vec<CategoryCount>,
    #[serde(default)]
    pub top_opds: Vec<OpdCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category_name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpdCount {
    pub opd_name: String,
    pub count: u64,
}

/// Response of `POST /reset`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetOutcome {
    pub success: bool,
    pub message: String,
}
