//! Data models for Inventaris

pub mod dashboard;
pub mod distribution;
pub mod enums;
pub mod item;
pub mod master;
pub mod opd;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use dashboard::{CategoryCount, DashboardSummary, OpdCount, ResetOutcome};
pub use distribution::{CreateDistribution, Distribution, DistributionQuery, UpdateDistribution};
pub use enums::{Condition, Direction, Location};
pub use item::{CreateItem, Item, ItemQuery, UpdateItem};
pub use master::{Brand, Category, ItemType};
pub use opd::{Opd, OpdLocation};

/// Records sent without an `is_active` flag are active
pub(crate) fn default_true() -> bool {
    true
}

/// Paginated list envelope used by the items and distributions endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Records of the requested page
    pub items: Vec<T>,
    /// Total number of records matching the filters
    pub total: u64,
    /// Current page number (1-based)
    pub page: u32,
    /// Records per page
    pub per_page: u32,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 1;
        }
        (self.total.div_ceil(self.per_page as u64) as u32).max(1)
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages()
    }
}
