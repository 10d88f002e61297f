//! Item (stock entry) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use super::enums::{Condition, Location};
use crate::api::QueryParams;
use crate::error::{AppError, AppResult};

/// Item as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub serial_number: String,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub brand_id: Option<i64>,
    pub brand_name: Option<String>,
    pub type_id: Option<i64>,
    pub type_name: Option<String>,
    pub condition: Condition,
    pub current_location: Location,
    pub current_opd_id: Option<i64>,
    pub current_opd_name: Option<String>,
    pub specific_location: Option<String>,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Item {
    /// An item placed at an OPD must say which one.
    pub fn check_placement(&self) -> AppResult<()> {
        if self.current_location == Location::Opd && self.current_opd_id.is_none() {
            return Err(AppError::Validation(format!(
                "item {} is located at an OPD but has no current OPD",
                self.serial_number
            )));
        }
        Ok(())
    }

    /// "Brand Type" label used in lists, falling back to the serial number
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.brand_name.as_deref(), self.type_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            self.serial_number.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Create item request
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 100))]
    pub serial_number: String,
    pub category_id: i64,
    pub brand_id: i64,
    pub type_id: i64,
    pub condition: Condition,
    pub specific_location: Option<String>,
}

/// Update item request; absent fields are left unchanged
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 100))]
    pub serial_number: Option<String>,
    pub category_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub type_id: Option<i64>,
    pub condition: Option<Condition>,
    pub specific_location: Option<String>,
    pub is_active: Option<bool>,
}

/// Filters for the paginated stock list
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub condition: Option<Condition>,
    pub location: Option<Location>,
    pub opd_id: Option<i64>,
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

impl From<&ItemQuery> for QueryParams {
    fn from(q: &ItemQuery) -> Self {
        QueryParams::new()
            .with_opt("page", q.page)
            .with_opt("per_page", q.per_page)
            .with_opt("condition", q.condition.map(|c| c.as_str()))
            .with_opt("location", q.location.map(|l| l.as_str()))
            .with_opt("opd_id", q.opd_id)
            .with_opt("category_id", q.category_id)
            .with_opt("search", q.search.as_deref())
    }
}
