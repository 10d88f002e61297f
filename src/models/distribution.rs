//! Distribution (item movement) model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use super::enums::{Condition, Direction};
use crate::api::QueryParams;
use crate::error::{AppError, AppResult};

/// Distribution record, keyed by `distribution_code`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub id: i64,
    pub distribution_code: String,
    pub item_id: i64,
    pub serial_number: Option<String>,
    pub direction: Direction,
    pub source_opd_id: Option<i64>,
    pub source_opd_name: Option<String>,
    pub source_location: Option<String>,
    pub target_opd_id: Option<i64>,
    pub target_opd_name: Option<String>,
    pub target_location: Option<String>,
    pub distribution_date: NaiveDate,
    pub processed_by: String,
    pub condition_after: Option<Condition>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Distribution {
    /// Check that the record names the OPDs its direction requires.
    pub fn check_endpoints(&self) -> AppResult<()> {
        if self.direction.requires_target_opd() && self.target_opd_id.is_none() {
            return Err(AppError::Validation(format!(
                "distribution {} ({}) has no target OPD",
                self.distribution_code, self.direction
            )));
        }
        if self.direction.requires_source_opd() && self.source_opd_id.is_none() {
            return Err(AppError::Validation(format!(
                "distribution {} ({}) has no source OPD",
                self.distribution_code, self.direction
            )));
        }
        Ok(())
    }

    /// Short "from → to" label for list rows
    pub fn route_label(&self) -> String {
        let source = self.source_opd_name.as_deref().unwrap_or("Gudang");
        let target = self.target_opd_name.as_deref().unwrap_or("Gudang");
        match self.direction {
            Direction::GudangToOpd => format!("Gudang → {}", target),
            Direction::OpdToGudang => format!("{} → Gudang", source),
            Direction::OpdToOpd => format!("{} → {}", source, target),
        }
    }
}

/// Create distribution request
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateDistribution {
    #[validate(length(min = 1, max = 100))]
    pub serial_number: String,
    pub direction: Direction,
    pub target_opd_id: Option<i64>,
    pub target_location: Option<String>,
    pub distribution_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 100))]
    pub processed_by: String,
    pub condition_after: Option<Condition>,
    pub notes: Option<String>,
}

/// Update distribution request; absent fields are left unchanged
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDistribution {
    pub target_location: Option<String>,
    pub distribution_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 100))]
    pub processed_by: Option<String>,
    pub condition_after: Option<Condition>,
    pub notes: Option<String>,
}

/// Filters for the paginated distribution list
#[derive(Debug, Clone, Default)]
pub struct DistributionQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub direction: Option<Direction>,
    pub opd_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search: Option<String>,
}

impl From<&DistributionQuery> for QueryParams {
    fn from(q: &DistributionQuery) -> Self {
        QueryParams::new()
            .with_opt("page", q.page)
            .with_opt("per_page", q.per_page)
            .with_opt("direction", q.direction.map(|d| d.as_str()))
            .with_opt("opd_id", q.opd_id)
            .with_opt("start_date", q.start_date.map(|d| d.to_string()))
            .with_opt("end_date", q.end_date.map(|d| d.to_string()))
            .with_opt("search", q.search.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(direction: Direction) -> Distribution {
        Distribution {
            id: 1,
            distribution_code: "DST-0001".to_string(),
            item_id: 10,
            serial_number: Some("SN-10".to_string()),
            direction,
            source_opd_id: None,
            source_opd_name: None,
            source_location: None,
            target_opd_id: None,
            target_opd_name: None,
            target_location: None,
            distribution_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            processed_by: "Budi".to_string(),
            condition_after: None,
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn test_gudang_to_opd_requires_target() {
        let mut d = sample(Direction::GudangToOpd);
        assert!(d.check_endpoints().is_err());
        d.target_opd_id = Some(3);
        assert!(d.check_endpoints().is_ok());
    }

    #[test]
    fn test_opd_to_gudang_requires_source() {
        let mut d = sample(Direction::OpdToGudang);
        assert!(d.check_endpoints().is_err());
        d.source_opd_id = Some(5);
        assert!(d.check_endpoints().is_ok());
    }

    #[test]
    fn test_route_label() {
        let mut d = sample(Direction::OpdToOpd);
        d.source_opd_name = Some("Dinas Pendidikan".to_string());
        d.target_opd_name = Some("Bappeda".to_string());
        assert_eq!(d.route_label(), "Dinas Pendidikan → Bappeda");
    }

    #[test]
    fn test_create_request_serialization() {
        let req = CreateDistribution {
            serial_number: "SN1".to_string(),
            direction: Direction::GudangToOpd,
            target_opd_id: Some(2),
            target_location: None,
            distribution_date: None,
            processed_by: "Budi".to_string(),
            condition_after: None,
            notes: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "serial_number": "SN1",
                "direction": "Gudang → OPD",
                "target_opd_id": 2,
                "processed_by": "Budi"
            })
        );
    }
}
