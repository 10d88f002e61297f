//! OPD (organizational unit) and OPD location models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

/// Organizational unit that can hold distributed items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opd {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create OPD request
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOpd {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub address: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub contact_person: Option<String>,
}

/// Update OPD request
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateOpd {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub is_active: Option<bool>,
}

/// A named place inside one OPD (room, floor, building...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpdLocation {
    pub id: i64,
    pub opd_id: i64,
    pub opd_name: Option<String>,
    pub location_name: String,
    pub description: Option<String>,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOpdLocation {
    pub opd_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub location_name: String,
    pub description: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateOpdLocation {
    #[validate(length(min = 1, max = 255))]
    pub location_name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
