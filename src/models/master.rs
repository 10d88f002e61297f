//! Master data: the Category → Brand → Type classification hierarchy

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub category_name: String,
    pub description: Option<String>,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}

/// Brand, belonging to one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub brand_name: String,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}

/// Item type (model), belonging to one brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    pub id: i64,
    pub brand_id: i64,
    pub brand_name: Option<String>,
    pub type_name: String,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100))]
    pub category_name: String,
    pub description: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 100))]
    pub category_name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBrand {
    pub category_id: i64,
    #[validate(length(min = 1, max = 100))]
    pub brand_name: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateBrand {
    pub category_id: Option<i64>,
    #[validate(length(min = 1, max = 100))]
    pub brand_name: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemType {
    pub brand_id: i64,
    #[validate(length(min = 1, max = 100))]
    pub type_name: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateItemType {
    pub brand_id: Option<i64>,
    #[validate(length(min = 1, max = 100))]
    pub type_name: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_deserializes_without_active_flag() {
        let brand: Brand =
            serde_json::from_str(r#"{"id":1,"category_id":2,"category_name":null,"brand_name":"HP"}"#)
                .unwrap();
        assert!(brand.is_active);
        assert_eq!(brand.brand_name, "HP");
    }

    #[test]
    fn test_empty_names_rejected() {
        let cat = CreateCategory {
            category_name: String::new(),
            description: None,
        };
        assert!(cat.validate().is_err());

        let ty = CreateItemType {
            brand_id: 1,
            type_name: "LaserJet 1020".to_string(),
        };
        assert!(ty.validate().is_ok());
    }
}
