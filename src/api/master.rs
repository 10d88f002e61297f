//! Category, brand and type endpoints

use reqwest::Method;

use super::{ApiClient, QueryParams};
use crate::{
    error::AppResult,
    models::master::{
        Brand, Category, CreateBrand, CreateCategory, CreateItemType, ItemType, UpdateBrand,
        UpdateCategory, UpdateItemType,
    },
};

impl ApiClient {
    // Categories

    pub async fn list_categories(&self, query: Option<&QueryParams>) -> AppResult<Vec<Category>> {
        self.get(&["categories"], query).await
    }

    pub async fn get_category(&self, id: i64) -> AppResult<Category> {
        self.get(&["categories", id.to_string().as_str()], None).await
    }

    pub async fn create_category(&self, category: &CreateCategory) -> AppResult<Category> {
        self.send_json(Method::POST, &["categories"], category).await
    }

    pub async fn update_category(&self, id: i64, category: &UpdateCategory) -> AppResult<Category> {
        self.send_json(Method::PUT, &["categories", id.to_string().as_str()], category).await
    }

    pub async fn delete_category(&self, id: i64) -> AppResult<()> {
        self.delete(&["categories", id.to_string().as_str()]).await
    }

    // Brands

    pub async fn list_brands(&self, query: Option<&QueryParams>) -> AppResult<Vec<Brand>> {
        self.get(&["brands"], query).await
    }

    /// Brands of one category
    pub async fn list_brands_of(&self, category_id: i64) -> AppResult<Vec<Brand>> {
        let query = QueryParams::new().with("category_id", category_id);
        self.list_brands(Some(&query)).await
    }

    pub async fn get_brand(&self, id: i64) -> AppResult<Brand> {
        self.get(&["brands", id.to_string().as_str()], None).await
    }

    pub async fn create_brand(&self, brand: &CreateBrand) -> AppResult<Brand> {
        self.send_json(Method::POST, &["brands"], brand).await
    }

    pub async fn update_brand(&self, id: i64, brand: &UpdateBrand) -> AppResult<Brand> {
        self.send_json(Method::PUT, &["brands", id.to_string().as_str()], brand).await
    }

    pub async fn delete_brand(&self, id: i64) -> AppResult<()> {
        self.delete(&["brands", id.to_string().as_str()]).await
    }

    // Types

    pub async fn list_types(&self, query: Option<&QueryParams>) -> AppResult<Vec<ItemType>> {
        self.get(&["types"], query).await
    }

    /// Types of one brand
    pub async fn list_types_of(&self, brand_id: i64) -> AppResult<Vec<ItemType>> {
        let query = QueryParams::new().with("brand_id", brand_id);
        self.list_types(Some(&query)).await
    }

    pub async fn get_type(&self, id: i64) -> AppResult<ItemType> {
        self.get(&["types", id.to_string().as_str()], None).await
    }

    pub async fn create_type(&self, item_type: &CreateItemType) -> AppResult<ItemType> {
        self.send_json(Method::POST, &["types"], item_type).await
    }

    pub async fn update_type(&self, id: i64, item_type: &UpdateItemType) -> AppResult<ItemType> {
        self.send_json(Method::PUT, &["types", id.to_string().as_str()], item_type).await
    }

    pub async fn delete_type(&self, id: i64) -> AppResult<()> {
        self.delete(&["types", id.to_string().as_str()]).await
    }
}
