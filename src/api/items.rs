//! Item (stock) endpoints

use reqwest::Method;

use super::{ApiClient, QueryParams};
use crate::{
    error::AppResult,
    models::{
        item::{CreateItem, Item, UpdateItem},
        Paginated,
    },
};

impl ApiClient {
    /// List items with filters and pagination
    pub async fn list_items(&self, query: Option<&QueryParams>) -> AppResult<Paginated<Item>> {
        self.get(&["items"], query).await
    }

    /// Free-text search on serial number, brand and type
    pub async fn search_items(&self, q: &str) -> AppResult<Vec<Item>> {
        let query = QueryParams::new().with("q", q);
        self.get(&["items", "search"], Some(&query)).await
    }

    pub async fn get_item(&self, id: i64) -> AppResult<Item> {
        self.get(&["items", id.to_string().as_str()], None).await
    }

    pub async fn create_item(&self, item: &CreateItem) -> AppResult<Item> {
        self.send_json(Method::POST, &["items"], item).await
    }

    pub async fn update_item(&self, id: i64, item: &UpdateItem) -> AppResult<Item> {
        self.send_json(Method::PUT, &["items", id.to_string().as_str()], item).await
    }

    pub async fn delete_item(&self, id: i64) -> AppResult<()> {
        self.delete(&["items", id.to_string().as_str()]).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::{transport::MockTransport, RawResponse};

    #[tokio::test]
    async fn test_search_sends_q_param() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::GET
                    && req.path() == "/items/search"
                    && req.query == vec![("q".to_string(), "thinkpad".to_string())]
            })
            .returning(|_| Ok(RawResponse { status: 200, body: b"[]".to_vec() }));
        let client = ApiClient::with_transport(Arc::new(transport));

        let items = client.search_items("thinkpad").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_update_returns_server_representation() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::PUT
                    && req.path() == "/items/5"
                    && req.body == Some(serde_json::json!({ "specific_location": "Lantai 2" }))
            })
            .returning(|_| {
                Ok(RawResponse {
                    status: 200,
                    body: br#"{"id":5,"serial_number":"SN-5","category_id":null,"category_name":null,
                        "brand_id":null,"brand_name":null,"type_id":null,"type_name":null,
                        "condition":"Layak Pakai","current_location":"Gudang","current_opd_id":null,
                        "current_opd_name":null,"specific_location":"Lantai 2 (Gudang Utama)",
                        "is_active":true,"created_at":null,"updated_at":null}"#
                        .to_vec(),
                })
            });
        let client = ApiClient::with_transport(Arc::new(transport));

        let update = UpdateItem {
            specific_location: Some("Lantai 2".to_string()),
            ..Default::default()
        };
        let item = client.update_item(5, &update).await.unwrap();
        assert_eq!(item.specific_location.as_deref(), Some("Lantai 2 (Gudang Utama)"));
    }

    #[tokio::test]
    async fn test_validation_failure_status_is_kept() {
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|_| {
            Ok(RawResponse {
                status: 400,
                body: br#"{"error":"serial_number already exists"}"#.to_vec(),
            })
        });
        let client = ApiClient::with_transport(Arc::new(transport));

        let err = client.get_item(1).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "serial_number already exists");
    }
}
