//! OPD and OPD location endpoints

use reqwest::Method;

use super::{ApiClient, QueryParams};
use crate::{
    error::AppResult,
    models::opd::{CreateOpd, CreateOpdLocation, Opd, OpdLocation, UpdateOpd, UpdateOpdLocation},
};

impl ApiClient {
    pub async fn list_opds(&self, query: Option<&QueryParams>) -> AppResult<Vec<Opd>> {
        self.get(&["opds"], query).await
    }

    pub async fn get_opd(&self, id: i64) -> AppResult<Opd> {
        self.get(&["opds", id.to_string().as_str()], None).await
    }

    pub async fn create_opd(&self, opd: &CreateOpd) -> AppResult<Opd> {
        self.send_json(Method::POST, &["opds"], opd).await
    }

    pub async fn update_opd(&self, id: i64, opd: &UpdateOpd) -> AppResult<Opd> {
        self.send_json(Method::PUT, &["opds", id.to_string().as_str()], opd).await
    }

    pub async fn delete_opd(&self, id: i64) -> AppResult<()> {
        self.delete(&["opds", id.to_string().as_str()]).await
    }

    pub async fn list_opd_locations(&self, query: Option<&QueryParams>) -> AppResult<Vec<OpdLocation>> {
        self.get(&["opd-locations"], query).await
    }

    /// Locations of one OPD
    pub async fn list_opd_locations_of(&self, opd_id: i64) -> AppResult<Vec<OpdLocation>> {
        let query = QueryParams::new().with("opd_id", opd_id);
        self.list_opd_locations(Some(&query)).await
    }

    pub async fn get_opd_location(&self, id: i64) -> AppResult<OpdLocation> {
        self.get(&["opd-locations", id.to_string().as_str()], None).await
    }

    pub async fn create_opd_location(&self, location: &CreateOpdLocation) -> AppResult<OpdLocation> {
        self.send_json(Method::POST, &["opd-locations"], location).await
    }

    pub async fn update_opd_location(&self, id: i64, location: &UpdateOpdLocation) -> AppResult<OpdLocation> {
        self.send_json(Method::PUT, &["opd-locations", id.to_string().as_str()], location).await
    }

    pub async fn delete_opd_location(&self, id: i64) -> AppResult<()> {
        self.delete(&["opd-locations", id.to_string().as_str()]).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::{transport::MockTransport, RawResponse};

    #[tokio::test]
    async fn test_locations_of_one_opd() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.path() == "/opd-locations" && req.query == vec![("opd_id".to_string(), "7".to_string())]
            })
            .times(1)
            .returning(|_| {
                Ok(RawResponse {
                    status: 200,
                    body: br#"[{"id":1,"opd_id":7,"opd_name":"Bappeda","location_name":"Ruang Rapat"}]"#.to_vec(),
                })
            });
        let client = ApiClient::with_transport(Arc::new(transport));

        let locations = client.list_opd_locations_of(7).await.unwrap();
        assert_eq!(locations[0].location_name, "Ruang Rapat");
    }
}
