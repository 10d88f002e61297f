//! Distribution endpoints, keyed by distribution code

use reqwest::Method;

use super::{ApiClient, QueryParams};
use crate::{
    error::AppResult,
    models::{
        distribution::{CreateDistribution, Distribution, UpdateDistribution},
        Paginated,
    },
};

impl ApiClient {
    pub async fn list_distributions(&self, query: Option<&QueryParams>) -> AppResult<Paginated<Distribution>> {
        self.get(&["distributions"], query).await
    }

    pub async fn get_distribution(&self, code: &str) -> AppResult<Distribution> {
        self.get(&["distributions", code], None).await
    }

    pub async fn create_distribution(&self, distribution: &CreateDistribution) -> AppResult<Distribution> {
        self.send_json(Method::POST, &["distributions"], distribution).await
    }

    pub async fn update_distribution(&self, code: &str, distribution: &UpdateDistribution) -> AppResult<Distribution> {
        self.send_json(Method::PUT, &["distributions", code], distribution).await
    }

    pub async fn delete_distribution(&self, code: &str) -> AppResult<()> {
        self.delete(&["distributions", code]).await
    }
}
