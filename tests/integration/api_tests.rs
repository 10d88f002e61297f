//! API integration tests against a running Inventaris backend

use inventaris_dashboard::{
    api::QueryParams,
    config::{ApiConfig, DashboardConfig},
    forms::{distribution_form, Submission},
    models::master::CreateCategory,
    ApiClient, Dashboard,
};

const BASE_URL: &str = "http://localhost:8080";

fn client() -> ApiClient {
    let config = ApiConfig {
        base_url: BASE_URL.to_string(),
        timeout_secs: 10,
    };
    ApiClient::new(&config).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_dashboard_summary() {
    let summary = client().dashboard_summary().await.expect("Failed to fetch summary");
    assert_eq!(summary.items_in_warehouse + summary.items_in_opd, summary.total_items);
}

#[tokio::test]
#[ignore]
async fn test_list_items() {
    let params = QueryParams::new().with("page", 1).with("per_page", 5);
    let page = client().list_items(Some(&params)).await.expect("Failed to list items");

    assert_eq!(page.page, 1);
    assert!(page.items.len() <= 5);
}

#[tokio::test]
#[ignore]
async fn test_get_missing_item() {
    let err = client().get_item(999_999_999).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_category() {
    let client = client();
    let created = client
        .create_category(&CreateCategory {
            category_name: "Integration Test".to_string(),
            description: None,
        })
        .await
        .expect("Failed to create category");

    assert_eq!(created.category_name, "Integration Test");

    client.delete_category(created.id).await.expect("Failed to delete category");
    assert!(client.get_category(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore]
async fn test_invalid_distribution_is_not_sent() {
    let mut dashboard = Dashboard::new(client(), DashboardConfig::default());
    let mut form = distribution_form();
    form.set_value("direction", "Gudang → OPD").unwrap();

    let outcome = dashboard.submit_distribution(&mut form).await.expect("Submission failed");
    match outcome {
        Submission::Invalid(errors) => {
            assert!(errors.contains_key("serial_number"));
            assert!(errors.contains_key("target_opd_id"));
        }
        Submission::Submitted(_) => panic!("invalid form was submitted"),
    }
}

#[tokio::test]
#[ignore]
async fn test_dashboard_refresh() {
    let mut dashboard = Dashboard::new(client(), DashboardConfig::default());
    dashboard.refresh().await;

    assert!(dashboard.summary().data().is_some());
    assert!(dashboard.top_categories().current_page().len() <= 3);
    assert!(dashboard.recent_list().current_page().len() <= 4);
}
