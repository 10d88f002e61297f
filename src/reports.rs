//! JSON export of the stock and distribution records

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    api::{ApiClient, QueryParams},
    error::{AppError, AppResult},
    models::{DashboardSummary, Distribution, Item, Paginated},
    presenter::{ConditionBreakdown, LocationSplit},
};

#[derive(Debug, Clone, Serialize)]
pub struct ReportTotals {
    pub total_items: u64,
    pub items_in_warehouse: u64,
    pub items_in_opd: u64,
    pub warehouse_percent: u8,
    pub opd_percent: u8,
}

impl From<&DashboardSummary> for ReportTotals {
    fn from(summary: &DashboardSummary) -> Self {
        let split = LocationSplit::from_summary(summary);
        Self {
            total_items: summary.total_items,
            items_in_warehouse: summary.items_in_warehouse,
            items_in_opd: summary.items_in_opd,
            warehouse_percent: split.warehouse_percent,
            opd_percent: split.opd_percent,
        }
    }
}

/// Snapshot of the summary plus every record of one kind
#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    pub generated_at: DateTime<Utc>,
    pub totals: ReportTotals,
    pub conditions: ConditionBreakdown,
    pub record_count: usize,
    pub records: Vec<T>,
}

pub type StockReport = Report<Item>;
pub type DistributionReport = Report<Distribution>;

impl<T: Serialize> Report<T> {
    pub fn new(summary: &DashboardSummary, records: Vec<T>) -> Self {
        Self {
            generated_at: Utc::now(),
            totals: ReportTotals::from(summary),
            conditions: ConditionBreakdown::from_summary(summary),
            record_count: records.len(),
            records,
        }
    }

    pub fn write_json<W: Write>(&self, writer: W) -> AppResult<()> {
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            if e.is_io() {
                AppError::Io(e.into())
            } else {
                AppError::Decode(format!("failed to write report: {}", e))
            }
        })
    }
}

/// Walk a paginated listing from page 1 until every record has been fetched
async fn collect_pages<T, F, Fut>(page_size: u32, mut fetch_page: F) -> AppResult<Vec<T>>
where
    F: FnMut(QueryParams) -> Fut,
    Fut: std::future::Future<Output = AppResult<Paginated<T>>>,
{
    let per_page = page_size.max(1);
    let mut records = Vec::new();
    let mut page = 1u32;

    loop {
        let params = QueryParams::new().with("page", page).with("per_page", per_page);
        let batch = fetch_page(params).await?;
        let received = batch.items.len();
        let done = batch.is_last_page() || received == 0;
        records.extend(batch.items);

        if done || records.len() as u64 >= batch.total {
            break;
        }
        page += 1;
    }

    tracing::debug!("Collected {} records over {} page(s)", records.len(), page);
    Ok(records)
}

pub async fn collect_items(client: &ApiClient, page_size: u32) -> AppResult<Vec<Item>> {
    collect_pages(page_size, move |params| async move { client.list_items(Some(&params)).await }).await
}

pub async fn collect_distributions(client: &ApiClient, page_size: u32) -> AppResult<Vec<Distribution>> {
    collect_pages(page_size, move |params| async move {
        client.list_distributions(Some(&params)).await
    })
    .await
}

pub async fn stock_report(client: &ApiClient, page_size: u32) -> AppResult<StockReport> {
    let (summary, items) = tokio::try_join!(client.dashboard_summary(), collect_items(client, page_size))?;
    tracing::info!("Stock report built with {} items", items.len());
    Ok(Report::new(&summary, items))
}

pub async fn distribution_report(client: &ApiClient, page_size: u32) -> AppResult<DistributionReport> {
    let (summary, distributions) = tokio::try_join!(
        client.dashboard_summary(),
        collect_distributions(client, page_size)
    )?;
    tracing::info!("Distribution report built with {} records", distributions.len());
    Ok(Report::new(&summary, distributions))
}
