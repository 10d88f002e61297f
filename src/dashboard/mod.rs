//! Dashboard shell: tabs over fetched views and the windowed lists derived from them

pub mod slot;

use crate::{
    api::{ApiClient, QueryParams},
    config::DashboardConfig,
    error::AppResult,
    forms::{DistributionForm, FormState, Submission},
    models::{
        Brand, Category, CategoryCount, DashboardSummary, Distribution, DistributionQuery, Item,
        ItemQuery, ItemType, Opd, OpdCount, OpdLocation, Paginated, ResetOutcome,
    },
    presenter::{ConditionBreakdown, LocationSplit, WindowedList},
};

pub use slot::{Loadable, Notice, Ticket, ViewSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Stock,
    Distributions,
    MasterData,
}

/// Everything shown on the master data tab
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasterData {
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub types: Vec<ItemType>,
    pub opds: Vec<Opd>,
    pub locations: Vec<OpdLocation>,
}

pub struct Dashboard {
    client: ApiClient,
    config: DashboardConfig,
    tab: Tab,
    summary: ViewSlot<DashboardSummary>,
    recent: ViewSlot<Vec<Distribution>>,
    stock: ViewSlot<Paginated<Item>>,
    distributions: ViewSlot<Paginated<Distribution>>,
    master: ViewSlot<MasterData>,
    top_categories: WindowedList<CategoryCount>,
    top_opds: WindowedList<OpdCount>,
    recent_list: WindowedList<Distribution>,
    stock_query: ItemQuery,
    distribution_query: DistributionQuery,
}

impl Dashboard {
    pub fn new(client: ApiClient, config: DashboardConfig) -> Self {
        Self {
            top_categories: WindowedList::empty(config.categories_per_page),
            top_opds: WindowedList::empty(config.opds_per_page),
            recent_list: WindowedList::empty(config.distributions_per_page),
            client,
            config,
            tab: Tab::default(),
            summary: ViewSlot::new(),
            recent: ViewSlot::new(),
            stock: ViewSlot::new(),
            distributions: ViewSlot::new(),
            master: ViewSlot::new(),
            stock_query: ItemQuery::default(),
            distribution_query: DistributionQuery::default(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Fetch whatever the active tab displays
    pub async fn load_current_tab(&mut self) {
        match self.tab {
            Tab::Overview => self.refresh().await,
            Tab::Stock => {
                let query = self.stock_query.clone();
                self.load_stock(query).await
            }
            Tab::Distributions => {
                let query = self.distribution_query.clone();
                self.load_distributions(query).await
            }
            Tab::MasterData => self.load_master_data().await,
        }
    }

    // ------------------------------------------------------------------
    // Overview
    // ------------------------------------------------------------------

    /// Refetch the summary and recent distributions concurrently
    pub async fn refresh(&mut self) {
        let summary_ticket = self.summary.begin();
        let recent_ticket = self.recent.begin();

        let (summary, recent) = tokio::join!(
            self.client.dashboard_summary(),
            self.client.recent_distributions(None),
        );

        self.apply_summary(summary_ticket, summary);
        self.apply_recent(recent_ticket, recent);
    }

    /// Apply a summary response; the derived windowed lists restart at page 0
    pub fn apply_summary(&mut self, ticket: Ticket, result: AppResult<DashboardSummary>) -> bool {
        if let Err(ref e) = result {
            tracing::warn!("Failed to load dashboard summary: {}", e);
        }
        if !self.summary.apply(ticket, result) {
            return false;
        }
        match self.summary.data() {
            Some(summary) => {
                self.top_categories.replace(summary.top_categories.clone());
                self.top_opds.replace(summary.top_opds.clone());
            }
            None => {
                self.top_categories.clear();
                self.top_opds.clear();
            }
        }
        true
    }

    pub fn apply_recent(&mut self, ticket: Ticket, result: AppResult<Vec<Distribution>>) -> bool {
        if let Err(ref e) = result {
            tracing::warn!("Failed to load recent distributions: {}", e);
        }
        if !self.recent.apply(ticket, result) {
            return false;
        }
        let items = self.recent.data().cloned().unwrap_or_default();
        self.recent_list.replace(items);
        true
    }

    pub fn summary(&self) -> &ViewSlot<DashboardSummary> {
        &self.summary
    }

    pub fn recent(&self) -> &ViewSlot<Vec<Distribution>> {
        &self.recent
    }

    /// Issue a ticket on the summary slot, for callers driving the fetch themselves
    pub fn begin_summary(&mut self) -> Ticket {
        self.summary.begin()
    }

    pub fn begin_recent(&mut self) -> Ticket {
        self.recent.begin()
    }

    pub fn condition_breakdown(&self) -> Option<ConditionBreakdown> {
        self.summary.data().map(ConditionBreakdown::from_summary)
    }

    pub fn location_split(&self) -> Option<LocationSplit> {
        self.summary.data().map(LocationSplit::from_summary)
    }

    pub fn top_categories(&self) -> &WindowedList<CategoryCount> {
        &self.top_categories
    }

    pub fn top_categories_mut(&mut self) -> &mut WindowedList<CategoryCount> {
        &mut self.top_categories
    }

    pub fn top_opds(&self) -> &WindowedList<OpdCount> {
        &self.top_opds
    }

    pub fn top_opds_mut(&mut self) -> &mut WindowedList<OpdCount> {
        &mut self.top_opds
    }

    pub fn recent_list(&self) -> &WindowedList<Distribution> {
        &self.recent_list
    }

    pub fn recent_list_mut(&mut self) -> &mut WindowedList<Distribution> {
        &mut self.recent_list
    }

    // ------------------------------------------------------------------
    // Stock and distributions
    // ------------------------------------------------------------------

    pub async fn load_stock(&mut self, query: ItemQuery) {
        let ticket = self.stock.begin();
        let params = QueryParams::from(&query);
        self.stock_query = query;

        let result = self.client.list_items(Some(&params)).await;
        if let Err(ref e) = result {
            tracing::warn!("Failed to load items: {}", e);
        }
        self.stock.apply(ticket, result);
    }

    pub fn stock(&self) -> &ViewSlot<Paginated<Item>> {
        &self.stock
    }

    pub async fn load_distributions(&mut self, query: DistributionQuery) {
        let ticket = self.distributions.begin();
        let params = QueryParams::from(&query);
        self.distribution_query = query;

        let result = self.client.list_distributions(Some(&params)).await;
        if let Err(ref e) = result {
            tracing::warn!("Failed to load distributions: {}", e);
        }
        self.distributions.apply(ticket, result);
    }

    pub fn distributions(&self) -> &ViewSlot<Paginated<Distribution>> {
        &self.distributions
    }

    /// Submit the distribution form; on success the overview is refetched.
    pub async fn submit_distribution(
        &mut self,
        form: &mut FormState<DistributionForm>,
    ) -> AppResult<Submission<Distribution>> {
        let client = self.client.clone();
        let outcome = form
            .submit(|values| async move {
                let request = values.to_request()?;
                client.create_distribution(&request).await
            })
            .await?;

        if let Submission::Submitted(ref created) = outcome {
            tracing::info!(
                "Distribution {} recorded ({})",
                created.distribution_code,
                created.direction
            );
            form.reset();
            self.refresh().await;
        }
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Master data
    // ------------------------------------------------------------------

    pub async fn load_master_data(&mut self) {
        let ticket = self.master.begin();
        let client = &self.client;

        let result = tokio::try_join!(
            client.list_categories(None),
            client.list_brands(None),
            client.list_types(None),
            client.list_opds(None),
            client.list_opd_locations(None),
        )
        .map(|(categories, brands, types, opds, locations)| MasterData {
            categories,
            brands,
            types,
            opds,
            locations,
        });

        if let Err(ref e) = result {
            tracing::warn!("Failed to load master data: {}", e);
        }
        self.master.apply(ticket, result);
    }

    pub fn master_data(&self) -> &ViewSlot<MasterData> {
        &self.master
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Delete all data on the server.
    ///
    /// On success every view is discarded and refetched from scratch. On failure,
    /// or when the server reports `success: false`, the current views stay as they are.
    pub async fn reset_all_data(&mut self) -> AppResult<ResetOutcome> {
        let outcome = self.client.reset_all_data().await?;

        if !outcome.success {
            tracing::warn!("Reset refused by server: {}", outcome.message);
            return Ok(outcome);
        }

        tracing::info!("All data reset: {}", outcome.message);
        self.discard_all();
        self.refresh().await;
        if self.tab != Tab::Overview {
            self.load_current_tab().await;
        }
        Ok(outcome)
    }

    fn discard_all(&mut self) {
        self.summary.invalidate();
        self.recent.invalidate();
        self.stock.invalidate();
        self.distributions.invalidate();
        self.master.invalidate();
        self.top_categories.clear();
        self.top_opds.clear();
        self.recent_list.clear();
    }
}
