//! Inventaris Dashboard - command line front end
//!
//! Usage:
//!   inventaris-dashboard [summary]
//!   inventaris-dashboard reset --yes
//!   inventaris-dashboard export <stock|distributions> <path>

use std::{fs::File, io::BufWriter};

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventaris_dashboard::{
    config::{AppConfig, LoggingConfig},
    dashboard::{Dashboard, Loadable},
    reports, ApiClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(
        "Inventaris Dashboard v{} targeting {}",
        env!("CARGO_PKG_VERSION"),
        config.api.base_url
    );

    let client = ApiClient::new(&config.api).context("Failed to create API client")?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(|s| s.as_str()).collect();

    match args.as_slice() {
        [] | ["summary"] => {
            let mut dashboard = Dashboard::new(client, config.dashboard.clone());
            dashboard.refresh().await;
            print_overview(&dashboard);
        }
        ["reset", "--yes"] => {
            let mut dashboard = Dashboard::new(client, config.dashboard.clone());
            let outcome = dashboard.reset_all_data().await?;
            println!("{}", outcome.message);
            if !outcome.success {
                bail!("reset was not performed");
            }
        }
        ["reset"] => bail!("refusing to reset without --yes"),
        ["export", kind, path] => {
            let writer = BufWriter::new(File::create(path).with_context(|| format!("Cannot create {}", path))?);
            let page_size = config.dashboard.export_page_size;
            match *kind {
                "stock" => reports::stock_report(&client, page_size).await?.write_json(writer)?,
                "distributions" => reports::distribution_report(&client, page_size).await?.write_json(writer)?,
                other => bail!("unknown report kind: {}", other),
            }
            tracing::info!("Report written to {}", path);
        }
        _ => bail!("usage: inventaris-dashboard [summary | reset --yes | export <stock|distributions> <path>]"),
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("inventaris_dashboard={}", logging.level).into());

    // Logs go to stderr; stdout carries the overview
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_overview(dashboard: &Dashboard) {
    let summary = match dashboard.summary().state() {
        Loadable::Ready(summary) => summary,
        Loadable::Failed(notice) => {
            eprintln!("Summary unavailable: {}", notice.message);
            return;
        }
        _ => return,
    };

    println!("Total items: {}", summary.total_items);
    if let Some(split) = dashboard.location_split() {
        println!(
            "  Gudang: {} ({}%)   OPD: {} ({}%)",
            summary.items_in_warehouse, split.warehouse_percent, summary.items_in_opd, split.opd_percent
        );
    }

    if let Some(breakdown) = dashboard.condition_breakdown() {
        println!("Condition:");
        for share in &breakdown.shares {
            println!("  {:<14} {:>6} {:>4}%", share.condition.as_str(), share.count, share.display_percent);
        }
    }

    println!("Top categories:");
    for page in dashboard.top_categories().pages() {
        for entry in page {
            println!("  {:<24} {:>6}", entry.category_name, entry.count);
        }
    }

    println!("Top OPDs:");
    for page in dashboard.top_opds().pages() {
        for entry in page {
            println!("  {:<24} {:>6}", entry.opd_name, entry.count);
        }
    }

    match dashboard.recent().state() {
        Loadable::Ready(_) => {
            println!("Recent distributions:");
            for d in dashboard.recent_list().current_page() {
                println!("  {} {} {:?} ({})", d.distribution_date, d.distribution_code, d.serial_number, d.route_label());
            }
        }
        Loadable::Failed(notice) => eprintln!("Recent distributions unavailable: {}", notice.message),
        _ => {}
    }
}
