// SPDX-License-Identifier: MIT

//! Diagnostics page fetcher
//!
//! Retrieves the raw network statistics table from an authenticated session
//! and hands it to the table parser.

use std::time::Duration;

use crate::browser::{Driver, Locator};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::router::table;

/// Element id of the statistics table on the diagnostics page
const NETWORK_STATS_ID: &str = "networkstats";

/// Fetches one diagnostics snapshot.
///
/// Navigates to the diagnostics page, waits the configured fixed delay for
/// the page scripts to populate the table, reads the `networkstats` element's
/// innerHTML and parses it. The element holds only the table rows, so the
/// markup is re-wrapped in a synthetic `<table>` envelope before parsing.
///
/// Returns the parser's JSON string; callers re-parse it with
/// [`table::records_from_json`].
pub async fn fetch<D: Driver>(driver: &D, config: &Config) -> Result<String> {
    let url = config.diagnostics_url();
    tracing::debug!("Navigating to diagnostics page {}", url);
    driver.navigate(&url).await?;

    tokio::time::sleep(Duration::from_secs_f64(config.sleep_after_networkpage_load)).await;

    let stats_table = driver
        .find_element(&Locator::id(NETWORK_STATS_ID))
        .await?;
    let inner_html = driver
        .read_attribute(&stats_table, "innerHTML")
        .await?
        .ok_or_else(|| {
            AppError::Parse(format!("element #{NETWORK_STATS_ID} has no innerHTML"))
        })?;

    let fragment = format!("<table>{inner_html}</table>");
    table::table_to_json(&fragment)
}
