// SPDX-License-Identifier: MIT

//! Scrape orchestration: poll loop and session restart loop
//!
//! The poll loop logs in once, then runs a bounded number of fetch → export
//! cycles against one browser session. The restart loop wraps it forever,
//! recycling the browser session between rounds to bound resource growth in
//! the underlying browser process. There is no per-cycle recovery: the first
//! failure anywhere is fatal for the whole process.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::AppState;
use crate::browser::{Driver, WebDriverSession};
use crate::error::Result;
use crate::router::{InterfaceCounters, diagnostics, session, table};

/// Starts the restart loop in a background task.
///
/// Runs until a fatal error or shutdown. On fatal error the shutdown signal
/// is raised so the HTTP server stops too, and the error is surfaced through
/// the join handle.
pub fn start_scrape_loop(
    mut shutdown_rx: watch::Receiver<bool>,
    shutdown_tx: watch::Sender<bool>,
    state: Arc<AppState>,
) -> JoinHandle<Result<()>> {
    tracing::info!(
        "Starting scrape loop: {} requests per session, {}s between requests",
        state.config.requests_per_instance,
        state.config.time_between_request
    );

    tokio::spawn(async move {
        let result = restart_loop(&mut shutdown_rx, &state).await;
        if let Err(e) = &result {
            tracing::error!("Scrape loop failed: {}", e);
            let _ = shutdown_tx.send(true);
        }
        result
    })
}

/// Forever: run one poll loop to completion, tear the session down, wait,
/// start over with a fresh login.
async fn restart_loop(
    shutdown_rx: &mut watch::Receiver<bool>,
    state: &Arc<AppState>,
) -> Result<()> {
    let restart_delay = Duration::from_secs_f64(state.config.time_between_restart);

    loop {
        if shutdown_requested(shutdown_rx) {
            return Ok(());
        }

        let driver = WebDriverSession::start(&state.config.webdriver_url).await?;
        let cycle = poll_loop(&driver, shutdown_rx, state).await;

        // The browser session is recycled even when the cycle failed.
        if let Err(quit_err) = driver.quit().await {
            tracing::warn!("Failed to end browser session: {}", quit_err);
        }
        cycle?;

        if shutdown_requested(shutdown_rx) {
            return Ok(());
        }

        state.metrics.record_session_restart();
        tracing::info!(
            "Session recycled, restarting in {}s",
            state.config.time_between_restart
        );
        if wait_or_shutdown(shutdown_rx, restart_delay).await {
            return Ok(());
        }
    }
}

/// One session's worth of scrape cycles: login, then a bounded number of
/// fetch → export rounds with a fixed delay between them.
async fn poll_loop<D: Driver>(
    driver: &D,
    shutdown_rx: &mut watch::Receiver<bool>,
    state: &Arc<AppState>,
) -> Result<()> {
    session::login(driver, &state.config).await?;

    let request_delay = Duration::from_secs_f64(state.config.time_between_request);
    for request in 0..state.config.requests_per_instance {
        if shutdown_requested(shutdown_rx) {
            return Ok(());
        }

        let start = std::time::Instant::now();
        match scrape_once(driver, state).await {
            Ok(count) => {
                state.metrics.record_scrape_success();
                state
                    .metrics
                    .record_scrape_duration(start.elapsed().as_secs_f64());
                tracing::debug!(
                    "Scrape {}/{} exported {} interfaces",
                    request + 1,
                    state.config.requests_per_instance,
                    count
                );
            }
            Err(e) => {
                // First failure is fatal; the restart loop does not recover
                // from mid-cycle errors.
                state.metrics.record_scrape_error();
                state
                    .metrics
                    .record_scrape_duration(start.elapsed().as_secs_f64());
                return Err(e);
            }
        }

        tracing::debug!(
            "Waiting {}s before next request",
            state.config.time_between_request
        );
        if wait_or_shutdown(shutdown_rx, request_delay).await {
            return Ok(());
        }
    }

    Ok(())
}

/// One fetch → parse → export cycle. Returns the number of exported
/// interface rows.
async fn scrape_once<D: Driver>(driver: &D, state: &Arc<AppState>) -> Result<usize> {
    let json = diagnostics::fetch(driver, &state.config).await?;
    let records = table::records_from_json(&json)?;
    let snapshot = InterfaceCounters::snapshot_from_records(&records)?;
    state.metrics.update_snapshot(&snapshot);
    Ok(snapshot.len())
}

fn shutdown_requested(shutdown_rx: &watch::Receiver<bool>) -> bool {
    *shutdown_rx.borrow()
}

/// Sleeps for `delay`, returning early with `true` when shutdown is
/// signalled.
async fn wait_or_shutdown(shutdown_rx: &mut watch::Receiver<bool>, delay: Duration) -> bool {
    tokio::select! {
        () = tokio::time::sleep(delay) => false,
        _ = shutdown_rx.changed() => *shutdown_rx.borrow(),
    }
}
