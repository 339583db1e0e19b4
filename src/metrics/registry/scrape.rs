// SPDX-License-Identifier: MIT

//! Scrape bookkeeping and text encoding

use prometheus_client::encoding::text::encode;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub async fn encode_metrics(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }

    pub fn record_scrape_success(&self) {
        self.scrape_success.inc();
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        #[allow(clippy::cast_possible_wrap)]
        self.scrape_last_success_timestamp_seconds.set(now as i64);
    }

    pub fn record_scrape_error(&self) {
        self.scrape_errors.inc();
    }

    pub fn record_scrape_duration(&self, duration_secs: f64) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let millis = (duration_secs * 1000.0).round() as i64;
        self.scrape_duration_milliseconds.set(millis);
    }

    pub fn record_session_restart(&self) {
        self.session_restarts.inc();
    }
}
