// SPDX-License-Identifier: MIT

//! Configuration module for the router web exporter
//!
//! Compiled-in defaults overlaid by an optional JSON file. The overlay is a
//! flat key set; present keys replace defaults, unrecognized keys are
//! accepted and ignored.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, Result};

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    pub const CONFIG_FILE: &str = "config.json";

    pub const TIME_BETWEEN_RESTART: f64 = 15.0;
    pub const REQUESTS_PER_INSTANCE: u32 = 10;
    pub const TIME_BETWEEN_REQUEST: f64 = 5.0;
    pub const SLEEP_AFTER_LOGIN: f64 = 4.5;
    pub const SLEEP_AFTER_NETWORKPAGE_LOAD: f64 = 2.0;

    pub const ROUTER_BASE_URL: &str = "http://192.168.0.1";
    pub const ROUTER_USERNAME: &str = "admin";
    pub const ROUTER_PASSWORD: &str = "Telstra";

    pub const PROMETHEUS_PORT: u16 = 8080;
    pub const WEBDRIVER_URL: &str = "http://localhost:4444";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const CONFIG_FILE: &str = "CONFIG_FILE";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay between browser session recreations, seconds
    pub time_between_restart: f64,
    /// Scrape cycles per browser session before teardown
    pub requests_per_instance: u32,
    /// Delay between scrape cycles, seconds
    pub time_between_request: f64,
    /// Fixed wait after submitting the login form, seconds
    pub sleep_after_login: f64,
    /// Fixed wait after loading the diagnostics page, seconds
    pub sleep_after_networkpage_load: f64,
    pub router_base_url: String,
    pub router_username: String,
    pub router_password: String,
    /// Port the metrics HTTP server listens on
    pub prometheus_port: u16,
    /// Address of the WebDriver server (geckodriver)
    pub webdriver_url: String,
}

/// Partial configuration read from the overlay file.
///
/// Every field is optional; unknown keys are ignored by serde.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    time_between_restart: Option<f64>,
    requests_per_instance: Option<u32>,
    time_between_request: Option<f64>,
    sleep_after_login: Option<f64>,
    sleep_after_networkpage_load: Option<f64>,
    router_base_url: Option<String>,
    router_username: Option<String>,
    router_password: Option<String>,
    prometheus_port: Option<u16>,
    webdriver_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_between_restart: defaults::TIME_BETWEEN_RESTART,
            requests_per_instance: defaults::REQUESTS_PER_INSTANCE,
            time_between_request: defaults::TIME_BETWEEN_REQUEST,
            sleep_after_login: defaults::SLEEP_AFTER_LOGIN,
            sleep_after_networkpage_load: defaults::SLEEP_AFTER_NETWORKPAGE_LOAD,
            router_base_url: defaults::ROUTER_BASE_URL.to_string(),
            router_username: defaults::ROUTER_USERNAME.to_string(),
            router_password: defaults::ROUTER_PASSWORD.to_string(),
            prometheus_port: defaults::PROMETHEUS_PORT,
            webdriver_url: defaults::WEBDRIVER_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the overlay file named by the `CONFIG_FILE`
    /// environment variable (default `config.json`).
    ///
    /// A missing file yields the compiled-in defaults; a malformed file
    /// aborts startup.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var(env_vars::CONFIG_FILE)
            .unwrap_or_else(|_| defaults::CONFIG_FILE.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Loads defaults and applies the overlay file at `path` if it exists.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Config::default();

        if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            let overlay: ConfigOverlay = serde_json::from_str(&raw).map_err(|e| {
                AppError::Config(format!("malformed config file {}: {}", path.display(), e))
            })?;
            config.apply(overlay);
            tracing::info!("Loaded configuration from {}", path.display());
        } else {
            tracing::info!("No config file at {}, using defaults", path.display());
        }

        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, overlay: ConfigOverlay) {
        macro_rules! overlay_key {
            ($key:ident) => {
                if let Some(value) = overlay.$key {
                    tracing::info!("set {}={:?}", stringify!($key), value);
                    self.$key = value;
                }
            };
        }

        overlay_key!(time_between_restart);
        overlay_key!(requests_per_instance);
        overlay_key!(time_between_request);
        overlay_key!(sleep_after_login);
        overlay_key!(sleep_after_networkpage_load);
        overlay_key!(router_base_url);
        overlay_key!(router_username);
        overlay_key!(prometheus_port);
        overlay_key!(webdriver_url);

        // Applied without logging the value
        if let Some(value) = overlay.router_password {
            tracing::info!("set router_password=<redacted>");
            self.router_password = value;
        }
    }

    /// Validates loaded configuration
    pub fn validate(&self) -> Result<()> {
        if self.router_base_url.trim().is_empty() {
            return Err(AppError::Config(
                "router_base_url cannot be empty".to_string(),
            ));
        }
        if self.requests_per_instance == 0 {
            return Err(AppError::Config(
                "requests_per_instance must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("time_between_restart", self.time_between_restart),
            ("time_between_request", self.time_between_request),
            ("sleep_after_login", self.sleep_after_login),
            (
                "sleep_after_networkpage_load",
                self.sleep_after_networkpage_load,
            ),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Config(format!(
                    "{name} must be a non-negative number of seconds, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Listen address for the metrics HTTP server
    pub fn server_addr(&self) -> String {
        format!("0.0.0.0:{}", self.prometheus_port)
    }

    pub fn login_url(&self) -> String {
        format!("{}/login.htm", self.router_base_url)
    }

    pub fn home_url(&self) -> String {
        format!("{}/home.htm", self.router_base_url)
    }

    pub fn diagnostics_url(&self) -> String {
        format!("{}/diagnostics_network.htm?m=adv", self.router_base_url)
    }
}
