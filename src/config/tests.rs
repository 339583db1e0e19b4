// SPDX-License-Identifier: MIT

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.time_between_restart, 15.0);
        assert_eq!(config.requests_per_instance, 10);
        assert_eq!(config.time_between_request, 5.0);
        assert_eq!(config.sleep_after_login, 4.5);
        assert_eq!(config.sleep_after_networkpage_load, 2.0);
        assert_eq!(config.router_base_url, "http://192.168.0.1");
        assert_eq!(config.router_username, "admin");
        assert_eq!(config.prometheus_port, 8080);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
    }

    #[test]
    fn test_overlay_replaces_only_present_keys() {
        let defaults = Config::default();
        let overlay: ConfigOverlay = serde_json::from_str(r#"{"prometheus_port": 9000}"#).unwrap();

        let mut config = Config::default();
        config.apply(overlay);

        assert_eq!(config.prometheus_port, 9000);
        assert_eq!(config.time_between_restart, defaults.time_between_restart);
        assert_eq!(config.requests_per_instance, defaults.requests_per_instance);
        assert_eq!(config.router_base_url, defaults.router_base_url);
        assert_eq!(config.router_username, defaults.router_username);
        assert_eq!(config.router_password, defaults.router_password);
        assert_eq!(config.webdriver_url, defaults.webdriver_url);
    }

    #[test]
    fn test_overlay_ignores_unknown_keys() {
        let overlay: ConfigOverlay =
            serde_json::from_str(r#"{"requests_per_instance": 3, "future_knob": true}"#).unwrap();

        let mut config = Config::default();
        config.apply(overlay);
        assert_eq!(config.requests_per_instance, 3);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = Config::load_from(std::path::Path::new("/nonexistent/config.json")).unwrap();
        assert_eq!(config.prometheus_port, defaults::PROMETHEUS_PORT);
    }

    #[test]
    fn test_load_from_overlay_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"router_base_url": "http://10.0.0.138", "sleep_after_login": 1.5}}"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.router_base_url, "http://10.0.0.138");
        assert_eq!(config.sleep_after_login, 1.5);
        assert_eq!(config.prometheus_port, defaults::PROMETHEUS_PORT);
    }

    #[test]
    fn test_load_from_malformed_file_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::AppError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_zero_requests() {
        let config = Config {
            requests_per_instance: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_delay() {
        let config = Config {
            time_between_request: -1.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_url_helpers() {
        let config = Config::default();
        assert_eq!(config.login_url(), "http://192.168.0.1/login.htm");
        assert_eq!(config.home_url(), "http://192.168.0.1/home.htm");
        assert_eq!(
            config.diagnostics_url(),
            "http://192.168.0.1/diagnostics_network.htm?m=adv"
        );
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }
}
