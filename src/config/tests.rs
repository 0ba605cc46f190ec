use super::*;
use std::time::Duration;

#[test]
fn test_default_values() {
    assert_eq!(default_host(), "0.0.0.0");
    assert_eq!(default_port(), 8080);
    assert_eq!(default_timeout(), 30);
    assert_eq!(default_max_request_size(), 1024 * 1024);
    assert_eq!(default_database_url(), "sqlite:pizzas.db?mode=rwc");
    assert_eq!(default_max_connections(), 5);
    assert_eq!(default_service_name(), "pizza-catalog-rs");
    assert_eq!(default_log_level(), "info");
    assert!(!default_enable_json_logging());
}

#[test]
fn test_validate_rejects_zero_port() {
    let config = Config {
        server: ServerConfig {
            host: default_host(),
            port: 0,
            request_timeout_seconds: default_timeout(),
            max_request_size: default_max_request_size(),
        },
        database: DatabaseConfig {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        },
        observability: ObservabilityConfig {
            service_name: default_service_name(),
            service_version: default_service_version(),
            log_level: default_log_level(),
            enable_json_logging: false,
        },
    };

    let result = config.validate();
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_validate_rejects_empty_database_url() {
    let config = Config {
        server: ServerConfig {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_timeout(),
            max_request_size: default_max_request_size(),
        },
        database: DatabaseConfig {
            database_url: String::new(),
            max_connections: default_max_connections(),
        },
        observability: ObservabilityConfig {
            service_name: default_service_name(),
            service_version: default_service_version(),
            log_level: default_log_level(),
            enable_json_logging: false,
        },
    };

    let result = config.validate();
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_request_timeout_helper() {
    let server = ServerConfig {
        host: default_host(),
        port: default_port(),
        request_timeout_seconds: 45,
        max_request_size: default_max_request_size(),
    };

    assert_eq!(server.request_timeout(), Duration::from_secs(45));
}
