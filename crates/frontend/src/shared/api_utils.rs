//! API utilities for frontend-backend communication
//!
//! Resolves the backend base URL the entity clients are built with.

use crate::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured. Otherwise constructs the URL from the
/// current window location and the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base(config: &ApiConfig) -> String {
    if let Some(base) = config.base_url.as_deref() {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_url_wins() {
        let config = ApiConfig {
            base_url: Some("https://inventory.example.com/api/".into()),
            port: 3000,
        };
        assert_eq!(api_base(&config), "https://inventory.example.com/api");
    }
}
