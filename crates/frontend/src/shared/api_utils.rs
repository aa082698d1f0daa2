//! API utilities for frontend-backend communication
//!
//! Provides helper functions for locating the sheet endpoint.

/// Path of the sheet endpoint on the hub server.
pub const SHEET_PATH: &str = "/api/sheet";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the hub server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// URL every sheet action is posted to.
///
/// `HUB_API_URL` set at build time replaces the whole endpoint, e.g. to
/// talk to the data service directly instead of through the hub server.
pub fn sheet_endpoint() -> String {
    endpoint_from(option_env!("HUB_API_URL"), &api_base())
}

fn endpoint_from(override_url: Option<&str>, base: &str) -> String {
    match override_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.to_string(),
        None => format!("{}{}", base, SHEET_PATH),
    }
}
