//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use contracts::domain::a001_category::api::CATEGORY_API_PATH;

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `SHOP_API_BASE` set at compile time (e.g. `https://shop.example.com`)
/// 2. origin of the current page
/// 3. empty string, so requests go to relative URLs
pub fn api_base() -> String {
    if let Some(base) = configured_base(option_env!("SHOP_API_BASE")) {
        return base;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

fn configured_base(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build a full category API URL
///
/// # Example
/// ```rust,ignore
/// let url = category_url(&api_base(), "/get-category");
/// ```
pub fn category_url(base: &str, path: &str) -> String {
    format!("{}{}{}", base, CATEGORY_API_PATH, path)
}

/// Category API URL with a trailing id segment, percent-encoded
pub fn category_item_url(base: &str, path: &str, id: &str) -> String {
    format!("{}/{}", category_url(base, path), urlencoding::encode(id))
}
