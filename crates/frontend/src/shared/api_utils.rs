//! URLs of Frappe whitelisted methods.
//!
//! The SPA is served by the Frappe site itself, so requests go to the page
//! origin; outside a browser window the path stays relative.

use contracts::system::frappe::api_method_path;

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// `{origin}/api/method/{method}` plus an encoded query string.
pub fn method_url(method: &str, query: &[(&str, &str)]) -> String {
    format!("{}{}", origin(), method_path_with_query(method, query))
}

fn method_path_with_query(method: &str, query: &[(&str, &str)]) -> String {
    let mut path = api_method_path(method);
    for (i, (key, value)) in query.iter().enumerate() {
        path.push(if i == 0 { '?' } else { '&' });
        path.push_str(key);
        path.push('=');
        path.push_str(&urlencoding::encode(value));
    }
    path
}
