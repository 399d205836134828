use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::context::use_routing;

/// Returns a closure that navigates to a doctype list (`record_id = None`)
/// or record page. Unroutable doctypes are logged and ignored.
pub fn use_open_doctype() -> impl Fn(&str, Option<&str>) + Clone + Send + Sync + 'static {
    let routing = use_routing();
    let navigate = use_navigate();

    move |doctype: &str, record_id: Option<&str>| {
        let path = routing.resolve_path(doctype, record_id, None);
        if path.is_empty() {
            log::warn!("no route for doctype '{}'", doctype);
            return;
        }
        navigate(&path, NavigateOptions::default());
    }
}

/// Returns a closure that opens the create page of a doctype.
pub fn use_open_create() -> impl Fn(&str) + Clone + Send + Sync + 'static {
    let routing = use_routing();
    let navigate = use_navigate();

    move |doctype: &str| {
        let path = routing.resolve_create_path(doctype);
        if path.is_empty() {
            log::warn!("routing map not loaded, cannot create '{}'", doctype);
            return;
        }
        navigate(&path, NavigateOptions::default());
    }
}
