use std::sync::Arc;

use contracts::shared::routing::{self as resolver, RoutingMap};
use leptos::prelude::*;

use super::{api, boot};
use crate::shared::fetch_state::FetchState;

/// Session-wide routing map store.
///
/// Provided once at the app root. Components read it reactively through
/// [`RoutingContext::state`] / [`RoutingContext::routing_map`]; event handlers
/// use the untracked [`RoutingContext::get_routing_map`].
#[derive(Clone, Copy)]
pub struct RoutingContext {
    state: RwSignal<FetchState<Arc<RoutingMap>>>,
}

impl RoutingContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FetchState::NotStarted),
        }
    }

    /// Tracked read of the whole fetch state.
    pub fn state(&self) -> FetchState<Arc<RoutingMap>> {
        self.state.get()
    }

    /// Tracked read; `None` until a map has been stored.
    pub fn routing_map(&self) -> Option<Arc<RoutingMap>> {
        self.state.with(|s| s.ready().cloned())
    }

    /// Untracked read for code running outside a reactive scope.
    pub fn get_routing_map(&self) -> Option<Arc<RoutingMap>> {
        self.state.with_untracked(|s| s.ready().cloned())
    }

    /// Replaces the stored map.
    pub fn set_routing_map(&self, map: RoutingMap) {
        log::info!("routing map loaded: {} doctypes", map.len());
        self.state.set(FetchState::Ready(Arc::new(map)));
    }

    pub fn mark_pending(&self) {
        self.state.set(FetchState::Pending);
    }

    pub fn mark_failed(&self, error: String) {
        log::warn!("routing map unavailable: {}", error);
        self.state.set(FetchState::Failed(error));
    }

    /// See [`resolver::resolve_path`]; `""` while no map is loaded.
    pub fn resolve_path(&self, doctype: &str, record_id: Option<&str>, search: Option<&str>) -> String {
        match self.get_routing_map() {
            Some(map) => resolver::resolve_path(&map, doctype, record_id, search),
            None if doctype == resolver::FORM_DOCTYPE => {
                resolver::resolve_path(&RoutingMap::new(), doctype, record_id, search)
            }
            None => String::new(),
        }
    }

    /// See [`resolver::resolve_create_path`]. Without a loaded map every
    /// doctype counts as unmapped and gets a placeholder path.
    pub fn resolve_create_path(&self, doctype: &str) -> String {
        let map = self.get_routing_map().unwrap_or_default();
        resolver::resolve_create_path(&map, doctype)
    }

    /// Populates the store once per session: embedded boot payload first,
    /// otherwise a request to the backend.
    pub fn load(&self) {
        if !self.state.with_untracked(|s| matches!(s, FetchState::NotStarted)) {
            return;
        }
        if let Some(map) = boot::read_boot_routing_map() {
            log::debug!("routing map taken from boot payload");
            self.set_routing_map(map);
            return;
        }
        self.reload();
    }

    /// Requests the map again, e.g. after a failure.
    pub fn reload(&self) {
        if self.state.with_untracked(|s| matches!(s, FetchState::Pending)) {
            return;
        }
        self.mark_pending();
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_routing_map().await {
                Ok(map) => this.set_routing_map(map),
                Err(e) => this.mark_failed(e),
            }
        });
    }
}

impl Default for RoutingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the routing store
pub fn use_routing() -> RoutingContext {
    use_context::<RoutingContext>().expect("RoutingContext not found in component tree")
}
