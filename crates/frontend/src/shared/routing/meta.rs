use std::collections::HashMap;
use std::sync::Arc;

use contracts::shared::metadata::DocTypeMeta;
use leptos::prelude::*;

use super::api;
use crate::shared::fetch_state::FetchState;

/// Doctype metadata cache, one entry per doctype name.
///
/// Responses are stored under the doctype they were requested for, so a
/// response that arrives after the user navigated away only warms the cache.
#[derive(Clone, Copy)]
pub struct MetaContext {
    cache: RwSignal<HashMap<String, FetchState<Arc<DocTypeMeta>>>>,
}

impl MetaContext {
    pub fn new() -> Self {
        Self {
            cache: RwSignal::new(HashMap::new()),
        }
    }

    /// Tracked read; `NotStarted` for doctypes never requested.
    pub fn state(&self, doctype: &str) -> FetchState<Arc<DocTypeMeta>> {
        self.cache
            .with(|cache| cache.get(doctype).cloned().unwrap_or_default())
    }

    /// Starts a request unless one was already made for `doctype`.
    pub fn ensure(&self, doctype: &str) {
        let started = self
            .cache
            .with_untracked(|cache| cache.contains_key(doctype));
        if !started {
            self.fetch(doctype.to_string());
        }
    }

    /// Requests `doctype` again after a failure.
    pub fn retry(&self, doctype: &str) {
        let pending = self
            .cache
            .with_untracked(|cache| matches!(cache.get(doctype), Some(FetchState::Pending)));
        if !pending {
            self.fetch(doctype.to_string());
        }
    }

    pub fn store(&self, doctype: &str, state: FetchState<Arc<DocTypeMeta>>) {
        self.cache.update(|cache| {
            cache.insert(doctype.to_string(), state);
        });
    }

    fn fetch(&self, doctype: String) {
        log::debug!("fetching metadata for '{}'", doctype);
        self.store(&doctype, FetchState::Pending);
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_doctype_meta(&doctype).await.map(Arc::new);
            if let Err(e) = &result {
                log::warn!("metadata for '{}' unavailable: {}", doctype, e);
            }
            this.store(&doctype, FetchState::from(result));
        });
    }
}

impl Default for MetaContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the metadata cache
pub fn use_meta() -> MetaContext {
    use_context::<MetaContext>().expect("MetaContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_is_keyed_by_doctype() {
        let owner = Owner::new();
        owner.set();

        let meta = MetaContext::new();
        assert_eq!(meta.state("CG Task Instance"), FetchState::NotStarted);

        meta.store(
            "CG Task Instance",
            FetchState::Ready(Arc::new(DocTypeMeta {
                name: "CG Task Instance".to_string(),
                ..DocTypeMeta::default()
            })),
        );
        meta.store("CG Branch", FetchState::Failed("404".to_string()));

        assert!(meta.state("CG Task Instance").ready().is_some());
        assert_eq!(meta.state("CG Branch").error(), Some("404"));
        assert_eq!(meta.state("CG Department"), FetchState::NotStarted);
    }

    #[test]
    fn test_ensure_skips_requested_doctypes() {
        let owner = Owner::new();
        owner.set();

        let meta = MetaContext::new();
        let ready = Arc::new(DocTypeMeta {
            name: "CG Task Instance".to_string(),
            ..DocTypeMeta::default()
        });
        meta.store("CG Task Instance", FetchState::Ready(ready.clone()));
        meta.store("CG Branch", FetchState::Failed("404".to_string()));
        meta.store("CG User", FetchState::Pending);

        meta.ensure("CG Task Instance");
        meta.ensure("CG Branch");
        meta.ensure("CG User");

        assert_eq!(meta.state("CG Task Instance"), FetchState::Ready(ready));
        assert_eq!(meta.state("CG Branch").error(), Some("404"));
        assert_eq!(meta.state("CG User"), FetchState::Pending);
    }

    #[test]
    fn test_retry_skipped_while_pending() {
        let owner = Owner::new();
        owner.set();

        let meta = MetaContext::new();
        meta.store("CG Branch", FetchState::Pending);
        meta.retry("CG Branch");
        assert_eq!(meta.state("CG Branch"), FetchState::Pending);
    }
}
