//! Decides which doctype page a path renders.
//!
//! ```text
//! routing map     NotStarted/Pending -> Loading
//!                 Failed             -> Error
//!                 Ready              -> look up the first segment by url
//!   unmapped                         -> NotFound
//!   mapped, no id                    -> List
//!   mapped, id    metadata pending   -> Loading
//!                 metadata failed    -> Error
//!                 metadata ready     -> Create | View
//! ```

use std::sync::Arc;

use contracts::shared::metadata::{compute_autofill, AutofillFieldMap, DocTypeMeta};
use contracts::shared::routing::{
    classify_id_segment, IdIntent, PathSegments, RoutingMap, RoutingMapEntry,
};

use crate::shared::fetch_state::FetchState;

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    NotFound,
    List {
        entry: RoutingMapEntry,
    },
    Create {
        doctype: String,
        autofill: AutofillFieldMap,
    },
    View {
        doctype: String,
        name: String,
    },
    /// A required fetch failed; `doctype` is set when the metadata fetch is
    /// the one to retry.
    Error {
        message: String,
        doctype: Option<String>,
    },
}

/// Doctype whose url segment is `segments.doctype_segment`, if the map is loaded.
pub fn mapped_doctype(
    segments: &PathSegments,
    routing: &FetchState<Arc<RoutingMap>>,
) -> Option<String> {
    routing
        .ready()?
        .find_by_url(&segments.doctype_segment)
        .map(|entry| entry.doctype.clone())
}

/// `meta_for` is only called when the path carries an id segment.
pub fn resolve_page<F>(
    segments: &PathSegments,
    routing: &FetchState<Arc<RoutingMap>>,
    meta_for: F,
) -> PageState
where
    F: FnOnce(&str) -> FetchState<Arc<DocTypeMeta>>,
{
    let map = match routing {
        FetchState::NotStarted | FetchState::Pending => return PageState::Loading,
        FetchState::Failed(e) => {
            return PageState::Error {
                message: e.clone(),
                doctype: None,
            }
        }
        FetchState::Ready(map) => map,
    };

    let Some(entry) = map.find_by_url(&segments.doctype_segment) else {
        return PageState::NotFound;
    };

    let Some(id) = segments.id_segment.as_deref() else {
        return PageState::List {
            entry: entry.clone(),
        };
    };

    let meta = meta_for(&entry.doctype);
    if let Some(e) = meta.error() {
        return PageState::Error {
            message: e.to_string(),
            doctype: Some(entry.doctype.clone()),
        };
    }
    // Unknown fields until the metadata is ready.
    let Some(autofill) = compute_autofill(meta.ready().map(|m| m.fields.as_slice())) else {
        return PageState::Loading;
    };

    match classify_id_segment(id, &entry.doctype) {
        IdIntent::Create => PageState::Create {
            doctype: entry.doctype.clone(),
            autofill,
        },
        IdIntent::View => PageState::View {
            doctype: entry.doctype.clone(),
            name: id.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::metadata::{FieldDescriptor, FieldType};
    use serde_json::json;

    const TASK: &str = "CG Task Instance";

    fn routing() -> FetchState<Arc<RoutingMap>> {
        let map = RoutingMap::from_entries([
            RoutingMapEntry::new(TASK, "Task", "task").with_list_props("{}"),
        ])
        .unwrap();
        FetchState::Ready(Arc::new(map))
    }

    fn task_meta() -> FetchState<Arc<DocTypeMeta>> {
        FetchState::Ready(Arc::new(DocTypeMeta {
            name: TASK.to_string(),
            module: None,
            fields: vec![
                FieldDescriptor::new("status", FieldType::Select).with_default("Open"),
                FieldDescriptor::new("checklist", FieldType::Table).with_default("[]"),
                FieldDescriptor::new("subject", FieldType::Data),
            ],
        }))
    }

    fn page(path: &str) -> PageState {
        let segments = PathSegments::parse(path).unwrap();
        resolve_page(&segments, &routing(), |doctype| {
            assert_eq!(doctype, TASK);
            task_meta()
        })
    }

    #[test]
    fn test_list_view_create_not_found() {
        assert_eq!(
            page("/task"),
            PageState::List {
                entry: RoutingMapEntry::new(TASK, "Task", "task").with_list_props("{}"),
            }
        );
        assert_eq!(
            page("/task/TASK-0001"),
            PageState::View {
                doctype: TASK.to_string(),
                name: "TASK-0001".to_string(),
            }
        );

        let mut autofill = AutofillFieldMap::new();
        autofill.insert("status".to_string(), json!("Open"));
        assert_eq!(
            page("/task/create"),
            PageState::Create {
                doctype: TASK.to_string(),
                autofill: autofill.clone(),
            }
        );
        assert_eq!(
            page("/task/new-cg-task-instance-ab12c1700000000000"),
            PageState::Create {
                doctype: TASK.to_string(),
                autofill,
            }
        );
        assert_eq!(page("/unknown-segment"), PageState::NotFound);
        assert_eq!(page("/unknown-segment/create"), PageState::NotFound);
    }

    #[test]
    fn test_list_does_not_need_metadata() {
        let segments = PathSegments::new("task", None);
        let state = resolve_page(&segments, &routing(), |_| {
            panic!("metadata requested for a list page")
        });
        assert!(matches!(state, PageState::List { .. }));
    }

    #[test]
    fn test_loading_until_routing_map_arrives() {
        let segments = PathSegments::new("task", Some("create".to_string()));
        for routing in [FetchState::NotStarted, FetchState::Pending] {
            assert_eq!(
                resolve_page(&segments, &routing, |_| task_meta()),
                PageState::Loading
            );
        }
    }

    #[test]
    fn test_loading_until_metadata_arrives() {
        for id in ["create", "TASK-0001"] {
            let segments = PathSegments::new("task", Some(id.to_string()));
            for meta in [FetchState::NotStarted, FetchState::Pending] {
                assert_eq!(
                    resolve_page(&segments, &routing(), |_| meta.clone()),
                    PageState::Loading
                );
            }
        }
    }

    #[test]
    fn test_routing_failure_is_an_error_state() {
        let segments = PathSegments::new("task", None);
        let failed = FetchState::Failed("Routing map request failed: 500".to_string());
        assert_eq!(
            resolve_page(&segments, &failed, |_| task_meta()),
            PageState::Error {
                message: "Routing map request failed: 500".to_string(),
                doctype: None,
            }
        );
    }

    #[test]
    fn test_metadata_failure_is_an_error_state() {
        let segments = PathSegments::new("task", Some("TASK-0001".to_string()));
        let state = resolve_page(&segments, &routing(), |_| {
            FetchState::Failed("Metadata request for 'CG Task Instance' failed: 403".to_string())
        });
        assert_eq!(
            state,
            PageState::Error {
                message: "Metadata request for 'CG Task Instance' failed: 403".to_string(),
                doctype: Some(TASK.to_string()),
            }
        );
    }

    #[test]
    fn test_empty_field_list_still_resolves() {
        let segments = PathSegments::new("task", Some("create".to_string()));
        let empty = FetchState::Ready(Arc::new(DocTypeMeta {
            name: TASK.to_string(),
            ..DocTypeMeta::default()
        }));
        assert_eq!(
            resolve_page(&segments, &routing(), |_| empty),
            PageState::Create {
                doctype: TASK.to_string(),
                autofill: AutofillFieldMap::new(),
            }
        );
    }

    #[test]
    fn test_mapped_doctype() {
        assert_eq!(
            mapped_doctype(&PathSegments::new("task", None), &routing()),
            Some(TASK.to_string())
        );
        assert_eq!(
            mapped_doctype(&PathSegments::new("branch", None), &routing()),
            None
        );
        assert_eq!(
            mapped_doctype(&PathSegments::new("task", None), &FetchState::Pending),
            None
        );
    }
}
