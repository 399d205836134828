//! Browser path scheme for doctype pages.
//!
//! ```text
//! /{url}                    list
//! /{url}/{record-id}        view
//! /{url}/create             create, mapped doctype
//! /{doctype}/new-{slug}-..  create, unmapped doctype
//! /form/{record-id}         DocType definitions
//! ```
//!
//! Every segment is percent-encoded on the way out and decoded by
//! [`PathSegments::parse`] on the way in.

use super::map::RoutingMap;

/// Literal id segment for create pages of mapped doctypes.
pub const CREATE_SEGMENT: &str = "create";
/// The meta-doctype whose records are form definitions.
pub const FORM_DOCTYPE: &str = "DocType";
/// Fixed first segment for [`FORM_DOCTYPE`] records.
pub const FORM_ROUTE: &str = "form";
pub const NEW_RECORD_PREFIX: &str = "new-";

const NONCE_LEN: usize = 5;

/// What an id segment asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdIntent {
    Create,
    View,
}

/// Lowercases and hyphenates a doctype name: `"CG Task Instance"` → `"cg-task-instance"`.
pub fn doctype_slug(doctype: &str) -> String {
    doctype.replace(' ', "-").to_lowercase()
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Path for a doctype's list page, or for one of its records.
///
/// Returns `""` when the doctype has no route; callers must not navigate then.
pub fn resolve_path(
    map: &RoutingMap,
    doctype: &str,
    record_id: Option<&str>,
    search: Option<&str>,
) -> String {
    // An empty id addresses the list, not a record.
    let record_id = record_id.filter(|id| !id.is_empty());

    if doctype == FORM_DOCTYPE {
        return match record_id {
            Some(id) => format!("/{FORM_ROUTE}/{}", encode(id)),
            None => String::new(),
        };
    }

    let Some(entry) = map.get(doctype) else {
        return String::new();
    };

    match record_id {
        Some(id) => {
            let mut path = format!("/{}/{}", entry.url, encode(id));
            if let Some(query) = search.map(|q| q.trim_start_matches('?')) {
                if !query.is_empty() {
                    path.push('?');
                    path.push_str(query);
                }
            }
            path
        }
        None => format!("/{}", entry.url),
    }
}

/// Path that opens a create form for `doctype`.
///
/// Mapped doctypes use `/{url}/create`. Unmapped ones get a placeholder
/// record id under the raw doctype name so a form can still open.
pub fn resolve_create_path(map: &RoutingMap, doctype: &str) -> String {
    match map.get(doctype) {
        Some(entry) => format!("/{}/{CREATE_SEGMENT}", entry.url),
        None => format!("/{}/{}", encode(doctype), encode(&new_record_id(doctype))),
    }
}

/// Placeholder id for an unsaved record: `new-{slug}-{nonce}{unix-ms}`.
pub fn new_record_id(doctype: &str) -> String {
    let nonce = uuid::Uuid::new_v4().simple().to_string();
    new_record_id_with(
        doctype,
        &nonce[..NONCE_LEN],
        chrono::Utc::now().timestamp_millis(),
    )
}

pub fn new_record_id_with(doctype: &str, nonce: &str, millis: i64) -> String {
    format!(
        "{NEW_RECORD_PREFIX}{}-{nonce}{millis}",
        doctype_slug(doctype)
    )
}

/// Create when the id is `"create"` or starts with `new-{slug}`; View otherwise.
pub fn classify_id_segment(id: &str, doctype: &str) -> IdIntent {
    if id == CREATE_SEGMENT {
        return IdIntent::Create;
    }
    let prefix = format!("{NEW_RECORD_PREFIX}{}", doctype_slug(doctype));
    if id.starts_with(&prefix) {
        IdIntent::Create
    } else {
        IdIntent::View
    }
}

/// Decoded `/{doctype-segment}[/{id-segment}]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments {
    pub doctype_segment: String,
    pub id_segment: Option<String>,
}

impl PathSegments {
    pub fn new(doctype_segment: impl Into<String>, id_segment: Option<String>) -> Self {
        Self {
            doctype_segment: doctype_segment.into(),
            id_segment,
        }
    }

    /// Splits a browser path. Query string and fragment are ignored, a
    /// trailing slash is tolerated. `None` for `/` and for paths with more
    /// than two segments.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty()).map(decode);

        let doctype_segment = segments.next()?;
        let id_segment = segments.next();
        if segments.next().is_some() {
            return None;
        }
        Some(Self {
            doctype_segment,
            id_segment,
        })
    }
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
