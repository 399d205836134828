//! Doctype routing: the server-provided routing map and the path scheme
//! built on top of it.
//!
//! The functions here are pure. "No route" is an empty string, never an error.

mod map;
mod path;

pub use map::{RoutingMap, RoutingMapEntry, RoutingMapError};
pub use path::{
    classify_id_segment, doctype_slug, new_record_id, new_record_id_with, resolve_create_path,
    resolve_path, IdIntent, PathSegments, CREATE_SEGMENT, FORM_DOCTYPE, FORM_ROUTE,
    NEW_RECORD_PREFIX,
};
