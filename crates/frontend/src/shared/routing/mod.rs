//! Client side of doctype routing: the routing map store, the metadata
//! cache and the page dispatcher.

pub mod api;
pub mod boot;
pub mod context;
pub mod dispatch;
pub mod meta;
pub mod navigate;

pub use context::{use_routing, RoutingContext};
pub use dispatch::{mapped_doctype, resolve_page, PageState};
pub use meta::{use_meta, MetaContext};
pub use navigate::{use_open_create, use_open_doctype};
