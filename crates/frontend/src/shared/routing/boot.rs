//! Routing map embedded in the page by the server.

use contracts::shared::routing::RoutingMap;

/// Id of the `<script type="application/json">` element holding the map.
pub const BOOT_ELEMENT_ID: &str = "__routing_map";

/// Reads the embedded routing map. `None` when the element is absent or
/// its content does not parse; the caller falls back to fetching.
pub fn read_boot_routing_map() -> Option<RoutingMap> {
    let text = web_sys::window()?
        .document()?
        .get_element_by_id(BOOT_ELEMENT_ID)?
        .text_content()?;
    parse_boot_payload(&text)
}

fn parse_boot_payload(text: &str) -> Option<RoutingMap> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<RoutingMap>(text) {
        Ok(map) => Some(map),
        Err(e) => {
            log::warn!("ignoring embedded routing map: {}", e);
            None
        }
    }
}
