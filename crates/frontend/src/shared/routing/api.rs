use contracts::shared::metadata::DocTypeMeta;
use contracts::shared::routing::RoutingMap;
use contracts::system::frappe::{
    GetDoctypeResponse, MethodResponse, GET_DOCTYPE_METHOD, ROUTING_MAP_METHOD,
};
use gloo_net::http::Request;

use crate::shared::api_utils::method_url;

/// Fetch the doctype routing map
pub async fn fetch_routing_map() -> Result<RoutingMap, String> {
    let response = Request::get(&method_url(ROUTING_MAP_METHOD, &[]))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Routing map request failed: {}", response.status()));
    }

    response
        .json::<MethodResponse<RoutingMap>>()
        .await
        .map(|r| r.message)
        .map_err(|e| format!("Failed to parse routing map: {}", e))
}

/// Fetch field metadata for one doctype
pub async fn fetch_doctype_meta(doctype: &str) -> Result<DocTypeMeta, String> {
    let response = Request::get(&method_url(GET_DOCTYPE_METHOD, &[("doctype", doctype)]))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Metadata request for '{}' failed: {}",
            doctype,
            response.status()
        ));
    }

    response
        .json::<GetDoctypeResponse>()
        .await
        .map_err(|e| format!("Failed to parse metadata: {}", e))?
        .into_doctype(doctype)
        .ok_or_else(|| format!("Metadata response has no '{}' doc", doctype))
}
