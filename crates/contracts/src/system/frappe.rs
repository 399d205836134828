use serde::{Deserialize, Serialize};

use crate::shared::metadata::DocTypeMeta;

/// Whitelisted method returning the routing map.
pub const ROUTING_MAP_METHOD: &str = "clapgrow_app.api.routing.get_routing_map";
/// Standard desk method returning a doctype with its fields.
pub const GET_DOCTYPE_METHOD: &str = "frappe.desk.form.load.getdoctype";

/// `/api/method/{method}`
pub fn api_method_path(method: &str) -> String {
    format!("/api/method/{method}")
}

/// Envelope of every `/api/method/*` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodResponse<T> {
    pub message: T,
}

/// Envelope of `frappe.desk.form.load.getdoctype`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDoctypeResponse {
    #[serde(default)]
    pub docs: Vec<DocTypeMeta>,
}

impl GetDoctypeResponse {
    /// The requested doctype; child-table doctypes may follow it in `docs`.
    pub fn into_doctype(self, doctype: &str) -> Option<DocTypeMeta> {
        self.docs.into_iter().find(|d| d.name == doctype)
    }
}

/// Error body returned by the server for failed method calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodError {
    pub exc_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::routing::RoutingMap;
    use serde_json::json;

    #[test]
    fn test_routing_map_envelope() {
        let response: MethodResponse<RoutingMap> = serde_json::from_value(json!({
            "message": {"CG Task Instance": {"url": "task", "label": "Task", "list_props": "{}"}}
        }))
        .unwrap();
        assert!(response.message.get("CG Task Instance").is_some());
    }

    #[test]
    fn test_getdoctype_picks_requested_doc() {
        let response: GetDoctypeResponse = serde_json::from_value(json!({
            "docs": [
                {"name": "CG Task Instance", "fields": [{"fieldname": "subject", "fieldtype": "Data"}]},
                {"name": "CG Checklist Item", "fields": []}
            ]
        }))
        .unwrap();

        let meta = response.into_doctype("CG Task Instance").unwrap();
        assert_eq!(meta.fields.len(), 1);
    }

    #[test]
    fn test_api_method_path() {
        assert_eq!(
            api_method_path(GET_DOCTYPE_METHOD),
            "/api/method/frappe.desk.form.load.getdoctype"
        );
    }
}
