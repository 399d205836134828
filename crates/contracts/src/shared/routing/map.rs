use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Route configuration for one doctype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingMapEntry {
    /// Filled from the map key when the payload omits it.
    #[serde(default)]
    pub doctype: String,
    #[serde(default)]
    pub label: String,
    pub url: String,
    /// JSON-encoded list view configuration, passed through untouched.
    #[serde(default)]
    pub list_props: String,
}

impl RoutingMapEntry {
    pub fn new(
        doctype: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            doctype: doctype.into(),
            label: label.into(),
            url: url.into(),
            list_props: String::new(),
        }
    }

    pub fn with_list_props(mut self, list_props: impl Into<String>) -> Self {
        self.list_props = list_props.into();
        self
    }

    /// Parses `list_props`; an empty string reads as `{}`.
    pub fn list_props_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.list_props.trim().is_empty() {
            return Ok(serde_json::Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&self.list_props)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingMapError {
    #[error("url segment '{url}' is claimed by both '{first}' and '{second}'")]
    DuplicateUrl {
        url: String,
        first: String,
        second: String,
    },
}

/// `doctype → RoutingMapEntry`, in the order the backend sent them.
///
/// Url segments are unique: every constructor rejects a second doctype
/// claiming a segment that is already taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, RoutingMapEntry>",
    into = "IndexMap<String, RoutingMapEntry>"
)]
pub struct RoutingMap {
    entries: IndexMap<String, RoutingMapEntry>,
}

impl RoutingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Result<Self, RoutingMapError>
    where
        I: IntoIterator<Item = RoutingMapEntry>,
    {
        let mut map = Self::new();
        for entry in entries {
            map.insert(entry)?;
        }
        Ok(map)
    }

    /// Adds or replaces the entry for `entry.doctype`.
    pub fn insert(&mut self, entry: RoutingMapEntry) -> Result<(), RoutingMapError> {
        if let Some(owner) = self
            .entries
            .values()
            .find(|e| e.url == entry.url && e.doctype != entry.doctype)
        {
            return Err(RoutingMapError::DuplicateUrl {
                url: entry.url,
                first: owner.doctype.clone(),
                second: entry.doctype,
            });
        }
        self.entries.insert(entry.doctype.clone(), entry);
        Ok(())
    }

    pub fn get(&self, doctype: &str) -> Option<&RoutingMapEntry> {
        self.entries.get(doctype)
    }

    /// Reverse lookup from a url segment; scans in insertion order.
    pub fn find_by_url(&self, url: &str) -> Option<&RoutingMapEntry> {
        self.entries.values().find(|e| e.url == url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoutingMapEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<IndexMap<String, RoutingMapEntry>> for RoutingMap {
    type Error = RoutingMapError;

    fn try_from(raw: IndexMap<String, RoutingMapEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(raw.into_iter().map(|(doctype, mut entry)| {
            entry.doctype = doctype;
            entry
        }))
    }
}

impl From<RoutingMap> for IndexMap<String, RoutingMapEntry> {
    fn from(map: RoutingMap) -> Self {
        map.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_fills_doctype_from_key() {
        let map: RoutingMap = serde_json::from_value(json!({
            "CG Task Instance": {"url": "task", "label": "Task", "list_props": "{}"},
            "CG Branch": {"url": "branch", "label": "Branch"}
        }))
        .unwrap();

        assert_eq!(map.len(), 2);
        let task = map.get("CG Task Instance").unwrap();
        assert_eq!(task.doctype, "CG Task Instance");
        assert_eq!(task.url, "task");
        assert_eq!(map.get("CG Branch").unwrap().list_props, "");
    }

    #[test]
    fn test_duplicate_url_is_rejected() {
        let result: Result<RoutingMap, _> = serde_json::from_value(json!({
            "CG Task Instance": {"url": "task"},
            "CG Task Template": {"url": "task"}
        }));
        assert!(result.is_err());

        let err = RoutingMap::from_entries([
            RoutingMapEntry::new("CG Task Instance", "Task", "task"),
            RoutingMapEntry::new("CG Task Template", "Template", "task"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RoutingMapError::DuplicateUrl {
                url: "task".to_string(),
                first: "CG Task Instance".to_string(),
                second: "CG Task Template".to_string(),
            }
        );
    }

    #[test]
    fn test_reinsert_same_doctype_replaces() {
        let mut map = RoutingMap::new();
        map.insert(RoutingMapEntry::new("CG Branch", "Branch", "branch"))
            .unwrap();
        map.insert(RoutingMapEntry::new("CG Branch", "Branches", "branch"))
            .unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("CG Branch").unwrap().label, "Branches");
    }

    #[test]
    fn test_find_by_url() {
        let map = RoutingMap::from_entries([
            RoutingMapEntry::new("CG Task Instance", "Task", "task"),
            RoutingMapEntry::new("CG Department", "Department", "department"),
        ])
        .unwrap();

        assert_eq!(
            map.find_by_url("department").map(|e| e.doctype.as_str()),
            Some("CG Department")
        );
        assert!(map.find_by_url("unknown-segment").is_none());
    }

    #[test]
    fn test_list_props_value() {
        let entry = RoutingMapEntry::new("CG Task Instance", "Task", "task")
            .with_list_props(r#"{"columns": ["subject", "status"]}"#);
        assert_eq!(
            entry.list_props_value().unwrap(),
            json!({"columns": ["subject", "status"]})
        );

        let empty = RoutingMapEntry::new("CG Branch", "Branch", "branch");
        assert_eq!(empty.list_props_value().unwrap(), json!({}));

        let broken = empty.with_list_props("{not json");
        assert!(broken.list_props_value().is_err());
    }

    #[test]
    fn test_serialize_preserves_order() {
        let map = RoutingMap::from_entries([
            RoutingMapEntry::new("B", "B", "b"),
            RoutingMapEntry::new("A", "A", "a"),
        ])
        .unwrap();
        let text = serde_json::to_string(&map).unwrap();
        assert!(text.find("\"B\"").unwrap() < text.find("\"A\"").unwrap());
    }
}
