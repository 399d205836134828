//! File-backed stand-in for the Frappe site's routing map and doctype
//! definitions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use contracts::shared::metadata::{DocTypeMeta, FieldType};
use contracts::shared::routing::RoutingMap;
use thiserror::Error;

use super::config::{resolve_path, FixturesConfig};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("doctype '{name}' is defined twice")]
    DuplicateDoctype { name: String },
}

pub struct FixtureStore {
    routing_map: RoutingMap,
    doctypes: HashMap<String, DocTypeMeta>,
}

impl FixtureStore {
    pub fn new(
        routing_map: RoutingMap,
        doctypes: Vec<DocTypeMeta>,
    ) -> Result<Self, FixtureError> {
        let mut by_name = HashMap::with_capacity(doctypes.len());
        for meta in doctypes {
            if by_name.contains_key(&meta.name) {
                return Err(FixtureError::DuplicateDoctype { name: meta.name });
            }
            by_name.insert(meta.name.clone(), meta);
        }
        Ok(Self {
            routing_map,
            doctypes: by_name,
        })
    }

    pub fn load(config: &FixturesConfig) -> Result<Self, FixtureError> {
        let map_path = resolve_path(&config.routing_map);
        let routing_map = parse_file::<RoutingMap>(&map_path)?;

        let dir = resolve_path(&config.doctypes_dir);
        let doctypes = load_doctypes(&dir)?;

        tracing::info!(
            "Fixtures loaded: {} routed doctypes from {}, {} definitions from {}",
            routing_map.len(),
            map_path.display(),
            doctypes.len(),
            dir.display()
        );
        for entry in routing_map.iter() {
            if !doctypes.iter().any(|d| d.name == entry.doctype) {
                tracing::warn!("routed doctype '{}' has no definition", entry.doctype);
            }
        }

        Self::new(routing_map, doctypes)
    }

    pub fn routing_map(&self) -> &RoutingMap {
        &self.routing_map
    }

    pub fn doctype(&self, name: &str) -> Option<&DocTypeMeta> {
        self.doctypes.get(name)
    }

    /// The doctype followed by the child-table doctypes its `Table` fields
    /// point to, the way the desk API bundles them.
    pub fn doctype_bundle(&self, name: &str) -> Option<Vec<DocTypeMeta>> {
        let meta = self.doctype(name)?;
        let mut bundle = vec![meta.clone()];
        for field in &meta.fields {
            if !matches!(field.fieldtype, FieldType::Table | FieldType::TableMultiSelect) {
                continue;
            }
            let Some(child) = field.options.as_deref().and_then(|o| self.doctype(o)) else {
                continue;
            };
            if !bundle.iter().any(|d| d.name == child.name) {
                bundle.push(child.clone());
            }
        }
        Some(bundle)
    }
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let text = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_doctypes(dir: &Path) -> Result<Vec<DocTypeMeta>, FixtureError> {
    let io_err = |source| FixtureError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|p| parse_file::<DocTypeMeta>(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::metadata::FieldDescriptor;
    use contracts::shared::routing::RoutingMapEntry;

    fn meta(name: &str, fields: Vec<FieldDescriptor>) -> DocTypeMeta {
        DocTypeMeta {
            name: name.to_string(),
            module: None,
            fields,
        }
    }

    fn store() -> FixtureStore {
        let map = RoutingMap::from_entries([RoutingMapEntry::new("CG Task Instance", "Task", "task")])
            .unwrap();
        let mut checklist = FieldDescriptor::new("checklist", FieldType::Table);
        checklist.options = Some("CG Task Checklist Item".to_string());

        FixtureStore::new(
            map,
            vec![
                meta(
                    "CG Task Instance",
                    vec![FieldDescriptor::new("subject", FieldType::Data), checklist],
                ),
                meta("CG Task Checklist Item", vec![]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bundle_includes_child_tables() {
        let bundle = store().doctype_bundle("CG Task Instance").unwrap();
        let names: Vec<_> = bundle.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["CG Task Instance", "CG Task Checklist Item"]);
    }

    #[test]
    fn test_unknown_doctype() {
        assert!(store().doctype_bundle("CG Branch").is_none());
    }

    #[test]
    fn test_duplicate_definition_is_rejected() {
        let result = FixtureStore::new(
            RoutingMap::new(),
            vec![meta("CG Branch", vec![]), meta("CG Branch", vec![])],
        );
        assert!(matches!(result, Err(FixtureError::DuplicateDoctype { .. })));
    }

    #[test]
    fn test_bundled_fixtures_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let config = FixturesConfig {
            routing_map: dir.join("routing_map.json").display().to_string(),
            doctypes_dir: dir.join("doctypes").display().to_string(),
        };

        let store = FixtureStore::load(&config).unwrap();
        for entry in store.routing_map().iter() {
            assert!(store.doctype(&entry.doctype).is_some(), "{}", entry.doctype);
        }
        assert_eq!(
            store.routing_map().find_by_url("task").unwrap().doctype,
            "CG Task Instance"
        );
    }
}
