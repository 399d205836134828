//! Doctype metadata as delivered by the backend
//!
//! Only the parts of a DocType definition the client needs are modelled;
//! everything else in the payload is ignored on deserialization.

use serde::{Deserialize, Serialize};

use super::field_type::FieldType;

// ============================================================================
// Doctype-level metadata
// ============================================================================

/// Schema descriptor for one doctype (entity type).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocTypeMeta {
    pub name: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl DocTypeMeta {
    /// Fields that hold data, in form order (layout markers skipped).
    pub fn data_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.fieldtype.is_layout())
    }
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// One DocField entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub fieldname: String,
    #[serde(default)]
    pub fieldtype: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Frappe sends `reqd` as 0/1.
    #[serde(default, with = "int_bool")]
    pub reqd: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

impl FieldDescriptor {
    pub fn new(fieldname: impl Into<String>, fieldtype: FieldType) -> Self {
        Self {
            fieldname: fieldname.into(),
            fieldtype,
            ..Self::default()
        }
    }

    pub fn with_default(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// A default counts only when it is present and not null or `""`.
    pub fn has_default(&self) -> bool {
        match &self.default {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.fieldname)
    }
}

mod int_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Option::<Flag>::deserialize(deserializer)? {
            Some(Flag::Bool(b)) => b,
            Some(Flag::Int(i)) => i != 0,
            None => false,
        })
    }
}
