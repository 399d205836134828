//! Field type enumeration for doctype metadata

use serde::{Deserialize, Serialize};

/// Frappe field type tag (`fieldtype` in a DocField).
///
/// Serialized as the display string Frappe uses on the wire
/// (`"Section Break"`, `"Table"`, ...). Unknown tags are kept in `Other`
/// so that metadata round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    #[default]
    Data,
    Link,
    DynamicLink,
    Select,
    Check,
    Int,
    Float,
    Currency,
    Percent,
    Date,
    Datetime,
    Time,
    Duration,
    Text,
    SmallText,
    LongText,
    TextEditor,
    Attach,
    AttachImage,
    Table,
    TableMultiSelect,
    SectionBreak,
    ColumnBreak,
    TabBreak,
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Data => "Data",
            Self::Link => "Link",
            Self::DynamicLink => "Dynamic Link",
            Self::Select => "Select",
            Self::Check => "Check",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Currency => "Currency",
            Self::Percent => "Percent",
            Self::Date => "Date",
            Self::Datetime => "Datetime",
            Self::Time => "Time",
            Self::Duration => "Duration",
            Self::Text => "Text",
            Self::SmallText => "Small Text",
            Self::LongText => "Long Text",
            Self::TextEditor => "Text Editor",
            Self::Attach => "Attach",
            Self::AttachImage => "Attach Image",
            Self::Table => "Table",
            Self::TableMultiSelect => "Table MultiSelect",
            Self::SectionBreak => "Section Break",
            Self::ColumnBreak => "Column Break",
            Self::TabBreak => "Tab Break",
            Self::Other(tag) => tag,
        }
    }

    /// Child-table and section-break fields never carry a flat default
    /// value, so they are skipped when building autofill maps.
    pub fn is_autofill_excluded(&self) -> bool {
        matches!(self, Self::Table | Self::SectionBreak)
    }

    /// Layout markers that describe form structure rather than data.
    pub fn is_layout(&self) -> bool {
        matches!(self, Self::SectionBreak | Self::ColumnBreak | Self::TabBreak)
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "Data" => Self::Data,
            "Link" => Self::Link,
            "Dynamic Link" => Self::DynamicLink,
            "Select" => Self::Select,
            "Check" => Self::Check,
            "Int" => Self::Int,
            "Float" => Self::Float,
            "Currency" => Self::Currency,
            "Percent" => Self::Percent,
            "Date" => Self::Date,
            "Datetime" => Self::Datetime,
            "Time" => Self::Time,
            "Duration" => Self::Duration,
            "Text" => Self::Text,
            "Small Text" => Self::SmallText,
            "Long Text" => Self::LongText,
            "Text Editor" => Self::TextEditor,
            "Attach" => Self::Attach,
            "Attach Image" => Self::AttachImage,
            "Table" => Self::Table,
            "Table MultiSelect" => Self::TableMultiSelect,
            "Section Break" => Self::SectionBreak,
            "Column Break" => Self::ColumnBreak,
            "Tab Break" => Self::TabBreak,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
