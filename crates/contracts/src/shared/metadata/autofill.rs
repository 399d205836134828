//! Default values for a brand-new record, derived from doctype metadata.

use std::collections::BTreeMap;

use super::types::FieldDescriptor;

/// `fieldname → default` for the fields of a new record.
pub type AutofillFieldMap = BTreeMap<String, serde_json::Value>;

/// Builds the autofill map for a create form.
///
/// `None` means the field list is not known yet and yields `None`, so callers
/// can tell "still loading" apart from "loaded, nothing to prefill". A field
/// contributes when it has a non-empty default and is neither a child table
/// nor a section break. Later duplicates of a fieldname overwrite earlier ones.
pub fn compute_autofill(fields: Option<&[FieldDescriptor]>) -> Option<AutofillFieldMap> {
    let fields = fields?;
    let map = fields
        .iter()
        .filter(|f| f.has_default() && !f.fieldtype.is_autofill_excluded())
        .filter_map(|f| {
            f.default
                .as_ref()
                .map(|value| (f.fieldname.clone(), value.clone()))
        })
        .collect();
    Some(map)
}
