use contracts::shared::metadata::AutofillFieldMap;
use leptos::prelude::*;

use crate::shared::icons::icon;

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// New-record page, opened with the doctype's default values already known.
#[component]
pub fn CreatePage(doctype: String, autofill: AutofillFieldMap) -> impl IntoView {
    let rows = autofill
        .into_iter()
        .map(|(fieldname, value)| {
            let value = display_value(&value);
            view! {
                <div class="form-group">
                    <label for=fieldname.clone()>{fieldname.clone()}</label>
                    <input type="text" id=fieldname readonly=true value=value />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page" data-doctype=doctype.clone()>
            <div class="header">
                <div class="header__content">
                    {icon("plus")}
                    <h1 class="header__title">{format!("New {}", doctype)}</h1>
                </div>
            </div>
            <div class="details-form">{rows}</div>
        </div>
    }
}
