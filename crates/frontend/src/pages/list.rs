use contracts::shared::routing::RoutingMapEntry;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::routing::use_open_create;

/// List page of a routed doctype. Rows are rendered by the grid layer; this
/// page owns the header and hands `list_props` down untouched.
#[component]
pub fn ListPage(entry: RoutingMapEntry) -> impl IntoView {
    let open_create = use_open_create();
    let doctype = entry.doctype.clone();

    let title = if entry.label.is_empty() {
        entry.doctype.clone()
    } else {
        entry.label.clone()
    };

    let list_props = match entry.list_props_value() {
        Ok(value) => {
            let pretty = serde_json::to_string_pretty(&value).unwrap_or_default();
            view! { <pre class="list-props">{pretty}</pre> }.into_any()
        }
        Err(e) => {
            log::warn!("list_props of '{}' is not valid JSON: {}", entry.doctype, e);
            view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    <span>{format!("List configuration is invalid: {}", e)}</span>
                </MessageBar>
            }
            .into_any()
        }
    };

    view! {
        <div class="page" data-doctype=entry.doctype.clone()>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{title}</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_create(&doctype)
                    >
                        {icon("plus")}
                        "New"
                    </Button>
                </div>
            </div>
            {list_props}
        </div>
    }
}
