use contracts::shared::routing::FORM_DOCTYPE;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::routing::{use_open_doctype, use_routing};

/// Existing record page.
#[component]
pub fn ViewPage(doctype: String, name: String) -> impl IntoView {
    let routing = use_routing();
    let open_doctype = use_open_doctype();
    let form_href = routing.resolve_path(FORM_DOCTYPE, Some(&doctype), None);
    let list_doctype = doctype.clone();

    view! {
        <div class="page" data-doctype=doctype.clone()>
            <div class="header">
                <div class="header__content">
                    {icon("file-text")}
                    <h1 class="header__title">{name}</h1>
                    <span class="header__subtitle">{doctype.clone()}</span>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| open_doctype(&list_doctype, None)
                    >
                        {icon("list")}
                        "Back to list"
                    </Button>
                    <a class="button button--secondary" href=form_href>"Form definition"</a>
                </div>
            </div>
        </div>
    }
}
