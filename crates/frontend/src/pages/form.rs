//! `/form/{doctype}`: the field layout of a doctype definition.

use contracts::shared::routing::PathSegments;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{ErrorPage, LoadingPage, NotFoundPage};
use crate::shared::fetch_state::FetchState;
use crate::shared::routing::use_meta;

#[component]
pub fn FormPage() -> impl IntoView {
    let meta = use_meta();
    let location = use_location();

    let doctype = Memo::new(move |_| {
        PathSegments::parse(&location.pathname.get()).and_then(|s| s.id_segment)
    });

    Effect::new(move |_| {
        if let Some(doctype) = doctype.get() {
            meta.ensure(&doctype);
        }
    });

    move || {
        let Some(name) = doctype.get() else {
            return view! { <NotFoundPage /> }.into_any();
        };
        match meta.state(&name) {
            FetchState::NotStarted | FetchState::Pending => view! { <LoadingPage /> }.into_any(),
            FetchState::Failed(message) => {
                let on_retry = Callback::new({
                    let name = name.clone();
                    move |_: ()| meta.retry(&name)
                });
                view! { <ErrorPage message=message on_retry=on_retry /> }.into_any()
            }
            FetchState::Ready(doc) => {
                let rows = doc
                    .data_fields()
                    .map(|field| {
                        let default = field
                            .default
                            .as_ref()
                            .map(|v| v.to_string())
                            .unwrap_or_default();
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{field.fieldname.clone()}</td>
                                <td class="table__cell">{field.display_label().to_string()}</td>
                                <td class="table__cell">{field.fieldtype.to_string()}</td>
                                <td class="table__cell">{default}</td>
                                <td class="table__cell">{if field.reqd { "✓" } else { "" }}</td>
                            </tr>
                        }
                    })
                    .collect_view();

                view! {
                    <div class="page">
                        <div class="header">
                            <div class="header__content">
                                <h1 class="header__title">{format!("Form: {}", name)}</h1>
                            </div>
                        </div>
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Field"</th>
                                        <th class="table__header-cell">"Label"</th>
                                        <th class="table__header-cell">"Type"</th>
                                        <th class="table__header-cell">"Default"</th>
                                        <th class="table__header-cell">"Required"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        </div>
                    </div>
                }
                .into_any()
            }
        }
    }
}
