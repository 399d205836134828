use leptos::prelude::*;

use super::LoadingPage;
use crate::shared::icons::icon;
use crate::shared::routing::use_routing;

/// Index of every routed doctype with its list and create links.
#[component]
pub fn HomePage() -> impl IntoView {
    let routing = use_routing();

    move || {
        let Some(map) = routing.routing_map() else {
            return view! { <LoadingPage /> }.into_any();
        };

        let rows = map
            .iter()
            .map(|entry| {
                let list_href = routing.resolve_path(&entry.doctype, None, None);
                let create_href = routing.resolve_create_path(&entry.doctype);
                view! {
                    <tr class="table__row">
                        <td class="table__cell">
                            <a href=list_href>{entry.label.clone()}</a>
                        </td>
                        <td class="table__cell">{entry.doctype.clone()}</td>
                        <td class="table__cell">
                            <a class="button button--secondary" href=create_href>
                                {icon("plus")}
                                "New"
                            </a>
                        </td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div class="page">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">"Clapgrow"</h1>
                    </div>
                </div>
                <div class="table">
                    <table class="table__data table--striped">
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>
        }
        .into_any()
    }
}
