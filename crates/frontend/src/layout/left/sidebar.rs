//! Sidebar with one item per routed doctype

use contracts::shared::routing::RoutingMapEntry;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use thaw::*;

use crate::shared::fetch_state::FetchState;
use crate::shared::icons::icon;
use crate::shared::routing::{use_routing, RoutingContext};

/// `true` when `pathname` is the list page of `url` or one of its records.
fn is_active(pathname: &str, url: &str) -> bool {
    pathname
        .trim_start_matches('/')
        .split('/')
        .next()
        .is_some_and(|segment| segment == url)
}

fn list_href(routing: &RoutingContext, entry: &RoutingMapEntry) -> String {
    routing.resolve_path(&entry.doctype, None, None)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let routing = use_routing();
    let location = use_location();

    let item = move |entry: RoutingMapEntry| {
        let url = entry.url.clone();
        let href = list_href(&routing, &entry);
        let label = if entry.label.is_empty() {
            entry.doctype.clone()
        } else {
            entry.label.clone()
        };
        view! {
            <a
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_active(&location.pathname.get(), &url)
                href=href
            >
                <div class="app-sidebar__item-content">
                    {icon("list")}
                    <span>{label}</span>
                </div>
            </a>
        }
    };

    view! {
        <div class="app-sidebar__content">
            {move || match routing.state() {
                FetchState::NotStarted | FetchState::Pending => view! { <Spinner /> }.into_any(),
                FetchState::Failed(_) => view! {
                    <div class="app-sidebar__empty">"Navigation unavailable"</div>
                }
                .into_any(),
                FetchState::Ready(map) => map
                    .iter()
                    .cloned()
                    .map(item)
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
