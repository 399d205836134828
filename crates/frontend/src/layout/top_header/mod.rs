use crate::layout::global_context::use_global;
use crate::shared::fetch_state::FetchState;
use crate::shared::icons::icon;
use crate::shared::routing::use_routing;
use leptos::prelude::*;

/// Brand bar with the sidebar toggle and the routing map status.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global();
    let routing = use_routing();

    let sidebar_open = move || ctx.sidebar_open.get();

    let status = move || match routing.state() {
        FetchState::Failed(e) => view! {
            <button
                class="top-header__icon-btn top-header__status--failed"
                title=format!("Routing unavailable: {e}. Click to retry.")
                on:click=move |_| routing.reload()
            >
                {icon("refresh")}
            </button>
        }
        .into_any(),
        FetchState::Ready(map) => view! {
            <span class="top-header__status">{format!("{} doctypes", map.len())}</span>
        }
        .into_any(),
        _ => ().into_any(),
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title=move || if sidebar_open() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if sidebar_open() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <a class="top-header__title" href="/">"Clapgrow"</a>
            </div>
            <div class="top-header__right">{status}</div>
        </div>
    }
}
