pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::use_global;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |        routed page           |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_global();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <nav data-zone="left" class="left" class:hidden=move || !ctx.sidebar_open.get()>
                    {left()}
                </nav>

                <main data-zone="center" class="app-main app-content">
                    {center()}
                </main>
            </div>
        </div>
    }
}
