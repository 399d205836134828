use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::pages::{DoctypePage, FormPage, HomePage, NotFoundPage};
use crate::shared::routing::use_routing;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! {
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/form/:name") view=FormPage />
                    <Route path=path!("/:doctype") view=DoctypePage />
                    <Route path=path!("/:doctype/:name") view=DoctypePage />
                </Routes>
            }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    // Populate the routing map once per session; pages wait on its state.
    use_routing().load();

    view! {
        <Router>
            <MainLayout />
        </Router>
    }
}
