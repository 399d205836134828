use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::routing::{MetaContext, RoutingContext};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    // Routing map store and doctype metadata cache for the whole session.
    provide_context(RoutingContext::new());
    provide_context(MetaContext::new());

    view! {
        <AppRoutes />
    }
}
