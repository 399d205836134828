//! Placeholder pages for the non-content dispatcher states.

use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

#[component]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <Spinner />
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1 class="header__title">"Page not found"</h1>
            <p>"The address does not match any page."</p>
            <a class="button button--secondary" href="/">"Go to home"</a>
        </div>
    }
}

/// A required backend request failed; `on_retry` repeats it.
#[component]
pub fn ErrorPage(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="page page--centered">
            <MessageBar intent=MessageBarIntent::Error>
                <span>{message}</span>
            </MessageBar>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_retry.run(())
            >
                {icon("refresh")}
                "Retry"
            </Button>
        </div>
    }
}
