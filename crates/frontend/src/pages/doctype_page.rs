//! Page component for `/{url}` and `/{url}/{id}` paths.

use contracts::shared::routing::PathSegments;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{CreatePage, ErrorPage, ListPage, LoadingPage, NotFoundPage, ViewPage};
use crate::shared::routing::{mapped_doctype, resolve_page, use_meta, use_routing, PageState};

#[component]
pub fn DoctypePage() -> impl IntoView {
    let routing = use_routing();
    let meta = use_meta();
    let location = use_location();

    let segments = Memo::new(move |_| PathSegments::parse(&location.pathname.get()));

    // Metadata is needed only for record pages; request it as soon as the
    // doctype is known.
    Effect::new(move |_| {
        let Some(segments) = segments.get() else {
            return;
        };
        if segments.id_segment.is_none() {
            return;
        }
        if let Some(doctype) = mapped_doctype(&segments, &routing.state()) {
            meta.ensure(&doctype);
        }
    });

    let page = Memo::new(move |_| match segments.get() {
        Some(segments) => resolve_page(&segments, &routing.state(), |doctype| meta.state(doctype)),
        None => PageState::NotFound,
    });

    Effect::new(move |_| {
        log::debug!("{} -> {:?}", location.pathname.get_untracked(), page.get());
    });

    move || match page.get() {
        PageState::Loading => view! { <LoadingPage /> }.into_any(),
        PageState::NotFound => view! { <NotFoundPage /> }.into_any(),
        PageState::List { entry } => view! { <ListPage entry=entry /> }.into_any(),
        PageState::Create { doctype, autofill } => {
            view! { <CreatePage doctype=doctype autofill=autofill /> }.into_any()
        }
        PageState::View { doctype, name } => {
            view! { <ViewPage doctype=doctype name=name /> }.into_any()
        }
        PageState::Error { message, doctype } => {
            let on_retry = Callback::new(move |_: ()| match &doctype {
                Some(doctype) => meta.retry(doctype),
                None => routing.reload(),
            });
            view! { <ErrorPage message=message on_retry=on_retry /> }.into_any()
        }
    }
}
