//! Client-side pagination driven by the `page` query parameter.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

pub const PER_PAGE: usize = 10;

/// One-based page number; anything unparsable is page 1.
#[must_use]
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

#[must_use]
pub fn has_previous(page: usize) -> bool {
    page > 1
}

#[must_use]
pub fn has_next(total: usize, page: usize) -> bool {
    total > page.saturating_mul(PER_PAGE)
}

/// Rows shown on `page`. Empty past the end.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PER_PAGE).min(items.len());
    let end = start.saturating_add(PER_PAGE).min(items.len());
    &items[start..end]
}

/// Current page from the URL.
pub fn use_page() -> Memo<usize> {
    let query = use_query_map();
    Memo::new(move |_| query.with(|q| parse_page(q.get_str("page"))))
}

#[component]
pub fn Pagination(#[prop(into)] total: Signal<usize>) -> impl IntoView {
    let page = use_page();
    let navigate = use_navigate();
    let location = use_location();
    let go = move |target: usize| {
        let path = location.pathname.get_untracked();
        navigate(&format!("{path}?page={target}"), NavigateOptions::default());
    };
    let go_back = go.clone();

    view! {
        <nav class="pagination" aria-label="Pagination">
            <Show when=move || has_previous(page.get())>
                {
                    let go_back = go_back.clone();
                    view! {
                        <button class="btn pagination__prev" on:click=move |_| go_back(page.get_untracked() - 1)>
                            "Previous"
                        </button>
                    }
                }
            </Show>
            <span class="pagination__current">{move || page.get()}</span>
            <Show when=move || has_next(total.get(), page.get())>
                {
                    let go = go.clone();
                    view! {
                        <button class="btn pagination__next" on:click=move |_| go(page.get_untracked() + 1)>
                            "Next"
                        </button>
                    }
                }
            </Show>
        </nav>
    }
}
