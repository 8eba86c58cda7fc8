//! Pagination Component
//!
//! Windowed page-number strip with prev/next. Out-of-range navigation is
//! prevented by disabling the buttons, not by clamping mid-click.

use leptos::prelude::*;

use crate::list::{page_window, PageEntry};

#[component]
pub fn Pagination(
    page: usize,
    pages: usize,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled={page <= 1}
                on:click=move |_| on_select.run(page.saturating_sub(1))
            >
                "‹"
            </button>
            {page_window(page, pages)
                .into_iter()
                .map(|entry| match entry {
                    PageEntry::Num(n) => view! {
                        <button
                            class=if n == page { "page-btn active" } else { "page-btn" }
                            on:click=move |_| on_select.run(n)
                        >
                            {n}
                        </button>
                    }
                    .into_any(),
                    PageEntry::Gap => view! { <span class="page-gap">"…"</span> }.into_any(),
                })
                .collect_view()}
            <button
                class="page-btn"
                disabled={page >= pages}
                on:click=move |_| on_select.run(page + 1)
            >
                "›"
            </button>
        </div>
    }
}
