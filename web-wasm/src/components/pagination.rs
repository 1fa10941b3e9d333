//! ページ送りコンポーネント
//!
//! 1ページ以下なら何も表示しない

use leptos::prelude::*;
use pokedex_common::CatalogBrowser;

#[component]
pub fn Pagination(browser: RwSignal<CatalogBrowser>) -> impl IntoView {
    let page_index = Memo::new(move |_| browser.with(|b| b.page_index()));
    let page_count = Memo::new(move |_| browser.with(|b| b.page_count()));

    view! {
        <Show when=move || { page_count.get() > 1 }>
            <nav class="pagination">
                <button
                    class="btn btn-page"
                    disabled=move || page_index.get() == 0
                    on:click=move |_| browser.update(|b| b.previous_page())
                >
                    "← 前へ"
                </button>

                <span class="page-indicator">
                    {move || format!("{} / {}", page_index.get() + 1, page_count.get())}
                </span>

                <button
                    class="btn btn-page"
                    disabled=move || page_index.get() + 1 >= page_count.get()
                    on:click=move |_| browser.update(|b| b.next_page())
                >
                    "次へ →"
                </button>
            </nav>
        </Show>
    }
}
