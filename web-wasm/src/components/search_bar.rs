//! 検索バーコンポーネント

use leptos::prelude::*;
use pokedex_common::CatalogBrowser;

#[component]
pub fn SearchBar(browser: RwSignal<CatalogBrowser>) -> impl IntoView {
    view! {
        <div class="search-panel">
            <input
                type="text"
                class="search-input"
                placeholder="名前でポケモンを検索..."
                prop:value=move || browser.with(|b| b.query().to_string())
                on:input=move |ev| {
                    // 入力のたびに先頭ページへ戻る
                    let query = event_target_value(&ev);
                    browser.update(|b| b.set_query(query));
                }
            />
        </div>
    }
}
