//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::pokeapi::{fetch_listing, fetch_types};
use crate::components::{
    header::Header,
    loading_screen::LoadingScreen,
    pagination::Pagination,
    pokemon_card::CardGrid,
    pokemon_modal::PokemonModal,
    search_bar::SearchBar,
    type_legend::TypeLegend,
};
use pokedex_common::format::result_count_label;
use pokedex_common::{
    settle, CardTracker, CatalogBrowser, DetailRecord, LoadStatus, Selection, Theme,
    TypeSummary, DEFAULT_API_BASE_URL, LISTING_LIMIT, LISTING_OFFSET,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App(theme: Theme) -> impl IntoView {
    // アプリケーション状態
    let (catalog_status, set_catalog_status) = signal(LoadStatus::NotStarted);
    let browser = RwSignal::new(CatalogBrowser::new(Vec::new()));
    let (types, set_types) = signal(Vec::<TypeSummary>::new());
    let selection = RwSignal::new(Selection::new());
    let tracker = StoredValue::new(CardTracker::new());

    // 一覧はマウント時に1回だけ取得
    set_catalog_status.set(LoadStatus::Loading);
    spawn_local(async move {
        let result = fetch_listing(DEFAULT_API_BASE_URL, LISTING_LIMIT, LISTING_OFFSET).await;
        let (working_set, status) = settle(result, |e| {
            gloo::console::error!("図鑑の読み込みに失敗:", e.to_string());
        });
        browser.update(|b| b.replace_working_set(working_set));
        set_catalog_status.set(status);
    });

    spawn_local(async move {
        let (list, _status) = settle(fetch_types(DEFAULT_API_BASE_URL).await, |e| {
            gloo::console::error!("タイプ一覧の読み込みに失敗:", e.to_string());
        });
        set_types.set(list);
    });

    let page_view = Memo::new(move |_| browser.with(|b| b.view()));
    let cards = Memo::new(move |_| page_view.with(|v| v.cards().to_vec()));
    let count_label = Memo::new(move |_| {
        browser.with(|b| result_count_label(b.filtered_count(), b.query()))
    });

    let on_select = move |detail: DetailRecord| selection.update(|s| s.select(detail));

    view! {
        <div class=format!("pokedex {}", theme.class_name())>
            <Show
                when=move || catalog_status.get().is_settled()
                fallback=|| view! { <LoadingScreen /> }
            >
                <div class="container">
                    <Header />
                    <SearchBar browser=browser />

                    {move || count_label.get().map(|label| view! { <p class="result-count">{label}</p> })}

                    <TypeLegend types=types theme=theme />

                    <Show
                        when=move || !page_view.with(|v| v.is_no_results())
                        fallback=|| view! {
                            <div class="no-results">
                                <p class="no-results-title">"🔍 見つかりませんでした"</p>
                                <p class="no-results-hint">"別の名前で検索してください"</p>
                            </div>
                        }
                    >
                        <CardGrid cards=cards theme=theme tracker=tracker on_select=on_select />
                    </Show>

                    <Pagination browser=browser />
                </div>
                <PokemonModal selection=selection theme=theme />
            </Show>
        </div>
    }
}
