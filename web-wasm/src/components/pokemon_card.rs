//! ポケモンカード・グリッド
//!
//! カードはマウントごとに1回だけ詳細を取得する（キャッシュしない）。
//! アンマウント後に届いた結果は CardTracker の世代チェックで捨てる。

use leptos::prelude::*;
use leptos::task::spawn_local;
use pokedex_common::format::{capitalize, display_id};
use pokedex_common::{CardState, CardTracker, DetailRecord, SummaryRecord, Theme};
use crate::api::pokeapi::fetch_detail;

#[component]
pub fn CardGrid<F>(
    cards: Memo<Vec<SummaryRecord>>,
    theme: Theme,
    tracker: StoredValue<CardTracker>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(DetailRecord) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="card-grid">
            <For
                each=move || cards.get()
                key=|record| record.name.clone()
                children=move |record| {
                    let on_select = on_select.clone();
                    view! {
                        <PokemonCard
                            record=record
                            theme=theme
                            tracker=tracker
                            on_select=on_select
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn PokemonCard<F>(
    record: SummaryRecord,
    theme: Theme,
    tracker: StoredValue<CardTracker>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(DetailRecord) + 'static + Clone + Send + Sync,
{
    let (state, set_state) = signal(CardState::Pending);

    if let Some(ticket) = tracker.try_update_value(|t| t.mount()) {
        on_cleanup(move || tracker.update_value(|t| t.unmount(ticket)));

        let name = record.name.clone();
        let url = record.url.clone();
        spawn_local(async move {
            let result = fetch_detail(&url).await;
            if let Err(e) = &result {
                gloo::console::error!("詳細の読み込みに失敗:", name, e.to_string());
            }

            let current = tracker
                .try_with_value(|t| t.is_current(ticket))
                .unwrap_or(false);
            if current {
                let _ = set_state.try_set(CardState::from_result(result));
            }
        });
    }

    move || match state.get() {
        CardState::Pending => Some(
            view! {
                <div class="card card-placeholder">
                    <div class="placeholder-image"></div>
                    <div class="placeholder-line"></div>
                    <div class="placeholder-line short"></div>
                </div>
            }
            .into_any(),
        ),
        CardState::Resolved(detail) => {
            let on_select = on_select.clone();
            Some(view! { <ResolvedCard detail=detail theme=theme on_select=on_select /> }.into_any())
        }
        // 失敗したカードは何も描画しない
        CardState::Failed => None,
    }
}

#[component]
fn ResolvedCard<F>(detail: DetailRecord, theme: Theme, on_select: F) -> impl IntoView
where
    F: Fn(DetailRecord) + 'static + Clone + Send + Sync,
{
    let name = capitalize(&detail.name);
    let id = display_id(detail.id);
    let image = detail.image_url.clone().map(|src| {
        let alt = detail.name.clone();
        view! { <img class="card-image" src=src alt=alt /> }
    });
    let badges = detail
        .types
        .iter()
        .map(|t| {
            let color = theme.type_color(t);
            view! {
                <span class="type-badge" style=format!("background-color: {}", color)>
                    {t.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div
            class="card"
            on:click=move |_| on_select(detail.clone())
        >
            <div class="card-image-wrap">{image}</div>
            <h3 class="card-name">{name}</h3>
            <p class="card-id">{id}</p>
            <div class="type-badges">{badges}</div>
        </div>
    }
}
