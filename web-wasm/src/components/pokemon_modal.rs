//! 詳細モーダル
//!
//! 選択中のポケモンがあるときだけ表示する。閉じるボタンで選択解除

use leptos::prelude::*;
use pokedex_common::format::{
    ability_label, capitalize, display_id, format_height, format_weight, stat_bar_percent,
    stat_label, StatTier, HIDDEN_ABILITY_MARK,
};
use pokedex_common::{DetailRecord, Selection, Theme};

#[component]
pub fn PokemonModal(selection: RwSignal<Selection>, theme: Theme) -> impl IntoView {
    view! {
        <Show when=move || selection.with(|s| s.is_open())>
            {move || {
                selection
                    .with(|s| s.current().cloned())
                    .map(|detail| view! { <ModalBody detail=detail theme=theme selection=selection /> })
            }}
        </Show>
    }
}

#[component]
fn ModalBody(detail: DetailRecord, theme: Theme, selection: RwSignal<Selection>) -> impl IntoView {
    let image = detail.image_url.clone().map(|src| {
        let alt = detail.name.clone();
        view! { <img class="modal-image" src=src alt=alt /> }
    });

    let badges = detail
        .types
        .iter()
        .map(|t| {
            let color = theme.type_color(t);
            view! {
                <span class="type-badge type-badge-large" style=format!("background-color: {}", color)>
                    {t.clone()}
                </span>
            }
        })
        .collect_view();

    let stats = detail
        .stats
        .iter()
        .map(|stat| {
            let tier = StatTier::of(stat.value);
            let width = format!("width: {:.0}%", stat_bar_percent(stat.value));
            view! {
                <div class="stat-row">
                    <div class="stat-label">{stat_label(&stat.key).to_string()}</div>
                    <div class="stat-track">
                        <div class=format!("stat-fill stat-{}", tier.as_str()) style=width></div>
                    </div>
                    <div class="stat-value">{stat.value.to_string()}</div>
                </div>
            }
        })
        .collect_view();

    let abilities = detail
        .abilities
        .iter()
        .map(|ability| {
            let hidden = ability.is_hidden.then(|| {
                view! { <span class="ability-hidden">{HIDDEN_ABILITY_MARK}</span> }
            });
            view! {
                <span class="ability">
                    {ability_label(&ability.name)}
                    {hidden}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h2>{capitalize(&detail.name)}</h2>
                    <button
                        class="modal-close"
                        on:click=move |_| selection.update(|s| s.dismiss())
                    >
                        "×"
                    </button>
                </div>

                <div class="modal-content">
                    <div class="modal-hero">
                        {image}
                        <p class="modal-id">{display_id(detail.id)}</p>
                        <div class="type-badges">{badges}</div>
                    </div>

                    <section>
                        <h3>"からだ"</h3>
                        <div class="physical-grid">
                            <div class="physical height">
                                <p class="physical-label">"高さ"</p>
                                <p class="physical-value">{format_height(detail.height)}</p>
                            </div>
                            <div class="physical weight">
                                <p class="physical-label">"重さ"</p>
                                <p class="physical-value">{format_weight(detail.weight)}</p>
                            </div>
                        </div>
                    </section>

                    <section>
                        <h3>"能力値"</h3>
                        <div class="stats">{stats}</div>
                    </section>

                    <section>
                        <h3>"特性"</h3>
                        <div class="abilities">{abilities}</div>
                    </section>
                </div>
            </div>
        </div>
    }
}
