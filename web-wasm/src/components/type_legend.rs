//! タイプ凡例

use leptos::prelude::*;
use pokedex_common::{Theme, TypeSummary};

#[component]
pub fn TypeLegend(types: ReadSignal<Vec<TypeSummary>>, theme: Theme) -> impl IntoView {
    view! {
        <Show when=move || types.with(|t| !t.is_empty())>
            <div class="type-legend">
                <For
                    each=move || types.get()
                    key=|t| t.name.clone()
                    children=move |t| {
                        let color = theme.type_color(&t.name);
                        view! {
                            <span class="type-badge" style=format!("background-color: {}", color)>
                                {t.name}
                            </span>
                        }
                    }
                />
            </div>
        </Show>
    }
}
