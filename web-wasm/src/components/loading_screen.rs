//! 読み込み中画面

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p class="loading-title">"図鑑を読み込み中..."</p>
            <p class="loading-sub">"PokéAPIに接続しています"</p>
        </div>
    }
}
