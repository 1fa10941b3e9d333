//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"ポケモン図鑑"</h1>
            <div class="header-rule"></div>
            <p class="header-lead">
                "第一世代のポケモンを探検しよう。タイプ・能力値・特性をチェック！"
            </p>
        </header>
    }
}
