//! URLクエリ文字列の読み取り

use pokedex_common::Theme;

/// `?theme=...` からテーマを決める。不正・未指定ならデフォルト
pub fn theme_from_search(search: &str) -> Theme {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "theme")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or_default()
}
