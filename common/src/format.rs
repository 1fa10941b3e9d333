//! 表示用フォーマット
//!
//! カード・詳細モーダルで使う文字列変換（CLI / Web 共通）

/// 図鑑番号（3桁ゼロ埋め）
pub fn display_id(id: u32) -> String {
    format!("#{:03}", id)
}

/// 先頭だけ大文字にする
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 高さ（デシメートル → m）
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1} m", decimetres as f64 / 10.0)
}

/// 重さ（ヘクトグラム → kg）
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", hectograms as f64 / 10.0)
}

/// 能力値ラベル。6種以外はキーをそのまま返す
pub fn stat_label(key: &str) -> &str {
    match key {
        "hp" => "HP",
        "attack" => "こうげき",
        "defense" => "ぼうぎょ",
        "special-attack" => "とくこう",
        "special-defense" => "とくぼう",
        "speed" => "すばやさ",
        other => other,
    }
}

/// バーの最大値（これ以上は100%）
pub const STAT_BAR_MAX: u32 = 150;

/// 能力値バーの幅（%）
pub fn stat_bar_percent(value: u32) -> f64 {
    (value as f64 / STAT_BAR_MAX as f64 * 100.0).min(100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTier {
    High,
    Mid,
    Low,
}

impl StatTier {
    pub fn of(value: u32) -> Self {
        if value >= 100 {
            StatTier::High
        } else if value >= 70 {
            StatTier::Mid
        } else {
            StatTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatTier::High => "high",
            StatTier::Mid => "mid",
            StatTier::Low => "low",
        }
    }
}

/// 特性名の表示（最初のハイフンだけ空白にする）
pub fn ability_label(name: &str) -> String {
    name.replacen('-', " ", 1)
}

pub const HIDDEN_ABILITY_MARK: &str = "（隠れ特性）";

/// 検索結果件数の表示。クエリが空なら表示しない
pub fn result_count_label(count: usize, query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }
    Some(format!("{}匹見つかりました（「{}」）", count, query))
}
