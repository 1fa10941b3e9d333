//! 図鑑データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - SummaryRecord: 一覧APIの1件（名前 + 詳細URL）
//! - DetailRecord: 詳細APIを解決した結果
//! - TypeSummary: タイプ一覧の1件

use serde::{Deserialize, Serialize};

/// 一覧の1件。ロード1回分の間は不変
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// ロード内で一意な名前
    pub name: String,
    /// 詳細取得用URL（中身は解釈しない）
    pub url: String,
}

impl SummaryRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// 能力値（API順のまま保持）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatEntry {
    pub key: String,
    pub value: u32,
}

/// 特性
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityEntry {
    pub name: String,
    pub is_hidden: bool,
}

/// 詳細レコード。解決後は変更しない
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,

    /// 公式アートワーク → 通常スプライト の順で解決した画像URL
    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub types: Vec<String>,

    /// 高さ（デシメートル）
    #[serde(default)]
    pub height: u32,

    /// 重さ（ヘクトグラム）
    #[serde(default)]
    pub weight: u32,

    #[serde(default)]
    pub stats: Vec<StatEntry>,

    #[serde(default)]
    pub abilities: Vec<AbilityEntry>,
}

/// タイプ一覧の1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSummary {
    pub name: String,
    pub url: String,
}
