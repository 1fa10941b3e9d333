//! PokéAPI のワイヤーフォーマット
//!
//! 一覧・詳細・タイプ一覧の各レスポンスをデシリアライズし、
//! 共有型（SummaryRecord / DetailRecord / TypeSummary）へ変換する。
//! 通信はCLI（reqwest）とWeb（fetch）がそれぞれ行う。

use crate::error::Result;
use crate::types::{AbilityEntry, DetailRecord, StatEntry, SummaryRecord, TypeSummary};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// 第一世代（151匹）を1回で取得する
pub const LISTING_LIMIT: u32 = 151;
pub const LISTING_OFFSET: u32 = 0;

/// タイプ一覧から除外する擬似タイプ
pub const HIDDEN_TYPES: &[&str] = &["unknown", "shadow"];

pub fn listing_url(base_url: &str, limit: u32, offset: u32) -> String {
    format!(
        "{}/pokemon?limit={}&offset={}",
        base_url.trim_end_matches('/'),
        limit,
        offset
    )
}

pub fn type_list_url(base_url: &str) -> String {
    format!("{}/type/", base_url.trim_end_matches('/'))
}

/// `{name, url}` 形式の参照
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// 一覧レスポンス（`/pokemon`, `/type/` 共通）
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    pub results: Vec<NamedResource>,
}

impl ListingResponse {
    /// API順のままSummaryRecordへ変換（ソートしない）
    pub fn into_records(self) -> Vec<SummaryRecord> {
        self.results
            .into_iter()
            .map(|r| SummaryRecord::new(r.name, r.url))
            .collect()
    }

    /// 擬似タイプを除いたタイプ一覧
    pub fn into_types(self) -> Vec<TypeSummary> {
        self.results
            .into_iter()
            .filter(|r| !HIDDEN_TYPES.contains(&r.name.as_str()))
            .map(|r| TypeSummary {
                name: r.name,
                url: r.url,
            })
            .collect()
    }
}

/// 詳細レスポンス（必要なフィールドのみ）
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

impl Sprites {
    /// 公式アートワーク → 通常スプライト の2段フォールバック
    pub fn preferred_image(&self) -> Option<String> {
        let artwork = self
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref());

        artwork
            .filter(|url| !url.is_empty())
            .or_else(|| self.front_default.as_deref().filter(|url| !url.is_empty()))
            .map(str::to_string)
    }
}

impl From<PokemonResponse> for DetailRecord {
    fn from(resp: PokemonResponse) -> Self {
        let image_url = resp.sprites.preferred_image();
        Self {
            id: resp.id,
            name: resp.name,
            image_url,
            types: resp.types.into_iter().map(|t| t.kind.name).collect(),
            height: resp.height,
            weight: resp.weight,
            stats: resp
                .stats
                .into_iter()
                .map(|s| StatEntry {
                    key: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            abilities: resp
                .abilities
                .into_iter()
                .map(|a| AbilityEntry {
                    name: a.ability.name,
                    is_hidden: a.is_hidden,
                })
                .collect(),
        }
    }
}

/// 一覧レスポンスをパース
pub fn parse_listing(text: &str) -> Result<Vec<SummaryRecord>> {
    let listing: ListingResponse = serde_json::from_str(text)?;
    Ok(listing.into_records())
}

/// 詳細レスポンスをパース
pub fn parse_detail(text: &str) -> Result<DetailRecord> {
    let resp: PokemonResponse = serde_json::from_str(text)?;
    Ok(resp.into())
}

/// タイプ一覧レスポンスをパース（unknown / shadow は除外）
pub fn parse_type_list(text: &str) -> Result<Vec<TypeSummary>> {
    let listing: ListingResponse = serde_json::from_str(text)?;
    Ok(listing.into_types())
}
