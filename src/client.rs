//! PokéAPI HTTPクライアント
//!
//! 通信とステータス確認のみを行い、パースは pokedex_common に任せる。

use crate::error::{PokedexError, Result};
use pokedex_common::{
    listing_url, parse_detail, parse_listing, parse_type_list, type_list_url, DetailRecord,
    SummaryRecord, TypeSummary,
};
use tracing::debug;

const USER_AGENT: &str = concat!("pokedex-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// タイムアウトは設定しない（トランスポートの既定値を使う）
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// 一覧を1回で取得
    pub async fn fetch_listing(&self, limit: u32, offset: u32) -> Result<Vec<SummaryRecord>> {
        let url = listing_url(&self.base_url, limit, offset);
        let body = self.get_text(&url).await?;
        Ok(parse_listing(&body)?)
    }

    /// SummaryRecordのURLから詳細を取得
    pub async fn fetch_detail(&self, url: &str) -> Result<DetailRecord> {
        let body = self.get_text(url).await?;
        Ok(parse_detail(&body)?)
    }

    pub async fn fetch_types(&self) -> Result<Vec<TypeSummary>> {
        let url = type_list_url(&self.base_url);
        let body = self.get_text(&url).await?;
        Ok(parse_type_list(&body)?)
    }
}
