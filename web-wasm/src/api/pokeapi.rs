//! PokéAPI連携（fetch）
//!
//! レスポンスのパースと変換は pokedex_common の型を使う。
//! JsValue のエラーはすべて Error::Fetch にまとめる。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use pokedex_common::{
    listing_url, type_list_url, DetailRecord, Error, ListingResponse, PokemonResponse, Result,
    SummaryRecord, TypeSummary,
};

fn js_error(value: JsValue) -> Error {
    Error::Fetch(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// GETしてJSONを返す（タイムアウトはブラウザ既定）
async fn fetch_json(url: &str) -> std::result::Result<JsValue, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}: {}", resp.status(), url)));
    }

    JsFuture::from(resp.json()?).await
}

/// 一覧取得（1回のみ）
pub async fn fetch_listing(base_url: &str, limit: u32, offset: u32) -> Result<Vec<SummaryRecord>> {
    let json = fetch_json(&listing_url(base_url, limit, offset))
        .await
        .map_err(js_error)?;
    let listing: ListingResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Fetch(e.to_string()))?;
    Ok(listing.into_records())
}

/// 詳細取得（カードごと）
pub async fn fetch_detail(url: &str) -> Result<DetailRecord> {
    let json = fetch_json(url).await.map_err(js_error)?;
    let resp: PokemonResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Fetch(e.to_string()))?;
    Ok(resp.into())
}

/// タイプ一覧取得
pub async fn fetch_types(base_url: &str) -> Result<Vec<TypeSummary>> {
    let json = fetch_json(&type_list_url(base_url)).await.map_err(js_error)?;
    let listing: ListingResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Fetch(e.to_string()))?;
    Ok(listing.into_types())
}
