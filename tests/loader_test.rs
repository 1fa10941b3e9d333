//! 読み込み・詳細解決テスト
//!
//! ローカルのTCPサーバーをAPI代わりに立てて、
//! 成功・失敗時の挙動（空のWorking Set、空白カード）を検証

use pokedex_common::{CardState, CardTracker, LoadStatus};
use pokedex_rust::client::PokeApiClient;
use pokedex_rust::config::Config;
use pokedex_rust::loader::{load_catalog, load_types, mount_page, resolve_page};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tempfile::tempdir;
use tokio::net::TcpListener;

type Routes = Vec<(String, u16, String)>;

async fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");
    (listener, format!("http://{}/api/v2", addr))
}

/// パス（クエリ込み）完全一致で固定レスポンスを返す
fn serve(listener: TcpListener, routes: Routes) {
    let routes = Arc::new(routes);
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = routes
                    .iter()
                    .find(|(p, _, _)| *p == path)
                    .map(|(_, s, b)| (*s, b.clone()))
                    .unwrap_or((404, r#"{"detail":"Not found."}"#.to_string()));

                let response = format!(
                    "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
}

fn listing_body(base: &str, names: &[&str]) -> String {
    let results: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!(r#"{{"name":"{}","url":"{}/pokemon/{}/"}}"#, name, base, i + 1))
        .collect();
    format!(r#"{{"count":{},"results":[{}]}}"#, names.len(), results.join(","))
}

fn detail_body(id: u32, name: &str, type_name: &str) -> String {
    format!(
        r#"{{"id":{id},"name":"{name}","height":7,"weight":69,
            "sprites":{{"front_default":"https://img.example/{id}.png","other":{{"official-artwork":{{"front_default":null}}}}}},
            "types":[{{"slot":1,"type":{{"name":"{type_name}","url":""}}}}],
            "stats":[{{"base_stat":45,"stat":{{"name":"hp","url":""}}}}],
            "abilities":[{{"ability":{{"name":"overgrow","url":""}},"is_hidden":false}}]}}"#
    )
}

/// 一覧の読み込み成功（API順を保持）
#[tokio::test]
async fn test_load_catalog_success() {
    let (listener, base) = bind().await;
    let names = ["charmander", "bulbasaur", "squirtle"];
    serve(
        listener,
        vec![(
            "/api/v2/pokemon?limit=151&offset=0".to_string(),
            200,
            listing_body(&base, &names),
        )],
    );

    let client = PokeApiClient::new(base.clone()).unwrap();
    let (records, status) = load_catalog(&client).await;

    assert_eq!(status, LoadStatus::Succeeded);
    let loaded: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(loaded, names);
    assert_eq!(records[1].url, format!("{}/pokemon/2/", base));
}

/// 設定ファイルに取得範囲が書かれていても 151件・offset 0 で取得する
#[tokio::test]
async fn test_load_catalog_ignores_window_in_config_file() {
    let (listener, base) = bind().await;
    serve(
        listener,
        vec![(
            "/api/v2/pokemon?limit=151&offset=0".to_string(),
            200,
            listing_body(&base, &["bulbasaur", "ivysaur"]),
        )],
    );

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        format!(
            r#"{{"api_base_url": "{}", "listing_limit": 5, "listing_offset": 40}}"#,
            base
        ),
    )
    .unwrap();
    let config = Config::load_from(&path).expect("読み込み失敗");

    let client = PokeApiClient::new(config.api_base_url.clone()).unwrap();
    let (records, status) = load_catalog(&client).await;

    assert_eq!(status, LoadStatus::Succeeded);
    assert_eq!(records.len(), 2);
}

/// HTTPエラーは空のWorking Setになる
#[tokio::test]
async fn test_load_catalog_http_error_yields_empty() {
    let (listener, base) = bind().await;
    serve(
        listener,
        vec![(
            "/api/v2/pokemon?limit=151&offset=0".to_string(),
            500,
            "Internal Server Error".to_string(),
        )],
    );

    let client = PokeApiClient::new(base.clone()).unwrap();
    let (records, status) = load_catalog(&client).await;

    assert!(records.is_empty());
    assert_eq!(status, LoadStatus::Failed);
}

/// 不正なJSONは空のWorking Setになる
#[tokio::test]
async fn test_load_catalog_malformed_json_yields_empty() {
    let (listener, base) = bind().await;
    serve(
        listener,
        vec![(
            "/api/v2/pokemon?limit=151&offset=0".to_string(),
            200,
            r#"{"results": "oops"}"#.to_string(),
        )],
    );

    let client = PokeApiClient::new(base.clone()).unwrap();
    let (records, status) = load_catalog(&client).await;

    assert!(records.is_empty());
    assert_eq!(status, LoadStatus::Failed);
}

/// 接続できない場合も空のWorking Set
#[tokio::test]
async fn test_load_catalog_connection_refused_yields_empty() {
    let (listener, base) = bind().await;
    drop(listener);

    let client = PokeApiClient::new(base.clone()).unwrap();
    let (records, status) = load_catalog(&client).await;

    assert!(records.is_empty());
    assert_eq!(status, LoadStatus::Failed);
}

/// 詳細の失敗はそのカードだけが Failed になる
#[tokio::test]
async fn test_resolve_page_isolates_failures() {
    let (listener, base) = bind().await;
    let names = ["bulbasaur", "ivysaur", "venusaur"];
    serve(
        listener,
        vec![
            (
                "/api/v2/pokemon?limit=151&offset=0".to_string(),
                200,
                listing_body(&base, &names),
            ),
            ("/api/v2/pokemon/1/".to_string(), 200, detail_body(1, "bulbasaur", "grass")),
            ("/api/v2/pokemon/3/".to_string(), 200, detail_body(3, "venusaur", "grass")),
        ],
    );

    let client = PokeApiClient::new(base.clone()).unwrap();
    let (records, _) = load_catalog(&client).await;

    let mut tracker = CardTracker::new();
    let mut cards = mount_page(&mut tracker, records);
    resolve_page(&client, &tracker, &mut cards, false).await;

    assert_eq!(cards[0].state.detail().map(|d| d.id), Some(1));
    assert_eq!(cards[1].state, CardState::Failed);
    assert_eq!(cards[2].state.detail().map(|d| d.name.as_str()), Some("venusaur"));

    // 公式アートワークがnullなら通常スプライト
    let image = cards[0].state.detail().and_then(|d| d.image_url.clone());
    assert_eq!(image.as_deref(), Some("https://img.example/1.png"));
}

/// 同じURLのカードは重複排除せずそれぞれ取得する
#[tokio::test]
async fn test_resolve_page_does_not_deduplicate() {
    let (listener, base) = bind().await;
    let detail_url = format!("{}/pokemon/132/", base);
    serve(
        listener,
        vec![("/api/v2/pokemon/132/".to_string(), 200, detail_body(132, "ditto", "normal"))],
    );

    let client = PokeApiClient::new(base.clone()).unwrap();
    let records = vec![
        pokedex_common::SummaryRecord::new("ditto", detail_url.clone()),
        pokedex_common::SummaryRecord::new("ditto", detail_url),
    ];

    let mut tracker = CardTracker::new();
    let mut cards = mount_page(&mut tracker, records);
    resolve_page(&client, &tracker, &mut cards, false).await;

    assert!(cards.iter().all(|c| c.state.detail().map(|d| d.id) == Some(132)));
    assert_ne!(cards[0].ticket, cards[1].ticket);
}

/// タイプ一覧は unknown / shadow を除外
#[tokio::test]
async fn test_load_types_filters_pseudo_types() {
    let (listener, base) = bind().await;
    serve(
        listener,
        vec![(
            "/api/v2/type/".to_string(),
            200,
            r#"{"results":[{"name":"fire","url":""},{"name":"unknown","url":""},{"name":"water","url":""},{"name":"shadow","url":""}]}"#
                .to_string(),
        )],
    );

    let client = PokeApiClient::new(base.clone()).unwrap();
    let (types, status) = load_types(&client).await;

    assert_eq!(status, LoadStatus::Succeeded);
    let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["fire", "water"]);
}
