//! カタログ読み込みと詳細解決
//!
//! 失敗はすべてここでログに出して握りつぶす:
//! - 一覧の失敗 → 空のWorking Set
//! - 詳細の失敗 → CardState::Failed（何も描画しない）

use crate::client::PokeApiClient;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use pokedex_common::{
    settle, CardState, CardTicket, CardTracker, LoadStatus, SummaryRecord, TypeSummary,
    LISTING_LIMIT, LISTING_OFFSET,
};
use tracing::{debug, error};

/// 一覧を読み込む（第一世代151匹固定）。リトライしない
pub async fn load_catalog(client: &PokeApiClient) -> (Vec<SummaryRecord>, LoadStatus) {
    let result = client.fetch_listing(LISTING_LIMIT, LISTING_OFFSET).await;
    let (records, status) = settle(result, |e| error!(error = %e, "一覧の読み込みに失敗"));
    debug!(count = records.len(), status = status.as_str(), "catalog loaded");
    (records, status)
}

/// タイプ一覧を読み込む
pub async fn load_types(client: &PokeApiClient) -> (Vec<TypeSummary>, LoadStatus) {
    let result = client.fetch_types().await;
    settle(result, |e| error!(error = %e, "タイプ一覧の読み込みに失敗"))
}

/// 詳細を1件解決する
pub async fn resolve_detail(client: &PokeApiClient, record: &SummaryRecord) -> CardState {
    let result = client.fetch_detail(&record.url).await;
    if let Err(e) = &result {
        error!(name = %record.name, error = %e, "詳細の読み込みに失敗");
    }
    CardState::from_result(result)
}

/// 表示中のカード1枚
#[derive(Debug, Clone)]
pub struct MountedCard {
    pub ticket: CardTicket,
    pub record: SummaryRecord,
    pub state: CardState,
}

/// ページ分のカードをマウント（すべて Pending）
pub fn mount_page(tracker: &mut CardTracker, records: Vec<SummaryRecord>) -> Vec<MountedCard> {
    records
        .into_iter()
        .map(|record| MountedCard {
            ticket: tracker.mount(),
            record,
            state: CardState::Pending,
        })
        .collect()
}

/// ページ分のカードをアンマウント
pub fn unmount_page(tracker: &mut CardTracker, cards: &[MountedCard]) {
    for card in cards {
        tracker.unmount(card.ticket);
    }
}

/// 解決結果を反映。古いチケットの結果は捨てて false を返す
pub fn apply_result(
    tracker: &CardTracker,
    cards: &mut [MountedCard],
    ticket: CardTicket,
    state: CardState,
) -> bool {
    if !tracker.is_current(ticket) {
        debug!(slot = ticket.slot(), "stale card result dropped");
        return false;
    }
    match cards.iter_mut().find(|card| card.ticket == ticket) {
        Some(card) => {
            card.state = state;
            true
        }
        None => false,
    }
}

/// ページ内のカードを並行に解決する（重複排除なし）
pub async fn resolve_page(
    client: &PokeApiClient,
    tracker: &CardTracker,
    cards: &mut [MountedCard],
    show_progress: bool,
) {
    let pending: Vec<(CardTicket, SummaryRecord)> = cards
        .iter()
        .filter(|card| card.state.is_pending())
        .map(|card| (card.ticket, card.record.clone()))
        .collect();

    let progress = if show_progress {
        let pb = ProgressBar::new(pending.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {spinner} 詳細を取得中 [{bar:30}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        Some(pb)
    } else {
        None
    };

    let tasks = pending.into_iter().map(|(ticket, record)| {
        let progress = progress.clone();
        async move {
            let state = resolve_detail(client, &record).await;
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            (ticket, state)
        }
    });

    for (ticket, state) in join_all(tasks).await {
        apply_result(tracker, cards, ticket, state);
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
}
