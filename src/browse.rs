//! 対話モード
//!
//! 検索・ページ送り・詳細表示をターミナルで行う。
//! 詳細の取得はカードごとに tokio タスクで走らせ、
//! プロンプト待ちの間も結果を受け取る。ページを移動すると
//! 旧ページのカードはアンマウントされ、遅れて届いた結果は捨てられる。

use crate::client::PokeApiClient;
use crate::error::Result;
use crate::loader::{apply_result, mount_page, resolve_detail, unmount_page, MountedCard};
use crate::render::Renderer;
use dialoguer::{Input, Select};
use pokedex_common::{CardState, CardTicket, CardTracker, CatalogBrowser, Selection, SummaryRecord};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// 描画前に詳細の到着を待つ最大時間
const RENDER_WAIT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    Open,
    Previous,
    Next,
    Refresh,
    Quit,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Search => "🔍 検索",
            Action::Open => "📖 詳細を見る",
            Action::Previous => "← 前へ",
            Action::Next => "次へ →",
            Action::Refresh => "↻ 再描画",
            Action::Quit => "終了",
        }
    }
}

/// 現在の状態で選べる操作
pub fn available_actions(browser: &CatalogBrowser, cards: &[MountedCard]) -> Vec<Action> {
    let mut actions = vec![Action::Search];
    if cards.iter().any(|card| card.state.detail().is_some()) {
        actions.push(Action::Open);
    }
    if browser.shows_pagination() && browser.has_previous() {
        actions.push(Action::Previous);
    }
    if browser.shows_pagination() && browser.has_next() {
        actions.push(Action::Next);
    }
    if cards.iter().any(|card| card.state.is_pending()) {
        actions.push(Action::Refresh);
    }
    actions.push(Action::Quit);
    actions
}

pub struct BrowseSession {
    client: PokeApiClient,
    browser: CatalogBrowser,
    selection: Selection,
    tracker: CardTracker,
    cards: Vec<MountedCard>,
    renderer: Renderer,
    tx: mpsc::UnboundedSender<(CardTicket, CardState)>,
    rx: mpsc::UnboundedReceiver<(CardTicket, CardState)>,
}

impl BrowseSession {
    pub fn new(client: PokeApiClient, working_set: Vec<SummaryRecord>, renderer: Renderer) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            browser: CatalogBrowser::new(working_set),
            selection: Selection::new(),
            tracker: CardTracker::new(),
            cards: Vec::new(),
            renderer,
            tx,
            rx,
        }
    }

    /// 表示ページを差し替え、新しいカードの取得を開始
    fn remount(&mut self) {
        unmount_page(&mut self.tracker, &self.cards);
        self.cards = mount_page(&mut self.tracker, self.browser.visible());

        for card in &self.cards {
            let client = self.client.clone();
            let tx = self.tx.clone();
            let ticket = card.ticket;
            let record = card.record.clone();
            tokio::spawn(async move {
                let state = resolve_detail(&client, &record).await;
                // セッション終了後の送信失敗は無視
                let _ = tx.send((ticket, state));
            });
        }
        debug!(
            cards = self.tracker.mounted_count(),
            page = self.browser.page_index(),
            "page mounted"
        );
    }

    /// 届いた結果を反映（全カード解決か期限まで待つ）
    async fn drain(&mut self, wait: Duration) {
        let deadline = tokio::time::Instant::now() + wait;
        while self.cards.iter().any(|card| card.state.is_pending()) {
            match tokio::time::timeout_at(deadline, self.rx.recv()).await {
                Ok(Some((ticket, state))) => {
                    apply_result(&self.tracker, &mut self.cards, ticket, state);
                }
                Ok(None) | Err(_) => break,
            }
        }
        while let Ok((ticket, state)) = self.rx.try_recv() {
            apply_result(&self.tracker, &mut self.cards, ticket, state);
        }
    }

    pub async fn run(mut self) -> Result<()> {
        self.remount();

        loop {
            if let Some(detail) = self.selection.current() {
                println!("{}", self.renderer.detail(detail));
                prompt_select("詳細", vec!["× 閉じる".to_string()]).await?;
                self.selection.dismiss();
                continue;
            }

            self.drain(RENDER_WAIT).await;
            println!(
                "\n{}",
                self.renderer.page(
                    &self.browser.view(),
                    &self.cards,
                    self.browser.query(),
                    self.browser.filtered_count(),
                )
            );

            let actions = available_actions(&self.browser, &self.cards);
            let labels = actions.iter().map(|a| a.label().to_string()).collect();
            let action = match prompt_select("操作を選んでください", labels).await? {
                Some(index) => actions[index],
                None => Action::Quit,
            };

            match action {
                Action::Search => {
                    let query = prompt_query(self.browser.query().to_string()).await?;
                    self.browser.set_query(query);
                    self.remount();
                }
                Action::Open => {
                    let resolved: Vec<_> = self
                        .cards
                        .iter()
                        .filter_map(|card| card.state.detail())
                        .cloned()
                        .collect();
                    let labels = resolved.iter().map(|d| self.renderer.card_line(d)).collect();
                    if let Some(index) = prompt_select("ポケモンを選んでください", labels).await? {
                        self.selection.select(resolved[index].clone());
                    }
                }
                Action::Previous => {
                    self.browser.previous_page();
                    self.remount();
                }
                Action::Next => {
                    self.browser.next_page();
                    self.remount();
                }
                Action::Refresh => {}
                Action::Quit => break,
            }
        }

        unmount_page(&mut self.tracker, &self.cards);
        Ok(())
    }
}

/// dialoguer はブロッキングなので別スレッドで待つ
async fn prompt_select(prompt: &'static str, items: Vec<String>) -> Result<Option<usize>> {
    let choice = tokio::task::spawn_blocking(move || {
        Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact_opt()
    })
    .await??;
    Ok(choice)
}

async fn prompt_query(current: String) -> Result<String> {
    let query = tokio::task::spawn_blocking(move || {
        Input::<String>::new()
            .with_prompt("名前で検索（空で全件）")
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()
    })
    .await??;
    Ok(query.trim().to_string())
}
