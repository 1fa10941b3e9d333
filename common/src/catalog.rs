//! 検索・ページング
//!
//! 一覧（Working Set）を名前の部分一致で絞り込み、
//! 固定サイズのページに切り出す。状態は CatalogBrowser が保持する。

use crate::types::SummaryRecord;

/// 1ページあたりの表示件数
pub const PAGE_SIZE: usize = 20;

/// 名前の部分一致。`needle` は小文字化済みであること
fn matches_needle(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

/// Working Setを絞り込む（大文字小文字を区別しない、空クエリは全件）。順序は保持
pub fn filter<'a>(working_set: &'a [SummaryRecord], query: &str) -> Vec<&'a SummaryRecord> {
    let needle = query.to_lowercase();
    working_set
        .iter()
        .filter(|record| matches_needle(&record.name, &needle))
        .collect()
}

/// ページ切り出し
///
/// `[page_index * page_size, page_index * page_size + page_size)` を返す。
/// 最終ページは短くなり、範囲外のページは空になる。
pub fn paginate<T>(filtered: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size).min(filtered.len());
    let end = start.saturating_add(page_size).min(filtered.len());
    &filtered[start..end]
}

/// `ceil(filtered_count / page_size)`
pub fn page_count(filtered_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    filtered_count.div_ceil(page_size)
}

/// 画面に出す内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    /// クエリありで0件
    NoResults { query: String },
    /// カード一覧（Working Setが空なら cards も空）
    Page {
        cards: Vec<SummaryRecord>,
        page_index: usize,
        page_count: usize,
        show_controls: bool,
    },
}

impl PageView {
    /// 描画するカード（NoResults なら空）
    pub fn cards(&self) -> &[SummaryRecord] {
        match self {
            PageView::NoResults { .. } => &[],
            PageView::Page { cards, .. } => cards,
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, PageView::NoResults { .. })
    }
}

/// 検索・ページングの状態
///
/// 不変条件: `0 <= page_index < max(page_count, 1)`
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    working_set: Vec<SummaryRecord>,
    query: String,
    page_index: usize,
    page_size: usize,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CatalogBrowser {
    pub fn new(working_set: Vec<SummaryRecord>) -> Self {
        Self::with_page_size(working_set, PAGE_SIZE)
    }

    pub fn with_page_size(working_set: Vec<SummaryRecord>, page_size: usize) -> Self {
        Self {
            working_set,
            query: String::new(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Working Setを差し替える（前回分とは結合しない）
    pub fn replace_working_set(&mut self, working_set: Vec<SummaryRecord>) {
        self.working_set = working_set;
        self.page_index = 0;
    }

    pub fn working_set(&self) -> &[SummaryRecord] {
        &self.working_set
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// クエリ変更。件数が変わらなくても必ず先頭ページに戻る
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page_index = 0;
    }

    pub fn filtered(&self) -> Vec<&SummaryRecord> {
        filter(&self.working_set, &self.query)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered_count(), self.page_size)
    }

    /// 現在ページのレコード
    pub fn visible(&self) -> Vec<SummaryRecord> {
        let filtered = self.filtered();
        paginate(&filtered, self.page_index, self.page_size)
            .iter()
            .map(|record| (*record).clone())
            .collect()
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// 前ページ（0で止まる）
    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// 次ページ（最終ページで止まる）
    pub fn next_page(&mut self) {
        let last = self.page_count().max(1) - 1;
        self.page_index = (self.page_index + 1).min(last);
    }

    /// ページ送りを表示するか
    pub fn shows_pagination(&self) -> bool {
        self.page_count() > 1
    }

    pub fn view(&self) -> PageView {
        let filtered_count = self.filtered_count();
        if filtered_count == 0 && !self.query.is_empty() {
            return PageView::NoResults {
                query: self.query.clone(),
            };
        }

        let page_count = page_count(filtered_count, self.page_size);
        PageView::Page {
            cards: self.visible(),
            page_index: self.page_index,
            page_count,
            show_controls: page_count > 1,
        }
    }
}
