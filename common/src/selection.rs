//! 詳細モーダルの選択状態

use crate::types::DetailRecord;

/// 選択中の詳細（最大1件）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<DetailRecord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択。既存の選択は上書きする
    pub fn select(&mut self, detail: DetailRecord) {
        self.current = Some(detail);
    }

    /// 選択解除。未選択なら何もしない
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&DetailRecord> {
        self.current.as_ref()
    }

    /// モーダル表示中か
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
