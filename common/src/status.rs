//! データ取得の状態

/// データソースごとの取得状態（カタログ・タイプ一覧）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    NotStarted,
    Loading,
    Succeeded,
    Failed,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::NotStarted => "not-started",
            LoadStatus::Loading => "loading",
            LoadStatus::Succeeded => "succeeded",
            LoadStatus::Failed => "failed",
        }
    }

    /// 成功・失敗のどちらかで終わっている
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadStatus::Succeeded | LoadStatus::Failed)
    }
}

/// 取得結果を確定させる
///
/// 失敗時は `on_error` を呼んだうえで空の値を返す（リトライしない）。
pub fn settle<T, E>(result: Result<T, E>, on_error: impl FnOnce(&E)) -> (T, LoadStatus)
where
    T: Default,
{
    match result {
        Ok(value) => (value, LoadStatus::Succeeded),
        Err(e) => {
            on_error(&e);
            (T::default(), LoadStatus::Failed)
        }
    }
}
