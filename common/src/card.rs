//! カードごとの詳細取得ライフサイクル
//!
//! 各カードは Pending → Resolved / Failed と遷移する。
//! CardTracker はスロット + 世代番号でマウント中のカードを管理し、
//! アンマウント後に届いた結果を捨てるために使う。

use crate::types::DetailRecord;

/// カードの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CardState {
    /// 取得中（プレースホルダー表示）
    #[default]
    Pending,
    Resolved(DetailRecord),
    /// 取得失敗（何も描画しない）
    Failed,
}

impl CardState {
    pub fn from_result<E>(result: Result<DetailRecord, E>) -> Self {
        match result {
            Ok(detail) => CardState::Resolved(detail),
            Err(_) => CardState::Failed,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CardState::Pending)
    }

    pub fn detail(&self) -> Option<&DetailRecord> {
        match self {
            CardState::Resolved(detail) => Some(detail),
            _ => None,
        }
    }
}

/// マウント中のカード1枚を指す (スロット, 世代)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardTicket {
    slot: usize,
    generation: u64,
}

impl CardTicket {
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u64,
    mounted: bool,
}

/// マウント中カードの台帳
#[derive(Debug, Clone, Default)]
pub struct CardTracker {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl CardTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// カードのマウント。空きスロットは再利用する
    pub fn mount(&mut self) -> CardTicket {
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(Slot::default());
                self.slots.len() - 1
            }
        };

        let entry = &mut self.slots[slot];
        entry.mounted = true;
        CardTicket {
            slot,
            generation: entry.generation,
        }
    }

    /// カードのアンマウント。世代を進めて旧チケットを無効にする
    pub fn unmount(&mut self, ticket: CardTicket) {
        if !self.is_current(ticket) {
            return;
        }
        let entry = &mut self.slots[ticket.slot];
        entry.generation += 1;
        entry.mounted = false;
        self.free.push(ticket.slot);
    }

    /// 結果を反映してよいか
    pub fn is_current(&self, ticket: CardTicket) -> bool {
        self.slots
            .get(ticket.slot)
            .map(|entry| entry.mounted && entry.generation == ticket.generation)
            .unwrap_or(false)
    }

    pub fn mounted_count(&self) -> usize {
        self.slots.iter().filter(|entry| entry.mounted).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: u32, name: &str) -> DetailRecord {
        DetailRecord {
            id,
            name: name.to_string(),
            types: vec!["normal".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_card_state_default_is_pending() {
        assert!(CardState::default().is_pending());
        assert_eq!(CardState::default().detail(), None);
    }

    #[test]
    fn test_card_state_from_result() {
        let resolved = CardState::from_result::<String>(Ok(detail(133, "eevee")));
        assert_eq!(resolved.detail().map(|d| d.id), Some(133));

        let failed = CardState::from_result::<String>(Err("timeout".to_string()));
        assert_eq!(failed, CardState::Failed);
        assert_eq!(failed.detail(), None);
    }

    #[test]
    fn test_mount_gives_distinct_tickets() {
        let mut tracker = CardTracker::new();
        let a = tracker.mount();
        let b = tracker.mount();

        assert_ne!(a, b);
        assert!(tracker.is_current(a));
        assert!(tracker.is_current(b));
        assert_eq!(tracker.mounted_count(), 2);
    }

    #[test]
    fn test_unmounted_ticket_is_stale() {
        let mut tracker = CardTracker::new();
        let ticket = tracker.mount();
        tracker.unmount(ticket);

        assert!(!tracker.is_current(ticket));
        assert_eq!(tracker.mounted_count(), 0);
    }

    #[test]
    fn test_reused_slot_rejects_old_ticket() {
        let mut tracker = CardTracker::new();
        let old = tracker.mount();
        tracker.unmount(old);

        let new = tracker.mount();
        assert_eq!(new.slot(), old.slot());
        assert_ne!(new.generation(), old.generation());
        assert!(tracker.is_current(new));
        assert!(!tracker.is_current(old));
    }

    #[test]
    fn test_double_unmount_is_ignored() {
        let mut tracker = CardTracker::new();
        let old = tracker.mount();
        tracker.unmount(old);
        let new = tracker.mount();

        // 古いチケットでのアンマウントは新しいカードに影響しない
        tracker.unmount(old);
        assert!(tracker.is_current(new));
        assert_eq!(tracker.mounted_count(), 1);
    }

    #[test]
    fn test_unknown_ticket_is_not_current() {
        let mut other = CardTracker::new();
        other.mount();
        other.mount();
        let foreign = other.mount();

        let tracker = CardTracker::new();
        assert!(!tracker.is_current(foreign));
    }
}
