//! ターミナル描画
//!
//! カード・ページ・詳細モーダルを文字列にする。
//! 色付けはテーマのタイプ色（24bit ANSI）を使う。

use crate::loader::MountedCard;
use pokedex_common::format::{
    ability_label, capitalize, display_id, format_height, format_weight, result_count_label,
    stat_bar_percent, stat_label, StatTier, HIDDEN_ABILITY_MARK,
};
use pokedex_common::{CardState, DetailRecord, PageView, Theme, TypeSummary};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub theme: Theme,
    pub color: bool,
}

impl Renderer {
    pub fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }

    /// 標準出力が端末なら色付き
    pub fn for_stdout(theme: Theme) -> Self {
        use std::io::IsTerminal;
        Self::new(theme, std::io::stdout().is_terminal())
    }

    fn paint(&self, text: &str, hex: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match parse_hex(hex) {
            Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
            None => text.to_string(),
        }
    }

    fn tier_color(&self, tier: StatTier) -> &'static str {
        match tier {
            StatTier::High => "#22c55e",
            StatTier::Mid => "#eab308",
            StatTier::Low => "#ef4444",
        }
    }

    pub fn type_badge(&self, type_name: &str) -> String {
        self.paint(&format!("[{}]", type_name), self.theme.type_color(type_name))
    }

    fn type_badges(&self, types: &[String]) -> String {
        types
            .iter()
            .map(|t| self.type_badge(t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 解決済みカード1行
    pub fn card_line(&self, detail: &DetailRecord) -> String {
        format!(
            "{}  {:<12} {}",
            display_id(detail.id),
            capitalize(&detail.name),
            self.type_badges(&detail.types)
        )
    }

    /// カード1枚。失敗したカードは何も出さない
    pub fn card(&self, number: usize, card: &MountedCard) -> Option<String> {
        match &card.state {
            CardState::Pending => Some(format!("{:>2}. ····  {:<12} 読み込み中…", number, card.record.name)),
            CardState::Resolved(detail) => Some(format!("{:>2}. {}", number, self.card_line(detail))),
            CardState::Failed => None,
        }
    }

    /// ページ全体
    pub fn page(&self, view: &PageView, cards: &[MountedCard], query: &str, filtered_count: usize) -> String {
        let mut out = String::new();

        if let Some(label) = result_count_label(filtered_count, query) {
            let _ = writeln!(out, "{}\n", label);
        }

        match view {
            PageView::NoResults { .. } => {
                let _ = writeln!(out, "🔍 見つかりませんでした");
                let _ = writeln!(out, "別の名前で検索してください");
            }
            PageView::Page { page_index, page_count, show_controls, .. } => {
                for (i, card) in cards.iter().enumerate() {
                    if let Some(line) = self.card(i + 1, card) {
                        let _ = writeln!(out, "{}", line);
                    }
                }
                if *show_controls {
                    let prev = if *page_index == 0 { "       " } else { "← 前へ" };
                    let next = if *page_index + 1 >= *page_count { "" } else { "次へ →" };
                    let _ = writeln!(out, "\n{}   {} / {}   {}", prev, page_index + 1, page_count, next);
                }
            }
        }

        out
    }

    fn stat_bar(&self, value: u32) -> String {
        let filled = (stat_bar_percent(value) / 100.0 * BAR_WIDTH as f64).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled));
        self.paint(&bar, self.tier_color(StatTier::of(value)))
    }

    /// 詳細モーダル
    pub fn detail(&self, detail: &DetailRecord) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        let _ = writeln!(out, "{}  {}", capitalize(&detail.name), display_id(detail.id));
        let _ = writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        if let Some(url) = &detail.image_url {
            let _ = writeln!(out, "画像: {}", url);
        }
        let _ = writeln!(out, "タイプ: {}", self.type_badges(&detail.types));

        let _ = writeln!(out, "\n■ からだ");
        let _ = writeln!(out, "  高さ: {}", format_height(detail.height));
        let _ = writeln!(out, "  重さ: {}", format_weight(detail.weight));

        let _ = writeln!(out, "\n■ 能力値");
        for stat in &detail.stats {
            let _ = writeln!(
                out,
                "  {:<8} {} {:>3}",
                stat_label(&stat.key),
                self.stat_bar(stat.value),
                stat.value
            );
        }

        let _ = writeln!(out, "\n■ 特性");
        for ability in &detail.abilities {
            let mark = if ability.is_hidden { HIDDEN_ABILITY_MARK } else { "" };
            let _ = writeln!(out, "  - {}{}", ability_label(&ability.name), mark);
        }

        out
    }

    /// タイプ凡例
    pub fn type_legend(&self, types: &[TypeSummary]) -> String {
        types
            .iter()
            .map(|t| self.type_badge(&t.name))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_common::{AbilityEntry, CardTracker, StatEntry, SummaryRecord};

    fn charizard() -> DetailRecord {
        DetailRecord {
            id: 6,
            name: "charizard".to_string(),
            image_url: Some("https://img.example/artwork/6.png".to_string()),
            types: vec!["fire".to_string(), "flying".to_string()],
            height: 17,
            weight: 905,
            stats: vec![
                StatEntry { key: "hp".to_string(), value: 78 },
                StatEntry { key: "special-attack".to_string(), value: 109 },
                StatEntry { key: "defense".to_string(), value: 45 },
            ],
            abilities: vec![
                AbilityEntry { name: "blaze".to_string(), is_hidden: false },
                AbilityEntry { name: "solar-power".to_string(), is_hidden: true },
            ],
        }
    }

    fn plain() -> Renderer {
        Renderer::new(Theme::Classic, false)
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ef4444"), Some((0xef, 0x44, 0x44)));
        assert_eq!(parse_hex("ef4444"), None);
        assert_eq!(parse_hex("#fff"), None);
    }

    #[test]
    fn test_card_line_plain() {
        let line = plain().card_line(&charizard());
        assert!(line.starts_with("#006  Charizard"));
        assert!(line.contains("[fire] [flying]"));
    }

    #[test]
    fn test_type_badge_colored() {
        let badge = Renderer::new(Theme::Classic, true).type_badge("fire");
        assert_eq!(badge, "\x1b[38;2;239;68;68m[fire]\x1b[0m");
    }

    #[test]
    fn test_detail_sections() {
        let text = plain().detail(&charizard());

        assert!(text.contains("Charizard  #006"));
        assert!(text.contains("高さ: 1.7 m"));
        assert!(text.contains("重さ: 90.5 kg"));
        assert!(text.contains("とくこう"));
        assert!(text.contains("- blaze\n"));
        assert!(text.contains("- solar power（隠れ特性）"));
    }

    #[test]
    fn test_detail_keeps_stat_order() {
        let text = plain().detail(&charizard());
        let hp = text.find("HP").unwrap();
        let spa = text.find("とくこう").unwrap();
        let def = text.find("ぼうぎょ").unwrap();
        assert!(hp < spa && spa < def);
    }

    #[test]
    fn test_failed_card_renders_nothing() {
        let mut tracker = CardTracker::new();
        let card = MountedCard {
            ticket: tracker.mount(),
            record: SummaryRecord::new("missingno", "https://example.com/0"),
            state: CardState::Failed,
        };
        assert_eq!(plain().card(1, &card), None);
    }

    #[test]
    fn test_pending_card_is_placeholder() {
        let mut tracker = CardTracker::new();
        let card = MountedCard {
            ticket: tracker.mount(),
            record: SummaryRecord::new("mew", "https://example.com/151"),
            state: CardState::Pending,
        };
        let line = plain().card(3, &card).unwrap();
        assert!(line.contains("mew"));
        assert!(line.contains("読み込み中"));
    }

    #[test]
    fn test_page_no_results() {
        let view = PageView::NoResults { query: "agumon".to_string() };
        let text = plain().page(&view, &[], "agumon", 0);
        assert!(text.contains("0匹見つかりました（「agumon」）"));
        assert!(text.contains("見つかりませんでした"));
        assert!(!text.contains(" / "));
    }

    #[test]
    fn test_page_controls_only_when_multiple_pages() {
        let single = PageView::Page { cards: vec![], page_index: 0, page_count: 1, show_controls: false };
        assert!(!plain().page(&single, &[], "", 3).contains("1 / 1"));

        let multi = PageView::Page { cards: vec![], page_index: 1, page_count: 8, show_controls: true };
        let text = plain().page(&multi, &[], "", 151);
        assert!(text.contains("← 前へ   2 / 8   次へ →"));
        assert!(!text.contains("見つかりました"));
    }
}
