//! 表示テーマ
//!
//! 見た目だけが異なる2種類の図鑑画面を1つのテーマ値で切り替える。

use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// 明るいグラデーション
    #[default]
    Classic,
    /// ダーク
    Midnight,
}

/// タイプ名 → 色（Classic）
const CLASSIC_TYPE_COLORS: &[(&str, &str)] = &[
    ("normal", "#6b7280"),
    ("fire", "#ef4444"),
    ("water", "#3b82f6"),
    ("electric", "#eab308"),
    ("grass", "#22c55e"),
    ("ice", "#93c5fd"),
    ("fighting", "#b91c1c"),
    ("poison", "#a855f7"),
    ("ground", "#a16207"),
    ("flying", "#818cf8"),
    ("psychic", "#ec4899"),
    ("bug", "#4ade80"),
    ("rock", "#854d0e"),
    ("ghost", "#7e22ce"),
    ("dragon", "#4338ca"),
    ("dark", "#1f2937"),
    ("steel", "#4b5563"),
    ("fairy", "#f9a8d4"),
];

/// タイプ名 → 色（Midnight）
const MIDNIGHT_TYPE_COLORS: &[(&str, &str)] = &[
    ("normal", "#a8a77a"),
    ("fire", "#ee8130"),
    ("water", "#6390f0"),
    ("electric", "#f7d02c"),
    ("grass", "#7ac74c"),
    ("ice", "#96d9d6"),
    ("fighting", "#c22e28"),
    ("poison", "#a33ea1"),
    ("ground", "#e2bf65"),
    ("flying", "#a98ff3"),
    ("psychic", "#f95587"),
    ("bug", "#a6b91a"),
    ("rock", "#b6a136"),
    ("ghost", "#735797"),
    ("dragon", "#6f35fc"),
    ("dark", "#705746"),
    ("steel", "#b7b7ce"),
    ("fairy", "#d685ad"),
];

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Midnight => "midnight",
        }
    }

    /// ルート要素に付けるCSSクラス
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Classic => "theme-classic",
            Theme::Midnight => "theme-midnight",
        }
    }

    fn palette(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Theme::Classic => CLASSIC_TYPE_COLORS,
            Theme::Midnight => MIDNIGHT_TYPE_COLORS,
        }
    }

    /// タイプバッジの色。未知のタイプは normal の色
    pub fn type_color(&self, type_name: &str) -> &'static str {
        let palette = self.palette();
        palette
            .iter()
            .find(|(name, _)| *name == type_name)
            .or_else(|| palette.first())
            .map(|(_, color)| *color)
            .unwrap_or("#6b7280")
    }
}

impl std::str::FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "light" => Ok(Theme::Classic),
            "midnight" | "dark" => Ok(Theme::Midnight),
            _ => Err(Error::Config(format!(
                "Unknown theme: {}. Use classic or midnight",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme() {
        assert_eq!("classic".parse::<Theme>().unwrap(), Theme::Classic);
        assert_eq!("Midnight".parse::<Theme>().unwrap(), Theme::Midnight);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Midnight);
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for theme in [Theme::Classic, Theme::Midnight] {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn test_type_color_known() {
        assert_eq!(Theme::Classic.type_color("fire"), "#ef4444");
        assert_eq!(Theme::Midnight.type_color("fire"), "#ee8130");
    }

    #[test]
    fn test_type_color_unknown_falls_back_to_normal() {
        assert_eq!(Theme::Classic.type_color("stellar"), Theme::Classic.type_color("normal"));
        assert_eq!(Theme::Midnight.type_color(""), "#a8a77a");
    }

    #[test]
    fn test_palettes_cover_same_types() {
        let classic: Vec<&str> = CLASSIC_TYPE_COLORS.iter().map(|(n, _)| *n).collect();
        let midnight: Vec<&str> = MIDNIGHT_TYPE_COLORS.iter().map(|(n, _)| *n).collect();
        assert_eq!(classic.len(), 18);
        assert_eq!(classic, midnight);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Theme::Midnight).unwrap();
        assert_eq!(json, "\"midnight\"");
        let theme: Theme = serde_json::from_str("\"classic\"").unwrap();
        assert_eq!(theme, Theme::Classic);
    }
}
