use clap::{Parser, Subcommand};
use pokedex_common::Theme;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "PokéAPI図鑑ビューア（第一世代151匹）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 表示テーマ (classic/midnight)。省略時は設定ファイルの値
    #[arg(long, global = true)]
    pub theme: Option<Theme>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 一覧を表示（検索・ページ指定）
    List {
        /// 名前の部分一致（大文字小文字を区別しない）
        #[arg(short, long, default_value = "")]
        query: String,

        /// ページ番号（1始まり、範囲外は端に丸める）
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// 1匹の詳細を表示
    Show {
        /// ポケモン名
        #[arg(required = true)]
        name: String,
    },

    /// 対話モードで閲覧
    Browse,

    /// タイプ一覧を表示
    Types,

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// APIベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 既定のテーマを設定
        #[arg(long)]
        set_theme: Option<Theme>,

        /// 設定を初期値に戻す
        #[arg(long)]
        reset: bool,
    },
}
