use anyhow::Context;
use clap::Parser;
use pokedex_common::{CardState, CardTracker, CatalogBrowser, Selection};
use pokedex_rust::{browse, cli, client, config, error, loader, render};
use cli::{Cli, Commands};
use client::PokeApiClient;
use config::Config;
use render::Renderer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("設定の読み込みに失敗しました")?;
    let theme = cli.theme.unwrap_or(config.theme);
    let renderer = Renderer::for_stdout(theme);

    match cli.command {
        Commands::List { query, page } => {
            println!("📚 pokedex - 一覧\n");

            let client = PokeApiClient::new(config.api_base_url())?;
            println!("⏳ 図鑑を読み込み中...");
            let (working_set, _status) = loader::load_catalog(&client).await;
            println!("✔ {}匹を読み込みました\n", working_set.len());

            let mut browser = CatalogBrowser::new(working_set);
            browser.set_query(query);
            for _ in 1..page {
                browser.next_page();
            }

            let view = browser.view();
            let mut tracker = CardTracker::new();
            let mut cards = loader::mount_page(&mut tracker, view.cards().to_vec());
            loader::resolve_page(&client, &tracker, &mut cards, true).await;

            print!(
                "{}",
                renderer.page(&view, &cards, browser.query(), browser.filtered_count())
            );
            loader::unmount_page(&mut tracker, &cards);
        }

        Commands::Show { name } => {
            let client = PokeApiClient::new(config.api_base_url())?;
            let (working_set, _status) = loader::load_catalog(&client).await;

            let record = working_set
                .iter()
                .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| error::PokedexError::NotFound(name.clone()))?;

            let mut selection = Selection::new();
            if let CardState::Resolved(detail) = loader::resolve_detail(&client, record).await {
                selection.select(detail);
            }
            if let Some(detail) = selection.current() {
                print!("{}", renderer.detail(detail));
            }
        }

        Commands::Browse => {
            println!("🔎 pokedex - 対話モード\n");

            let client = PokeApiClient::new(config.api_base_url())?;
            println!("⏳ 図鑑を読み込み中...");
            let (working_set, _status) = loader::load_catalog(&client).await;
            println!("✔ {}匹を読み込みました", working_set.len());

            browse::BrowseSession::new(client, working_set, renderer)
                .run()
                .await?;
        }

        Commands::Types => {
            let client = PokeApiClient::new(config.api_base_url())?;
            let (types, _status) = loader::load_types(&client).await;
            println!("タイプ ({}種):", types.len());
            println!("  {}", renderer.type_legend(&types));
        }

        Commands::Config { show, set_base_url, set_theme, reset } => {
            let mut config = if reset { Config::default() } else { config };
            let changed = reset || set_base_url.is_some() || set_theme.is_some();

            if let Some(url) = set_base_url {
                config.set_api_base_url(url)?;
            }
            if let Some(theme) = set_theme {
                config.theme = theme;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  APIベースURL: {}", config.api_base_url());
                println!("  テーマ: {}", config.theme);
            }
        }
    }

    Ok(())
}
