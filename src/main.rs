use clap::Parser;
use forum_locations::{cli, collector, config, error, export, forum};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "debug,hyper=info,reqwest=info,html5ever=info"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// 一覧取得 → スレッドごとの抽出
async fn crawl(config: &Config, verbose: bool, sort_by_id: bool) -> Result<Vec<forum_locations::SiteRecord>> {
    let client = forum::ForumClient::new(config)?;

    eprintln!("[1/2] スレッド一覧を取得中... ({})", client.base_url());
    let mut topics = client.fetch_topics().await?;
    eprintln!("✔ {}件のスレッドを検出\n", topics.len());

    if sort_by_id {
        collector::sort_topics_by_id(&mut topics);
    }

    eprintln!("[2/2] スレッドを解析中...");
    let records = collector::collect_records(&client, &topics, !verbose).await?;
    let located = records.iter().filter(|r| r.has_coordinates()).count();
    eprintln!("✔ {}件を解析（座標あり: {}件）\n", records.len(), located);

    Ok(records)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?.with_overrides(cli.base_url, cli.category);

    match cli.command {
        Commands::Csv { output, header } => {
            eprintln!("📍 forum-locations - CSV出力\n");
            let records = crawl(&config, cli.verbose, false).await?;
            export::export_to(&records, &OutputFormat::Csv, output.as_deref(), header)?;
            eprintln!("✅ 完了");
        }

        Commands::Geojson { output } => {
            eprintln!("🗺  forum-locations - GeoJSON出力\n");
            let records = crawl(&config, cli.verbose, true).await?;
            export::export_to(&records, &OutputFormat::Geojson, output.as_deref(), false)?;
            eprintln!("✅ 完了");
        }

        Commands::Extract { input, title, url, format, output } => {
            if !input.exists() {
                return Err(error::ForumLocationsError::FileNotFound(input.display().to_string()));
            }
            let markup = std::fs::read_to_string(&input)?;
            let record = collector::build_record(&title, &url, &[markup]);
            export::export_to(&[record], &format, output.as_deref(), false)?;
        }

        Commands::Config { set_base_url, set_category, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ フォーラムのURLを設定しました");
            }

            if let Some(category) = set_category {
                config.set_category(category)?;
                println!("✔ カテゴリを設定しました");
            }

            if show {
                println!("設定:");
                println!("  URL: {}", config.base_url);
                println!("  カテゴリ: {}", config.category);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  User-Agent: {}", config.user_agent);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
