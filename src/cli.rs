use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forum-locations")]
#[command(about = "フォーラムの拠点スレッドから位置情報を抽出するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// フォーラムのURL（設定ファイルより優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// 拠点スレッドのカテゴリ（設定ファイルより優先）
    #[arg(long, global = true)]
    pub category: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 全スレッドを取得してCSVを出力
    Csv {
        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ヘッダ行を出力
        #[arg(long)]
        header: bool,
    },

    /// 全スレッドを取得してGeoJSONを出力（座標未設定の拠点は除外）
    Geojson {
        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 保存済みの投稿HTMLから抽出（通信なし）
    Extract {
        /// 投稿本文（cooked HTML）ファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 拠点名
        #[arg(short, long, default_value = "")]
        title: String,

        /// スレッドURL
        #[arg(short, long, default_value = "")]
        url: String,

        /// 出力形式 (json/csv/geojson)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// フォーラムのURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// カテゴリを設定
        #[arg(long)]
        set_category: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Geojson,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "geojson" | "geo" => Ok(OutputFormat::Geojson),
            _ => Err(format!("Unknown format: {}. Use json, csv, or geojson", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Geojson => write!(f, "GeoJSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("geojson".parse::<OutputFormat>(), Ok(OutputFormat::Geojson));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_csv_command() {
        let cli = Cli::try_parse_from(["forum-locations", "--category", "makers", "csv", "--header", "-o", "out.csv"])
            .expect("引数解析失敗");
        assert_eq!(cli.category.as_deref(), Some("makers"));
        match cli.command {
            Commands::Csv { output, header } => {
                assert!(header);
                assert_eq!(output, Some(PathBuf::from("out.csv")));
            }
            _ => panic!("csv サブコマンドになっていない"),
        }
    }

    #[test]
    fn test_parse_extract_command_defaults() {
        let cli = Cli::try_parse_from(["forum-locations", "extract", "post.html", "-v"]).expect("引数解析失敗");
        assert!(cli.verbose);
        match cli.command {
            Commands::Extract { input, title, format, .. } => {
                assert_eq!(input, PathBuf::from("post.html"));
                assert_eq!(title, "");
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("extract サブコマンドになっていない"),
        }
    }
}
