use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForumLocationsError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTPステータスエラー: {status} ({url})")]
    HttpStatus { url: String, status: u16 },

    #[error("スレッド {0} に投稿一覧（post_stream）がありません")]
    MissingPostStream(u64),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ForumLocationsError>;
