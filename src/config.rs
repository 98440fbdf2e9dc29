use crate::error::{ForumLocationsError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://forum.tierslieuxedu.org";
pub const DEFAULT_CATEGORY: &str = "lieux";

const ENV_BASE_URL: &str = "FORUM_LOCATIONS_BASE_URL";
const ENV_CATEGORY: &str = "FORUM_LOCATIONS_CATEGORY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// フォーラムのURL（末尾の `/` なし）
    pub base_url: String,
    /// 拠点スレッドのカテゴリ（`/c/{category}.json`）
    pub category: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書きする
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default_config()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ForumLocationsError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("forum-locations").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            category: DEFAULT_CATEGORY.into(),
            timeout_seconds: 30,
            user_agent: format!("forum-locations/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    fn apply_env_overrides(&mut self) {
        // 環境変数を優先
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(category) = std::env::var(ENV_CATEGORY) {
            if !category.trim().is_empty() {
                self.category = category;
            }
        }
    }

    /// CLI引数による上書き
    pub fn with_overrides(mut self, base_url: Option<String>, category: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(category) = category {
            self.category = category;
        }
        self
    }

    /// 末尾の `/` を除いたベースURL
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// 設定値を検証する
    pub fn validate(&self) -> Result<()> {
        let base = self.normalized_base_url();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ForumLocationsError::Config(format!(
                "base_url は http(s):// で始まる必要があります: {}",
                self.base_url
            )));
        }
        if self.category.trim().is_empty() {
            return Err(ForumLocationsError::Config("category が空です".into()));
        }
        Ok(())
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        self.base_url = url;
        self.validate()?;
        self.save()
    }

    pub fn set_category(&mut self, category: String) -> Result<()> {
        self.category = category;
        self.validate()?;
        self.save()
    }
}
