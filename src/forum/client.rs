//! Discourse フォーラムのHTTPクライアント
//!
//! 逐次取得のみ。通信・デコードの失敗はそのままエラーとして返す。

use super::types::{ListingPage, Topic, TopicDetail};
use crate::config::Config;
use crate::error::{ForumLocationsError, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct ForumClient {
    client: reqwest::Client,
    base_url: String,
    category: String,
}

impl ForumClient {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
            category: config.category.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// カテゴリ一覧ページのURL
    pub fn listing_url(&self, page: u32) -> String {
        format!("{}/c/{}.json?page={}", self.base_url, self.category, page)
    }

    /// スレッドの正規URL
    pub fn topic_url(&self, id: u64) -> String {
        topic_url(&self.base_url, id)
    }

    /// 一覧の1ページ分を取得
    pub async fn fetch_page(&self, page: u32) -> Result<Vec<Topic>> {
        tracing::info!(page, "Getting page");
        let listing: ListingPage = self.get_json(&self.listing_url(page)).await?;
        Ok(listing.topic_list.topics)
    }

    /// 空ページが返るまで全ページを取得
    pub async fn fetch_topics(&self) -> Result<Vec<Topic>> {
        let mut topics = Vec::new();
        let mut page = 0;

        loop {
            let batch = self.fetch_page(page).await?;
            if batch.is_empty() {
                tracing::debug!(pages = page, topics = topics.len(), "Listing exhausted");
                return Ok(topics);
            }
            topics.extend(batch);
            page += 1;
        }
    }

    /// スレッドのwiki投稿本文を投稿順に取得
    pub async fn fetch_wiki_posts(&self, topic_id: u64) -> Result<Vec<String>> {
        let url = format!("{}.json", self.topic_url(topic_id));
        tracing::debug!(%url, "Getting topic");

        let detail: TopicDetail = self.get_json(&url).await?;
        let stream = detail
            .post_stream
            .ok_or(ForumLocationsError::MissingPostStream(topic_id))?;

        let bodies: Vec<String> = stream.wiki_bodies().map(str::to_string).collect();
        tracing::debug!(topic_id, posts = stream.posts.len(), wiki = bodies.len(), "Posts");
        Ok(bodies)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForumLocationsError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// `{base_url}/t/{id}`
pub fn topic_url(base_url: &str, id: u64) -> String {
    format!("{}/t/{}", base_url.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ForumClient {
        let config = Config::default().with_overrides(Some("https://forum.example.org/".into()), Some("lieux".into()));
        ForumClient::new(&config).expect("クライアント生成失敗")
    }

    #[test]
    fn test_listing_url() {
        assert_eq!(client().listing_url(3), "https://forum.example.org/c/lieux.json?page=3");
    }

    #[test]
    fn test_topic_url() {
        assert_eq!(client().topic_url(42), "https://forum.example.org/t/42");
        assert_eq!(topic_url("https://forum.example.org", 7), "https://forum.example.org/t/7");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config::default().with_overrides(Some("ftp://forum.example.org".into()), None);
        assert!(matches!(ForumClient::new(&config), Err(ForumLocationsError::Config(_))));
    }
}
