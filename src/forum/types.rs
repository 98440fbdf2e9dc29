//! Discourse JSON APIの型定義
//!
//! - `/c/{category}.json?page=N` → `ListingPage`
//! - `/t/{id}.json` → `TopicDetail`

use serde::Deserialize;

/// カテゴリ一覧の1ページ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingPage {
    #[serde(default)]
    pub topic_list: TopicList,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicList {
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// 一覧に載っているスレッド
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Topic {
    pub id: u64,
    #[serde(default)]
    pub title: String,
}

/// スレッド詳細
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicDetail {
    pub post_stream: Option<PostStream>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostStream {
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Post {
    /// レンダリング済みHTML
    #[serde(default)]
    pub cooked: String,
    /// wiki（共同編集）投稿か
    #[serde(default)]
    pub wiki: bool,
}

impl PostStream {
    /// wiki投稿の本文を投稿順に返す
    pub fn wiki_bodies(&self) -> impl Iterator<Item = &str> {
        self.posts
            .iter()
            .filter(|post| post.wiki)
            .map(|post| post.cooked.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing_page() {
        let json = r#"{
            "users": [],
            "topic_list": {
                "can_create_topic": false,
                "topics": [
                    {"id": 12, "title": "Fablab de Toulon", "unpinned": null},
                    {"id": 7, "title": "La Ruche"}
                ]
            }
        }"#;

        let page: ListingPage = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(page.topic_list.topics.len(), 2);
        assert_eq!(page.topic_list.topics[0].id, 12);
        assert_eq!(page.topic_list.topics[1].title, "La Ruche");
    }

    #[test]
    fn test_deserialize_empty_listing_page() {
        let page: ListingPage = serde_json::from_str(r#"{"topic_list": {"topics": []}}"#).unwrap();
        assert!(page.topic_list.topics.is_empty());
    }

    #[test]
    fn test_deserialize_topic_detail() {
        let json = r#"{
            "id": 12,
            "title": "Fablab de Toulon",
            "post_stream": {
                "posts": [
                    {"id": 1, "cooked": "<dl><dt>Site</dt><dd>a</dd></dl>", "wiki": true},
                    {"id": 2, "cooked": "<p>Merci !</p>", "wiki": false},
                    {"id": 3, "cooked": "<dl><dt>Tags</dt><dd>b</dd></dl>", "wiki": true}
                ]
            }
        }"#;

        let detail: TopicDetail = serde_json::from_str(json).expect("デシリアライズ失敗");
        let stream = detail.post_stream.expect("post_stream がない");
        let bodies: Vec<&str> = stream.wiki_bodies().collect();
        assert_eq!(bodies.len(), 2);
        assert!(bodies[1].contains("Tags"));
    }

    #[test]
    fn test_deserialize_topic_detail_ignores_topic_metadata() {
        let json = r#"{"id": 9, "title": "x", "post_stream": {"posts": [{"cooked": "<p>a</p>", "wiki": true}]}}"#;
        let detail: TopicDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.post_stream.map(|s| s.posts.len()), Some(1));
    }

    #[test]
    fn test_deserialize_topic_detail_without_post_stream() {
        let detail: TopicDetail = serde_json::from_str(r#"{"id": 3, "title": "x"}"#).unwrap();
        assert!(detail.post_stream.is_none());
    }
}
