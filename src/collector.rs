//! スレッド → 拠点レコードの組み立て
//!
//! スレッドごとにタイトル・URLで初期化したレコードを作り、
//! wiki投稿を順番に抽出・正規化して上書き／追記する。

use crate::error::Result;
use crate::forum::{ForumClient, Topic};
use forum_locations_common::{extract, normalize, SiteRecord};
use indicatif::{ProgressBar, ProgressStyle};

/// wiki投稿本文からレコードを組み立てる
pub fn build_record<S: AsRef<str>>(title: &str, forum_url: &str, wiki_posts: &[S]) -> SiteRecord {
    let mut record = SiteRecord::new(title, forum_url);
    for body in wiki_posts {
        let fields = extract(body.as_ref());
        tracing::debug!(forum_url, ?fields, "Definitions found");
        normalize(&fields, &mut record);
    }
    record
}

/// 一覧をID昇順に並べる（同IDは元の順序を保つ）
pub fn sort_topics_by_id(topics: &mut [Topic]) {
    topics.sort_by_key(|topic| topic.id);
}

/// 全スレッドを逐次取得してレコード化する
pub async fn collect_records(
    client: &ForumClient,
    topics: &[Topic],
    show_progress: bool,
) -> Result<Vec<SiteRecord>> {
    let progress = if show_progress {
        let bar = ProgressBar::new(topics.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {wide_msg}") {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut records = Vec::with_capacity(topics.len());
    for topic in topics {
        progress.set_message(topic.title.clone());
        tracing::debug!(id = topic.id, title = %topic.title, "Processing topic");

        let wiki_posts = client.fetch_wiki_posts(topic.id).await?;
        let record = build_record(&topic.title, &client.topic_url(topic.id), &wiki_posts[..]);
        records.push(record);
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(records)
}
