mod client;
pub mod types;

pub use client::{topic_url, ForumClient};
pub use types::{ListingPage, Post, PostStream, Topic, TopicDetail};
