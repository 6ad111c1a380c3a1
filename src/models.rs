use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data_formats::serialize_timestamp;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// A bare `articles` row, as returned by writes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    pub votes: i64,
    pub article_img_url: String,
}

/// A full article together with the number of comments posted on it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArticleDetail {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// Listing shape: everything but the body.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArticleSummary {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i64,
    pub body: String,
    pub article_id: i64,
    pub author: String,
    pub votes: i64,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}
