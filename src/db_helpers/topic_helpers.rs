use std::sync::OnceLock;

use regex::Regex;
use sqlx::{Sqlite, SqlitePool};

use crate::{errors::RequestError, models::Topic};

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^\w+$").expect("slug pattern is valid"))
}

pub fn is_valid_slug(slug: &str) -> bool {
    slug_pattern().is_match(slug)
}

pub async fn select_topics(pool: &SqlitePool) -> Result<Vec<Topic>, RequestError> {
    let topics = sqlx::query_as::<Sqlite, Topic>("SELECT slug, description FROM topics")
        .fetch_all(pool)
        .await?;
    Ok(topics)
}

pub async fn insert_topic(
    pool: &SqlitePool,
    slug: &str,
    description: Option<&str>,
) -> Result<Topic, RequestError> {
    if !is_valid_slug(slug) {
        return Err(RequestError::InvalidInput("slug must contain text".to_owned()));
    }

    let topic = sqlx::query_as::<Sqlite, Topic>(
        r#"
        INSERT INTO topics (slug, description)
        VALUES ($1, $2)
        RETURNING slug, description
        "#,
    )
    .bind(slug)
    .bind(description)
    .fetch_one(pool)
    .await?;
    Ok(topic)
}
