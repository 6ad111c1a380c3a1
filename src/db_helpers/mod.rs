use sqlx::{Sqlite, SqlitePool};

use crate::errors::RequestError;

mod article_helpers;
mod comment_helpers;
mod pagination;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use pagination::*;
pub use topic_helpers::*;
pub use user_helpers::*;

/// Appends `column = $n` conditions for the filters that are present and
/// collects their values in bind order. Only trusted fragments may be pushed
/// as raw SQL.
struct QueryBuilder {
    query: String,
    params: Vec<String>,
}

impl QueryBuilder {
    fn new(initial: &str) -> Self {
        Self {
            query: initial.to_owned(),
            params: vec![],
        }
    }

    fn add_filter(mut self, column: &str, param: Option<String>) -> Self {
        if let Some(value) = param {
            let keyword = if self.params.is_empty() {
                "WHERE"
            } else {
                "AND"
            };
            let filter = format!(" {} {} = ${}", keyword, column, self.params.len() + 1);
            self.query.push_str(&filter);
            self.params.push(value);
        }
        self
    }

    fn push(mut self, fragment: &str) -> Self {
        self.query.push(' ');
        self.query.push_str(fragment);
        self
    }

    /// Placeholder index for the next value bound after the filters.
    fn next_placeholder(&self) -> usize {
        self.params.len() + 1
    }

    fn build(self) -> (String, Vec<String>) {
        (self.query, self.params)
    }
}

// ----------------- Existence Checks -----------------

async fn row_exists<'q>(
    pool: &SqlitePool,
    query: &'q str,
    key: impl sqlx::Encode<'q, Sqlite> + sqlx::Type<Sqlite> + Send + 'q,
    missing: &'static str,
) -> Result<bool, RequestError> {
    let found = sqlx::query_scalar::<Sqlite, i64>(query)
        .bind(key)
        .fetch_optional(pool)
        .await?;
    match found {
        Some(_) => Ok(true),
        None => {
            tracing::debug!(missing, "guard rejected request");
            Err(RequestError::NotFound(missing))
        }
    }
}

pub async fn article_exists(pool: &SqlitePool, article_id: i64) -> Result<bool, RequestError> {
    row_exists(
        pool,
        "SELECT 1 FROM articles WHERE article_id = $1 LIMIT 1",
        article_id,
        "article id not found",
    )
    .await
}

pub async fn username_exists(pool: &SqlitePool, username: &str) -> Result<bool, RequestError> {
    row_exists(
        pool,
        "SELECT 1 FROM users WHERE username = $1 LIMIT 1",
        username.to_owned(),
        "username not found",
    )
    .await
}

pub async fn comment_exists(pool: &SqlitePool, comment_id: i64) -> Result<bool, RequestError> {
    row_exists(
        pool,
        "SELECT 1 FROM comments WHERE comment_id = $1 LIMIT 1",
        comment_id,
        "comment not found",
    )
    .await
}

/// An absent or empty slug means "no topic filter" and always passes.
pub async fn topic_exists(pool: &SqlitePool, slug: Option<&str>) -> Result<bool, RequestError> {
    match slug.filter(|slug| !slug.is_empty()) {
        Some(slug) => {
            row_exists(
                pool,
                "SELECT 1 FROM topics WHERE slug = $1 LIMIT 1",
                slug.to_owned(),
                "topic not found",
            )
            .await
        }
        None => Ok(true),
    }
}

// ----------------- Counts -----------------

async fn count_rows(
    pool: &SqlitePool,
    table: &str,
    column: &str,
    filter: Option<String>,
) -> Result<i64, RequestError> {
    let (query, params) = QueryBuilder::new(&format!("SELECT COUNT(*) FROM {table}"))
        .add_filter(column, filter)
        .build();
    let mut query = sqlx::query_scalar::<Sqlite, i64>(&query);
    for param in params {
        query = query.bind(param);
    }
    Ok(query.fetch_one(pool).await?)
}

pub async fn count_articles(pool: &SqlitePool, topic: Option<&str>) -> Result<i64, RequestError> {
    let topic = topic.filter(|topic| !topic.is_empty()).map(str::to_owned);
    count_rows(pool, "articles", "topic", topic).await
}

pub async fn count_comments(
    pool: &SqlitePool,
    article_id: Option<i64>,
) -> Result<i64, RequestError> {
    count_rows(
        pool,
        "comments",
        "article_id",
        article_id.map(|id| id.to_string()),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_skips_absent_filters() {
        let (query, params) = QueryBuilder::new("SELECT * FROM articles")
            .add_filter("topic", None)
            .push("ORDER BY created_at DESC")
            .build();
        assert_eq!(query, "SELECT * FROM articles ORDER BY created_at DESC");
        assert!(params.is_empty());
    }

    #[test]
    fn builder_numbers_placeholders_in_bind_order() {
        let builder = QueryBuilder::new("SELECT * FROM articles")
            .add_filter("topic", Some("mitch".into()))
            .add_filter("author", Some("rogersop".into()));
        assert_eq!(builder.next_placeholder(), 3);
        let (query, params) = builder.build();
        assert_eq!(
            query,
            "SELECT * FROM articles WHERE topic = $1 AND author = $2"
        );
        assert_eq!(params, vec!["mitch".to_owned(), "rogersop".to_owned()]);
    }
}
