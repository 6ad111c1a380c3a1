use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::NewArticle;
use crate::errors::RequestError;
use crate::models::{Article, ArticleDetail, ArticleSummary};

use super::{Page, QueryBuilder, SortColumn, SortOrder};

const ARTICLE_LIST_QUERY: &str = r#"
            SELECT articles.article_id,
                   articles.title,
                   articles.topic,
                   articles.author,
                   articles.created_at,
                   articles.votes,
                   articles.article_img_url,
                   COUNT(comments.comment_id) AS comment_count
            FROM   articles
                LEFT JOIN comments
                       ON comments.article_id = articles.article_id"#;

const SINGLE_ARTICLE_QUERY: &str = r#"
            SELECT articles.article_id,
                   articles.title,
                   articles.topic,
                   articles.author,
                   articles.body,
                   articles.created_at,
                   articles.votes,
                   articles.article_img_url,
                   COUNT(comments.comment_id) AS comment_count
            FROM   articles
                LEFT JOIN comments
                       ON comments.article_id = articles.article_id
            WHERE  articles.article_id = $1
            GROUP  BY articles.article_id
"#;

const ARTICLE_COLUMNS: &str =
    "article_id, title, topic, author, body, created_at, votes, article_img_url";

/// Raw listing options; the allow-list and pagination rules are applied here,
/// not by the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArticleFilter<'a> {
    pub topic: Option<&'a str>,
    pub sort_by: Option<&'a str>,
    pub order: Option<&'a str>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

pub async fn select_articles(
    pool: &SqlitePool,
    ArticleFilter {
        topic,
        sort_by,
        order,
        limit,
        page,
    }: ArticleFilter<'_>,
    article_count: i64,
) -> Result<(Vec<ArticleSummary>, i64), RequestError> {
    let sort_by = SortColumn::from_param(sort_by);
    let order = SortOrder::from_param(order);
    let Page { limit, offset } = Page::new(limit, page, article_count);
    let topic = topic.filter(|topic| !topic.is_empty()).map(str::to_owned);

    let builder = QueryBuilder::new(ARTICLE_LIST_QUERY).add_filter("articles.topic", topic);
    let placeholder = builder.next_placeholder();
    let (query, params) = builder
        .push("GROUP BY articles.article_id")
        .push(&order_clause(sort_by, order))
        .push(&format!(
            "LIMIT ${} OFFSET ${}",
            placeholder,
            placeholder + 1
        ))
        .build();

    let mut query = sqlx::query_as::<Sqlite, ArticleSummary>(&query);
    for param in params {
        query = query.bind(param);
    }
    let articles = query.bind(limit).bind(offset).fetch_all(pool).await?;

    Ok((articles, article_count))
}

/// Rows sharing the sort value are ordered by id so pages never overlap.
fn order_clause(sort_by: SortColumn, order: SortOrder) -> String {
    let direction = order.keyword();
    match sort_by {
        SortColumn::ArticleId => format!("ORDER BY articles.article_id {direction}"),
        column => format!(
            "ORDER BY articles.{} {direction}, articles.article_id {direction}",
            column.name()
        ),
    }
}

pub async fn select_article_by_id(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<ArticleDetail, RequestError> {
    let article = sqlx::query_as::<Sqlite, ArticleDetail>(SINGLE_ARTICLE_QUERY)
        .bind(article_id)
        .fetch_optional(pool)
        .await?;
    article.ok_or(RequestError::NotFound("article id not found"))
}

/// Inserts an article whose author and topic have already been checked.
/// Leaving `article_img_url` out lets the column default apply.
pub async fn insert_article(
    pool: &SqlitePool,
    NewArticle {
        title,
        topic,
        author,
        body,
        article_img_url,
    }: NewArticle,
) -> Result<Article, RequestError> {
    let (columns, values) = match article_img_url {
        Some(_) => (
            "title, topic, author, body, article_img_url",
            "$1, $2, $3, $4, $5",
        ),
        None => ("title, topic, author, body", "$1, $2, $3, $4"),
    };
    let query = format!(
        "INSERT INTO articles ({columns}) VALUES ({values}) RETURNING {ARTICLE_COLUMNS}"
    );

    let mut query = sqlx::query_as::<Sqlite, Article>(&query)
        .bind(title)
        .bind(topic)
        .bind(author)
        .bind(body);
    if let Some(article_img_url) = article_img_url {
        query = query.bind(article_img_url);
    }
    let article = query.fetch_one(pool).await?;

    tracing::debug!(article_id = article.article_id, "article inserted");
    Ok(article)
}

pub async fn update_article_votes(
    pool: &SqlitePool,
    article_id: i64,
    inc_votes: i64,
) -> Result<Article, RequestError> {
    let query = format!(
        r#"
        UPDATE articles
        SET    votes = votes + $1
        WHERE  article_id = $2
               AND typeof(votes + $1) = 'integer'
        RETURNING {ARTICLE_COLUMNS}
        "#
    );
    let article = sqlx::query_as::<Sqlite, Article>(&query)
        .bind(inc_votes)
        .bind(article_id)
        .fetch_optional(pool)
        .await?;

    match article {
        Some(article) => Ok(article),
        None => {
            // Either the article is gone or the sum left the integer range.
            select_article_by_id(pool, article_id).await?;
            Err(RequestError::votes_out_of_range())
        }
    }
}

/// Removes the article together with its comments in one transaction.
pub async fn delete_article_by_id(pool: &SqlitePool, article_id: i64) -> Result<(), RequestError> {
    let mut tx = pool.begin().await?;

    let comments = sqlx::query("DELETE FROM comments WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut tx)
        .await?;

    let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RequestError::NotFound("article id not found"));
    }

    tx.commit().await?;
    tracing::debug!(
        article_id,
        comments_removed = comments.rows_affected(),
        "article deleted"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_are_broken_by_article_id() {
        assert_eq!(
            order_clause(SortColumn::Author, SortOrder::Asc),
            "ORDER BY articles.author ASC, articles.article_id ASC"
        );
        assert_eq!(
            order_clause(SortColumn::default(), SortOrder::default()),
            "ORDER BY articles.created_at DESC, articles.article_id DESC"
        );
        assert_eq!(
            order_clause(SortColumn::ArticleId, SortOrder::Desc),
            "ORDER BY articles.article_id DESC"
        );
    }
}
