use sqlx::{Sqlite, SqlitePool};

use crate::{errors::RequestError, models::Comment};

use super::Page;

const COMMENT_COLUMNS: &str = "comment_id, body, article_id, author, votes, created_at";

/// One page of an article's comments, newest first. `comment_count` is the
/// article's total and is handed back untouched.
pub async fn select_comments_by_article_id(
    pool: &SqlitePool,
    article_id: i64,
    limit: Option<i64>,
    page: Option<i64>,
    comment_count: i64,
) -> Result<(Vec<Comment>, i64), RequestError> {
    let Page { limit, offset } = Page::new(limit, page, comment_count);
    let query = format!(
        r#"
        SELECT {COMMENT_COLUMNS}
        FROM   comments
        WHERE  article_id = $1
        ORDER  BY created_at DESC
        LIMIT  $2 OFFSET $3
        "#
    );
    let comments = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(article_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok((comments, comment_count))
}

pub async fn select_comment_by_id(
    pool: &SqlitePool,
    comment_id: i64,
) -> Result<Comment, RequestError> {
    let query = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE comment_id = $1");
    sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(comment_id)
        .fetch_optional(pool)
        .await?
        .ok_or(RequestError::NotFound("comment not found"))
}

pub async fn insert_comment(
    pool: &SqlitePool,
    article_id: i64,
    username: &str,
    body: &str,
) -> Result<Comment, RequestError> {
    let query = format!(
        r#"
        INSERT INTO comments (article_id, author, body)
        VALUES ($1, $2, $3)
        RETURNING {COMMENT_COLUMNS}
        "#
    );
    let comment = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(article_id)
        .bind(username)
        .bind(body)
        .fetch_one(pool)
        .await?;
    tracing::debug!(comment_id = comment.comment_id, article_id, "comment inserted");
    Ok(comment)
}

pub async fn update_comment_votes(
    pool: &SqlitePool,
    inc_votes: i64,
    comment_id: i64,
) -> Result<Comment, RequestError> {
    let query = format!(
        r#"
        UPDATE comments
        SET    votes = votes + $1
        WHERE  comment_id = $2
               AND typeof(votes + $1) = 'integer'
        RETURNING {COMMENT_COLUMNS}
        "#
    );
    let comment = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(inc_votes)
        .bind(comment_id)
        .fetch_optional(pool)
        .await?;

    match comment {
        Some(comment) => Ok(comment),
        None => {
            // Either the comment is gone or the sum left the integer range.
            select_comment_by_id(pool, comment_id).await?;
            Err(RequestError::votes_out_of_range())
        }
    }
}

/// The only delete whose existence check is its own affected-row count.
pub async fn delete_comment_by_id(pool: &SqlitePool, comment_id: i64) -> Result<(), RequestError> {
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
        .bind(comment_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RequestError::NotFound("comment not found"));
    }
    Ok(())
}
