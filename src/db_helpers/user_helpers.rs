use sqlx::{Sqlite, SqlitePool};

use crate::{errors::RequestError, models::User};

pub async fn select_users(pool: &SqlitePool) -> Result<Vec<User>, RequestError> {
    let users = sqlx::query_as::<Sqlite, User>("SELECT username, name, avatar_url FROM users")
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn select_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<User, RequestError> {
    sqlx::query_as::<Sqlite, User>(
        "SELECT username, name, avatar_url FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?
    .ok_or(RequestError::NotFound("username not found"))
}
