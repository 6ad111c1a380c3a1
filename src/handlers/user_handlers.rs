use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, Extension, Json};
use sqlx::SqlitePool;

use crate::{
    data_formats::{MultipleUsersWrapper, UserWrapper},
    db_helpers::{select_user_by_username, select_users, username_exists},
    models::User,
};

use super::JsonResult;

// ----------------- User Handlers -----------------

pub async fn get_users(
    Extension(pool): Extension<Arc<SqlitePool>>,
) -> JsonResult<MultipleUsersWrapper<User>> {
    let users = select_users(&pool).await?;
    Ok((StatusCode::OK, Json(MultipleUsersWrapper { users })))
}

pub async fn get_user_by_username(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(username): Path<String>,
) -> JsonResult<UserWrapper<User>> {
    username_exists(&pool, &username).await?;
    let user = select_user_by_username(&pool, &username).await?;
    Ok((StatusCode::OK, Json(UserWrapper { user })))
}
