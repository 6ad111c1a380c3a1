use std::sync::Arc;

use axum::{extract::Query, http::StatusCode, Extension, Json};
use sqlx::SqlitePool;

use crate::{
    data_formats::{
        CommentWrapper, MultipleCommentsWrapper, PageQueryParams, PostCommentRequest,
        VotesRequest,
    },
    db_helpers::{
        article_exists, comment_exists, count_comments, delete_comment_by_id, insert_comment,
        select_comments_by_article_id, update_comment_votes, username_exists,
    },
    errors::RequestError,
    extractors::{IdParam, JsonBody},
    models::Comment,
    validation::{check_nums, json_literal, require, to_integer, to_vote_delta},
};

use super::JsonResult;

// ----------------- Comment Handlers -----------------

pub async fn get_comments_by_article_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    IdParam(article_id): IdParam,
    Query(PageQueryParams { limit, page }): Query<PageQueryParams>,
) -> JsonResult<MultipleCommentsWrapper<Comment>> {
    check_nums(&[limit.as_deref(), page.as_deref()])?;
    article_exists(&pool, article_id).await?;
    let comment_count = count_comments(&pool, Some(article_id)).await?;
    let (comments, comment_count) = select_comments_by_article_id(
        &pool,
        article_id,
        to_integer(&limit),
        to_integer(&page),
        comment_count,
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(MultipleCommentsWrapper {
            comments,
            comment_count,
        }),
    ))
}

pub async fn post_comment_by_article_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    IdParam(article_id): IdParam,
    JsonBody(PostCommentRequest { username, body }): JsonBody<PostCommentRequest>,
) -> JsonResult<CommentWrapper<Comment>> {
    let username = require(username)?;
    let body = require(body)?;

    article_exists(&pool, article_id).await?;
    username_exists(&pool, &username).await?;

    let comment = insert_comment(&pool, article_id, &username, &body).await?;
    Ok((StatusCode::CREATED, Json(CommentWrapper { comment })))
}

pub async fn patch_comment_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    IdParam(comment_id): IdParam,
    JsonBody(VotesRequest { inc_votes }): JsonBody<VotesRequest>,
) -> JsonResult<CommentWrapper<Comment>> {
    let inc_votes = require(inc_votes.as_ref().and_then(json_literal))?;
    check_nums(&[Some(inc_votes.as_str())])?;
    let inc_votes = to_vote_delta(&inc_votes)?;

    comment_exists(&pool, comment_id).await?;
    let comment = update_comment_votes(&pool, inc_votes, comment_id).await?;
    Ok((StatusCode::OK, Json(CommentWrapper { comment })))
}

pub async fn remove_comment_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    IdParam(comment_id): IdParam,
) -> Result<StatusCode, RequestError> {
    delete_comment_by_id(&pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
