use std::sync::Arc;

use axum::{http::StatusCode, Extension, Json};
use sqlx::SqlitePool;

use crate::{
    data_formats::{MultipleTopicsWrapper, PostTopicRequest, TopicWrapper},
    db_helpers::{insert_topic, select_topics},
    extractors::JsonBody,
    models::Topic,
    validation::require,
};

use super::JsonResult;

// ----------------- Topic Handlers -----------------

pub async fn get_topics(
    Extension(pool): Extension<Arc<SqlitePool>>,
) -> JsonResult<MultipleTopicsWrapper<Topic>> {
    let topics = select_topics(&pool).await?;
    Ok((StatusCode::OK, Json(MultipleTopicsWrapper { topics })))
}

pub async fn post_topic(
    Extension(pool): Extension<Arc<SqlitePool>>,
    JsonBody(PostTopicRequest { slug, description }): JsonBody<PostTopicRequest>,
) -> JsonResult<TopicWrapper<Topic>> {
    let slug = require(slug)?;
    let topic = insert_topic(&pool, &slug, description.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(TopicWrapper { topic })))
}
