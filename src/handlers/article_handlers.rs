use std::sync::Arc;

use axum::{extract::Query, http::StatusCode, Extension, Json};
use sqlx::SqlitePool;

use crate::{
    data_formats::{
        ArticleQueryParams, ArticleWrapper, MultipleArticlesWrapper, NewArticle,
        PostArticleRequest, VotesRequest,
    },
    db_helpers::{
        article_exists, count_articles, delete_article_by_id, insert_article,
        select_article_by_id, select_articles, topic_exists, update_article_votes,
        username_exists, ArticleFilter,
    },
    errors::RequestError,
    extractors::{IdParam, JsonBody},
    models::{Article, ArticleDetail, ArticleSummary},
    validation::{check_nums, json_literal, require, to_integer, to_vote_delta},
};

use super::JsonResult;

// ----------------- Article Handlers -----------------

pub async fn get_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Query(params): Query<ArticleQueryParams>,
) -> JsonResult<MultipleArticlesWrapper<ArticleSummary>> {
    let ArticleQueryParams {
        topic,
        sort_by,
        order,
        limit,
        page,
    } = params.normalized();

    check_nums(&[limit.as_deref(), page.as_deref()])?;
    let topic = topic.as_deref();
    topic_exists(&pool, topic).await?;
    let article_count = count_articles(&pool, topic).await?;

    let filter = ArticleFilter {
        topic,
        sort_by: sort_by.as_deref(),
        order: order.as_deref(),
        limit: to_integer(&limit),
        page: to_integer(&page),
    };
    let (articles, article_count) = select_articles(&pool, filter, article_count).await?;

    Ok((
        StatusCode::OK,
        Json(MultipleArticlesWrapper {
            articles,
            article_count,
        }),
    ))
}

pub async fn get_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    IdParam(article_id): IdParam,
) -> JsonResult<ArticleWrapper<ArticleDetail>> {
    article_exists(&pool, article_id).await?;
    let article = select_article_by_id(&pool, article_id).await?;
    Ok((StatusCode::OK, Json(ArticleWrapper { article })))
}

pub async fn post_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    JsonBody(request): JsonBody<PostArticleRequest>,
) -> JsonResult<ArticleWrapper<ArticleDetail>> {
    let new_article = NewArticle::try_from(request)?;

    username_exists(&pool, &new_article.author).await?;
    topic_exists(&pool, Some(&new_article.topic)).await?;

    let posted = insert_article(&pool, new_article).await?;
    let article = select_article_by_id(&pool, posted.article_id).await?;
    Ok((StatusCode::CREATED, Json(ArticleWrapper { article })))
}

pub async fn patch_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    IdParam(article_id): IdParam,
    JsonBody(VotesRequest { inc_votes }): JsonBody<VotesRequest>,
) -> JsonResult<ArticleWrapper<Article>> {
    let inc_votes = require(inc_votes.as_ref().and_then(json_literal))?;
    check_nums(&[Some(inc_votes.as_str())])?;
    let inc_votes = to_vote_delta(&inc_votes)?;

    article_exists(&pool, article_id).await?;
    let article = update_article_votes(&pool, article_id, inc_votes).await?;
    Ok((StatusCode::OK, Json(ArticleWrapper { article })))
}

pub async fn remove_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    IdParam(article_id): IdParam,
) -> Result<StatusCode, RequestError> {
    article_exists(&pool, article_id).await?;
    delete_article_by_id(&pool, article_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
