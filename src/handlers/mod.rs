use axum::{
    http::{StatusCode, Uri},
    Json,
};

use crate::{
    data_formats::{endpoints_catalogue, EndpointsWrapper},
    errors::{RequestError, RequestErrorJson},
    JsonResponse,
};

mod article_handlers;
mod comment_handlers;
mod topic_handlers;
mod user_handlers;

pub use article_handlers::*;
pub use comment_handlers::*;
pub use topic_handlers::*;
pub use user_handlers::*;

type JsonResult<T> = Result<JsonResponse<T>, RequestError>;

// ----------------- Helper Handlers -----------------
pub async fn alive() -> &'static str {
    "alive"
}

pub async fn not_found(uri: Uri) -> JsonResponse<RequestErrorJson> {
    tracing::debug!(%uri, "no route matched");
    (
        StatusCode::NOT_FOUND,
        Json(RequestErrorJson::new("404: Endpoint not found")),
    )
}

pub async fn get_endpoints() -> JsonResult<EndpointsWrapper> {
    let endpoints = endpoints_catalogue()?;
    Ok((StatusCode::OK, Json(EndpointsWrapper { endpoints })))
}
