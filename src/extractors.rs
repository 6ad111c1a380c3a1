use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::{request::Parts, Request};
use axum::Json;

use crate::errors::RequestError;

/// A numeric `:article_id`/`:comment_id` path segment. Anything that is not
/// an integer is rejected with `400 invalid id` before a handler runs.
#[derive(Debug, Clone, Copy)]
pub struct IdParam(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = RequestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RequestError::invalid_id())?;
        match raw.parse::<i64>() {
            Ok(id) => Ok(IdParam(id)),
            Err(_) => {
                tracing::debug!(id = %raw, "rejecting non-numeric id");
                Err(RequestError::invalid_id())
            }
        }
    }
}

/// `Json<T>` whose rejections use the `{msg}` error shape.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for JsonBody<T>
where
    Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
    S: Send + Sync,
    B: Send + 'static,
{
    type Rejection = RequestError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "rejecting request body");
                Err(RequestError::InvalidInput(
                    "malformed request body".to_owned(),
                ))
            }
        }
    }
}
