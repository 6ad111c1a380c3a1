use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::JsonResponse;

pub const NULL_INPUT: &str = "input can't be null or undefined";
pub const INVALID_ID: &str = "invalid id";
pub const VOTES_OUT_OF_RANGE: &str = "inc_votes out of range";

// SQLite extended result codes surfaced through `DatabaseError::code`
const SQLITE_MISMATCH: &str = "20";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("internal server error")]
    ServerError,
    #[error(transparent)]
    DatabaseError(#[from] sqlx::Error),
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RequestErrorJson {
    pub msg: String,
}

impl RequestErrorJson {
    pub fn new(msg: impl Into<String>) -> RequestErrorJson {
        RequestErrorJson { msg: msg.into() }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl RequestError {
    pub fn invalid_id() -> Self {
        RequestError::InvalidInput(INVALID_ID.to_owned())
    }

    pub fn null_input() -> Self {
        RequestError::InvalidInput(NULL_INPUT.to_owned())
    }

    pub fn votes_out_of_range() -> Self {
        RequestError::InvalidInput(VOTES_OUT_OF_RANGE.to_owned())
    }

    pub fn to_json_response(&self) -> JsonResponse<RequestErrorJson> {
        let (status_code, msg) = self.classify();
        (status_code, Json(RequestErrorJson::new(msg)))
    }

    fn classify(&self) -> (StatusCode, String) {
        match self {
            RequestError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message.clone()),
            RequestError::NotFound(message) => (StatusCode::NOT_FOUND, (*message).to_owned()),
            RequestError::ServerError => internal_error(),
            RequestError::DatabaseError(e) => classify_sqlx_error(e),
        }
    }
}

fn internal_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".to_owned(),
    )
}

/// Translate store-level failures into the `{status, msg}` pair sent to the
/// client. Only recognised constraint codes are surfaced; anything else is
/// logged and reported as a generic 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "not found".to_owned()),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(SQLITE_CONSTRAINT_FOREIGNKEY) => (
                StatusCode::NOT_FOUND,
                "referenced resource not found".to_owned(),
            ),
            Some(SQLITE_CONSTRAINT_NOTNULL) => (StatusCode::BAD_REQUEST, NULL_INPUT.to_owned()),
            Some(SQLITE_CONSTRAINT_UNIQUE) | Some(SQLITE_CONSTRAINT_PRIMARYKEY) => {
                (StatusCode::CONFLICT, "resource already exists".to_owned())
            }
            Some(SQLITE_MISMATCH) => (StatusCode::BAD_REQUEST, INVALID_ID.to_owned()),
            _ => {
                tracing::error!(error = %db_err, "Unhandled database error");
                internal_error()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_errors_keep_their_message() {
        let (status, Json(body)) = RequestError::NotFound("topic not found").to_json_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.msg, "topic not found");

        let (status, Json(body)) = RequestError::null_input().to_json_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.msg, "input can't be null or undefined");
    }

    #[test]
    fn row_not_found_maps_to_404() {
        let (status, _) = RequestError::from(sqlx::Error::RowNotFound).to_json_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_errors_do_not_leak_details() {
        let err = RequestError::from(sqlx::Error::PoolTimedOut);
        let (status, Json(body)) = err.to_json_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.msg, "internal server error");
    }
}
