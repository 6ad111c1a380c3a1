use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

use crate::errors::RequestError;

const ENDPOINTS: &str = include_str!("../endpoints.json");

/// Timestamps go over the wire as `2020-07-09T20:11:00.000Z`.
pub fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// The static endpoint catalogue served by `GET /api`.
pub fn endpoints_catalogue() -> Result<serde_json::Value, RequestError> {
    serde_json::from_str(ENDPOINTS).map_err(|e| {
        tracing::error!(error = %e, "Endpoint catalogue is not valid JSON");
        RequestError::ServerError
    })
}
