use serde_json::Value;

use crate::errors::RequestError;

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_present(raw: &Option<impl AsRef<str>>) -> bool {
    matches!(raw, Some(value) if !value.as_ref().is_empty())
}

/// Fails with `"<value>" is NaN` on the first present value that is not a
/// number. Absent and empty values are left for the caller to default.
pub fn check_nums<S: AsRef<str>>(inputs: &[Option<S>]) -> Result<bool, RequestError> {
    for raw in inputs.iter().flatten() {
        let raw: &str = raw.as_ref();
        if !raw.is_empty() && parse_number(raw).is_none() {
            tracing::debug!(value = raw, "rejecting non-numeric input");
            return Err(RequestError::InvalidInput(format!("\"{raw}\" is NaN")));
        }
    }
    Ok(true)
}

/// Converts an already validated numeric input into an integer, truncating
/// any fractional part.
pub fn to_integer<S: AsRef<str>>(input: &Option<S>) -> Option<i64> {
    if !is_present(input) {
        return None;
    }
    input
        .as_ref()
        .and_then(|raw| parse_number(raw.as_ref()))
        .map(|n| n.trunc() as i64)
}

/// Turns a validated `inc_votes` literal into a vote delta. Deltas must fit
/// in an `i32` so that `votes + delta` stays an integer in the store.
pub fn to_vote_delta(raw: &str) -> Result<i64, RequestError> {
    parse_number(raw)
        .map(f64::trunc)
        .filter(|n| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(n))
        .map(|n| n as i64)
        .ok_or_else(|| {
            tracing::debug!(value = raw, "rejecting out of range vote delta");
            RequestError::votes_out_of_range()
        })
}

/// Flattens a JSON body value into the literal `check_nums` inspects. Null
/// and empty strings count as missing.
pub fn json_literal(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Required body fields must be present and non-null before anything
/// touches the store.
pub fn require<T>(field: Option<T>) -> Result<T, RequestError> {
    field.ok_or_else(RequestError::null_input)
}
