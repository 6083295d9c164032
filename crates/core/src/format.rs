//! Rendering query results into `{payload, is_error}` responses.

use crate::error::QueryError;
use serde::Serialize;

/// Serialized outcome of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Compact JSON for successes, a sentence for failures and empty searches.
    pub payload: String,
    /// Set for failures the caller should treat as errors.
    pub is_error: bool,
}

impl Response {
    /// A successful response carrying `payload` verbatim.
    pub fn success(payload: String) -> Self {
        Self {
            payload,
            is_error: false,
        }
    }

    /// A failed response carrying a human readable message.
    pub fn error(payload: String) -> Self {
        Self {
            payload,
            is_error: true,
        }
    }

    /// Serialize a success value, or render the query error as a sentence.
    pub fn from_result<T: Serialize>(result: Result<T, QueryError>) -> Self {
        match result {
            Ok(value) => match serde_json::to_string(&value) {
                Ok(json) => Self::success(json),
                Err(e) => Self::error(format!("Failed to serialize result: {e}")),
            },
            Err(err) => Self {
                payload: err.to_string(),
                is_error: err.is_error(),
            },
        }
    }
}
