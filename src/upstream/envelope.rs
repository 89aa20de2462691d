// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The `{status, message, object}` wrapper around every platform response.

use super::null_as_default;
use crate::error::UpstreamError;
use serde::Deserialize;

/// Status value the platform uses for successful calls.
pub const STATUS_OK: &str = "OK";

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamEnvelope<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Payload; absent on failed calls.
    pub object: Option<T>,
}

impl<T: Default> UpstreamEnvelope<T> {
    /// Split the envelope into its payload or the platform-reported failure.
    ///
    /// An `OK` envelope without a payload yields the payload's default.
    pub fn into_result(self) -> Result<T, UpstreamError> {
        if self.status != STATUS_OK {
            return Err(UpstreamError::Rejected {
                status: self.status,
                message: self.message,
            });
        }
        Ok(self.object.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let env: UpstreamEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"status":"OK","message":"done","object":["a"]}"#).unwrap();
        assert_eq!(env.into_result().unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn test_ok_envelope_without_object() {
        let env: UpstreamEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"status":"OK","object":null}"#).unwrap();
        assert!(env.into_result().unwrap().is_empty());
    }

    #[test]
    fn test_failed_envelope() {
        let env: UpstreamEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"status":"NOK","message":"API key not valid"}"#).unwrap();

        match env.into_result() {
            Err(UpstreamError::Rejected { status, message }) => {
                assert_eq!(status, "NOK");
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_status_is_failure() {
        let env: UpstreamEnvelope<Vec<String>> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(env.into_result().is_err());
    }
}
