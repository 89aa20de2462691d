// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use super::null_as_default;
use serde::Deserialize;

/// One element of the `activities/search` result list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamActivityItem {
    #[serde(deserialize_with = "null_as_default")]
    pub activity: UpstreamActivity,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamActivity {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verb: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object: UpstreamObject,
    #[serde(deserialize_with = "null_as_default")]
    pub context: UpstreamContext,
}

/// What the activity was performed on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamObject {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamContext {
    /// Milliseconds since the Unix epoch
    #[serde(deserialize_with = "null_as_default")]
    pub date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_activity_item() {
        let item: UpstreamActivityItem = serde_json::from_str(
            r#"{
                "activity": {
                    "id": "891aed77",
                    "verb": "TWEET",
                    "object": {
                        "type": "TWEET",
                        "url": "http://twitter.com/jdoe/status/1",
                        "name": "jdoe",
                        "description": "hello"
                    },
                    "context": {"date": 1705314600000, "service": "http://twitter.com"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(item.activity.id, "891aed77");
        assert_eq!(item.activity.object.kind, "TWEET");
        assert_eq!(item.activity.context.date, 1_705_314_600_000);
        assert_eq!(item.activity.context.service, "http://twitter.com");
    }

    #[test]
    fn test_missing_object_and_context() {
        let item: UpstreamActivityItem =
            serde_json::from_str(r#"{"activity":{"id":"x","object":null}}"#).unwrap();
        assert_eq!(item.activity.object.kind, "");
        assert_eq!(item.activity.context.date, 0);
    }
}
