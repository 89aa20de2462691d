// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Beancounter platform API client.
//!
//! Handles:
//! - Request URL construction (API root, path segments, API key)
//! - Envelope status checking
//! - Handing successful payloads to the normalizer
//!
//! No retries: every failure is reported once to the caller.

use crate::config::ConfigError;
use crate::error::UpstreamError;
use crate::models::{Activity, User, UserProfile};
use crate::normalize::{normalize_activity, normalize_profile, normalize_user};
use crate::upstream::{UpstreamActivityItem, UpstreamEnvelope, UpstreamProfile, UpstreamUser};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

const PARAM_API_KEY: &str = "apikey";
const PARAM_SEARCH_PATH: &str = "path";
const PARAM_SEARCH_VALUE: &str = "value";
const PARAM_PAGE: &str = "page";

/// Longest upstream error body kept in an error message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Identifies a single customer of the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub customer: String,
    pub api_key: String,
}

/// Read access to the Beancounter platform, already normalized.
#[async_trait]
pub trait BeancounterApi: Send + Sync {
    /// All users of the customer.
    async fn list_users(&self, cred: &Credentials) -> Result<Vec<User>, UpstreamError>;

    /// Interest profile of one user.
    async fn get_user_profile(
        &self,
        cred: &Credentials,
        user_id: &str,
    ) -> Result<UserProfile, UpstreamError>;

    /// One page of a user's activities, most recent first.
    async fn list_activities(
        &self,
        cred: &Credentials,
        user_id: &str,
        page: u32,
    ) -> Result<Vec<Activity>, UpstreamError>;
}

/// reqwest-backed [`BeancounterApi`].
#[derive(Clone)]
pub struct BeancounterClient {
    http: reqwest::Client,
    api_root: Url,
}

impl BeancounterClient {
    /// Create a client for the API rooted at `api_root`.
    ///
    /// Any query or fragment on `api_root` is dropped.
    pub fn new(api_root: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let mut url = Url::parse(api_root)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", api_root, e)))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(api_root.to_string()));
        }
        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            api_root: url,
        })
    }

    /// Normalized API root (always ends with `/`).
    pub fn api_root(&self) -> &str {
        self.api_root.as_str()
    }

    /// Build the URL for `segments` under the API root.
    ///
    /// Segments are percent-encoded, so user IDs cannot escape their slot.
    fn resource_url(&self, cred: &Credentials, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.api_root.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            if !cred.api_key.is_empty() {
                pairs.append_pair(PARAM_API_KEY, &cred.api_key);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        url
    }

    /// GET an enveloped resource and unwrap its payload.
    async fn get_object<T>(&self, url: Url) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned + Default,
    {
        tracing::debug!(path = url.path(), "Beancounter API request");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Failed calls usually still carry an envelope with a message.
            if let Ok(envelope) = serde_json::from_str::<UpstreamEnvelope<serde_json::Value>>(&body)
            {
                envelope.into_result()?;
            }
            tracing::warn!(status = status.as_u16(), "Beancounter API returned error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        serde_json::from_str::<UpstreamEnvelope<T>>(&body)
            .map_err(|e| UpstreamError::Decode(e.to_string()))?
            .into_result()
    }
}

#[async_trait]
impl BeancounterApi for BeancounterClient {
    async fn list_users(&self, cred: &Credentials) -> Result<Vec<User>, UpstreamError> {
        let url = self.resource_url(cred, &["user", "all"], &[]);
        let users: Vec<UpstreamUser> = self.get_object(url).await?;

        tracing::debug!(customer = %cred.customer, count = users.len(), "Fetched users");
        Ok(users.iter().map(normalize_user).collect())
    }

    async fn get_user_profile(
        &self,
        cred: &Credentials,
        user_id: &str,
    ) -> Result<UserProfile, UpstreamError> {
        let url = self.resource_url(cred, &["user", user_id, "profile"], &[]);
        let profile: UpstreamProfile = self.get_object(url).await?;

        Ok(normalize_profile(&profile))
    }

    async fn list_activities(
        &self,
        cred: &Credentials,
        user_id: &str,
        page: u32,
    ) -> Result<Vec<Activity>, UpstreamError> {
        let page = page.to_string();
        let url = self.resource_url(
            cred,
            &["activities", "search"],
            &[
                (PARAM_SEARCH_PATH, "user.username"),
                (PARAM_SEARCH_VALUE, user_id),
                (PARAM_PAGE, page.as_str()),
            ],
        );
        let items: Vec<UpstreamActivityItem> = self.get_object(url).await?;

        tracing::debug!(
            customer = %cred.customer,
            user_id,
            count = items.len(),
            "Fetched activities"
        );
        Ok(items
            .iter()
            .map(|item| normalize_activity(&item.activity))
            .collect())
    }
}
