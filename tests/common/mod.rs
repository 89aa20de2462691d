// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use beancounter_office::config::Config;
use beancounter_office::error::UpstreamError;
use beancounter_office::models::{Activity, Topic, TopicKind, User, UserProfile, UserService};
use beancounter_office::routes::create_router;
use beancounter_office::services::{BeancounterApi, Credentials};
use beancounter_office::AppState;
use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// Offline stand-in for the platform, returning canned data.
#[derive(Default)]
pub struct StubClient {
    /// When set, every call fails with this `(status, message)` rejection.
    pub reject_with: Option<(String, String)>,
    /// `(customer, user_id, page)` of every `list_activities` call.
    pub activity_calls: Mutex<Vec<(String, String, u32)>>,
}

impl StubClient {
    fn check(&self) -> Result<(), UpstreamError> {
        match &self.reject_with {
            Some((status, message)) => Err(UpstreamError::Rejected {
                status: status.clone(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[allow(dead_code)]
pub fn sample_activity(id: &str, verb: &str, day: u32) -> Activity {
    Activity {
        id: id.to_string(),
        verb: verb.to_string(),
        kind: "TWEET".to_string(),
        service: "twitter".to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        url: format!("http://twitter.com/jdoe/status/{}", id),
        name: String::new(),
        description: String::new(),
    }
}

#[async_trait]
impl BeancounterApi for StubClient {
    async fn list_users(&self, _cred: &Credentials) -> Result<Vec<User>, UpstreamError> {
        self.check()?;
        Ok(vec![User {
            id: "jdoe".to_string(),
            name: "John Doe".to_string(),
            photo: "pic.jpg".to_string(),
            services: vec![UserService {
                name: "facebook".to_string(),
                id: "1001".to_string(),
                link: "https://facebook.com/jdoe".to_string(),
                photo: "pic.jpg".to_string(),
            }],
            ..Default::default()
        }])
    }

    async fn get_user_profile(
        &self,
        _cred: &Credentials,
        _user_id: &str,
    ) -> Result<UserProfile, UpstreamError> {
        self.check()?;
        Ok(UserProfile {
            updated: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            topics: vec![Topic {
                kind: TopicKind::Topic,
                resource: "http://dbpedia.org/resource/Rust".to_string(),
                label: "Rust".to_string(),
                weight: 0.5,
                urls: vec![],
                activities: vec!["a1".to_string()],
            }],
        })
    }

    async fn list_activities(
        &self,
        cred: &Credentials,
        user_id: &str,
        page: u32,
    ) -> Result<Vec<Activity>, UpstreamError> {
        self.check()?;
        self.activity_calls
            .lock()
            .unwrap()
            .push((cred.customer.clone(), user_id.to_string(), page));
        Ok(vec![
            sample_activity("a3", "TWEET", 3),
            sample_activity("a2", "LIKE", 1),
            sample_activity("a1", "TWEET", 1),
        ])
    }
}

/// Create a test app backed by `client`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with(
    client: Arc<StubClient>,
    config: Config,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState { config, client });
    (create_router(state.clone()), state)
}

/// Create a test app with a well-behaved stub client.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<StubClient>) {
    let client = Arc::new(StubClient::default());
    let (app, _) = create_test_app_with(client.clone(), Config::test_default());
    (app, client)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
