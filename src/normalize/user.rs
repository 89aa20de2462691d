// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UpstreamUser → User.

use crate::models::{User, UserService};
use crate::time_utils::{approx_years_between, parse_us_date};
use crate::upstream::UpstreamUser;
use chrono::{DateTime, Utc};

/// A linked service we know how to read from user metadata.
pub struct KnownService {
    pub name: &'static str,
    extract: fn(&UpstreamUser) -> UserService,
}

/// Services checked for membership, in order.
///
/// The order decides both the service list order and which photo wins.
pub const KNOWN_SERVICES: [KnownService; 2] = [
    KnownService {
        name: "twitter",
        extract: twitter_service,
    },
    KnownService {
        name: "facebook",
        extract: facebook_service,
    },
];

fn twitter_service(u: &UpstreamUser) -> UserService {
    let screen_name = u.meta("twitter.user.screenName");
    UserService {
        name: "twitter".to_string(),
        id: screen_name.to_string(),
        link: format!("https://twitter.com/{}", screen_name),
        photo: u.meta("twitter.user.imageUrl").to_string(),
    }
}

fn facebook_service(u: &UpstreamUser) -> UserService {
    UserService {
        name: "facebook".to_string(),
        id: u.meta("facebook.user.id").to_string(),
        link: u.meta("facebook.user.link").to_string(),
        photo: u.meta("facebook.user.picture").to_string(),
    }
}

/// Normalize a user, computing the age relative to the current time.
pub fn normalize_user(u: &UpstreamUser) -> User {
    normalize_user_at(u, Utc::now())
}

/// Normalize a user, computing the age relative to `now`.
pub fn normalize_user_at(u: &UpstreamUser, now: DateTime<Utc>) -> User {
    let services: Vec<UserService> = KNOWN_SERVICES
        .iter()
        .filter(|svc| u.has_service(svc.name))
        .map(|svc| (svc.extract)(u))
        .collect();

    let photo = services
        .iter()
        .map(|s| s.photo.as_str())
        .find(|p| !p.is_empty())
        .unwrap_or("")
        .to_string();

    let age = parse_us_date(u.meta("facebook.user.birthday"))
        .map(|dob| approx_years_between(dob, now))
        .unwrap_or(0);

    User {
        id: u.service_user_id.clone(),
        email: u.meta("facebook.user.email").to_string(),
        name: first_non_empty(u.meta("facebook.user.name"), u.meta("twitter.user.name")),
        photo,
        about: u.meta("twitter.user.description").to_string(),
        age,
        gender: u.meta("facebook.user.gender").to_string(),
        location: first_non_empty(
            u.meta("facebook.user.locationname"),
            u.meta("twitter.user.location"),
        ),
        services,
    }
}

fn first_non_empty(preferred: &str, fallback: &str) -> String {
    if preferred.is_empty() {
        fallback.to_string()
    } else {
        preferred.to_string()
    }
}
