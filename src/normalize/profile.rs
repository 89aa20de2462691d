// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UpstreamProfile → UserProfile.

use crate::models::{Topic, TopicKind, UserProfile};
use crate::time_utils::from_epoch_millis;
use crate::upstream::{UpstreamCategory, UpstreamInterest, UpstreamProfile};

/// Normalize a profile: interests first, then categories, each in upstream order.
pub fn normalize_profile(p: &UpstreamProfile) -> UserProfile {
    let topics = p
        .interests
        .iter()
        .map(interest_topic)
        .chain(p.categories.iter().map(category_topic))
        .collect();

    UserProfile {
        updated: from_epoch_millis(p.last_updated),
        topics,
    }
}

fn interest_topic(interest: &UpstreamInterest) -> Topic {
    Topic {
        kind: TopicKind::Topic,
        resource: interest.resource.clone(),
        label: interest.label.clone(),
        weight: interest.weight,
        urls: Vec::new(),
        activities: interest.activities.clone(),
    }
}

fn category_topic(cat: &UpstreamCategory) -> Topic {
    Topic {
        kind: TopicKind::Interest,
        resource: cat.resource.clone(),
        label: cat.label.clone(),
        // Only weights sent as floats count.
        weight: cat.weight.as_float().map(|w| w as f32).unwrap_or(0.0),
        urls: cat.urls.clone(),
        activities: Vec::new(),
    }
}
