// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UpstreamActivity → Activity.

use crate::models::Activity;
use crate::time_utils::from_epoch_millis;
use crate::upstream::UpstreamActivity;

pub fn normalize_activity(a: &UpstreamActivity) -> Activity {
    Activity {
        id: a.id.clone(),
        verb: a.verb.clone(),
        kind: a.object.kind.clone(),
        service: a.context.service.clone(),
        timestamp: from_epoch_millis(a.context.date),
        url: a.object.url.clone(),
        name: a.object.name.clone(),
        description: a.object.description.clone(),
    }
}
