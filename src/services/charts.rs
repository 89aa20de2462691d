// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Count-based chart data derived from a user's activities.

use crate::models::{Activity, Chart, ChartColumn, ChartRow};
use crate::time_utils::day_key;
use std::collections::BTreeMap;

pub const DAILY_CHART_TITLE: &str = "Activities";
pub const VERB_CHART_TITLE: &str = "Actions";

/// The two charts shown on a user's dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCharts {
    /// Activity count per calendar day
    pub daily: Chart,
    /// Activity count per verb
    pub verbs: Chart,
}

impl ActivityCharts {
    /// Charts in display order.
    pub fn into_vec(self) -> Vec<Chart> {
        vec![self.daily, self.verbs]
    }
}

/// Group activities by day and by verb.
///
/// Rows come out sorted ascending by label. The day is the UTC calendar date
/// of each timestamp, since normalization produces UTC timestamps.
pub fn build_activity_charts(activities: &[Activity]) -> ActivityCharts {
    let mut by_day: BTreeMap<String, u32> = BTreeMap::new();
    let mut by_verb: BTreeMap<String, u32> = BTreeMap::new();

    for activity in activities {
        *by_day.entry(day_key(&activity.timestamp)).or_insert(0) += 1;
        *by_verb.entry(activity.verb.clone()).or_insert(0) += 1;
    }

    ActivityCharts {
        daily: Chart {
            title: DAILY_CHART_TITLE.to_string(),
            columns: vec![
                ChartColumn::new("Day", "date"),
                ChartColumn::new("Count", "number"),
            ],
            rows: into_rows(by_day),
        },
        verbs: Chart {
            title: VERB_CHART_TITLE.to_string(),
            columns: vec![
                ChartColumn::new("Action", "string"),
                ChartColumn::new("Count", "number"),
            ],
            rows: into_rows(by_verb),
        },
    }
}

// BTreeMap<String, _> iterates in byte-wise key order.
fn into_rows(counts: BTreeMap<String, u32>) -> Vec<ChartRow> {
    counts.into_iter().collect()
}
