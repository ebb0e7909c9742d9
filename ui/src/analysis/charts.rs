//! Bar-style charts for the analysis views.
//!
//! Rendering is plain markup: each bar is a `<span>` whose width is a
//! percentage of the largest value in the series. Good enough for
//! at-a-glance comparison without dragging in a canvas dependency.

use dioxus::prelude::*;
use serde::Deserialize;

use crate::api::{AnalysisDetail, CompetitorRow, CooccurrenceRow, SearchVolumeRow};
use crate::core::format::{format_count, format_percent, format_score};
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartBar {
    pub label: String,
    pub value: f64,
    pub display: String,
}

/// Width of a bar relative to the series maximum, in percent.
fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[component]
fn BarChart(title: String, bars: Vec<ChartBar>) -> Element {
    let max = bars.iter().map(|bar| bar.value).fold(0.0_f64, f64::max);
    let rows: Vec<(f64, ChartBar)> = bars
        .into_iter()
        .map(|bar| (bar_width(bar.value, max), bar))
        .collect();

    rsx! {
        div { class: "chart",
            h3 { class: "chart__title", "{title}" }
            ul { class: "chart__bars",
                for (idx, (width, bar)) in rows.iter().enumerate() {
                    li { key: "{idx}-{bar.label}", class: "chart__row",
                        span { class: "chart__label", "{bar.label}" }
                        span { class: "chart__track",
                            span {
                                class: "chart__bar",
                                style: "width: {width}%;",
                            }
                        }
                        span { class: "chart__value", "{bar.display}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn OverviewChart(detail: AnalysisDetail) -> Element {
    let bars = vec![
        ChartBar {
            label: t!("col-total-volume"),
            value: detail.total_search_volume as f64,
            display: format_count(detail.total_search_volume),
        },
        ChartBar {
            label: detail.seed_keyword.clone(),
            value: detail.seed_search_volume as f64,
            display: format!(
                "{} · {}",
                format_count(detail.seed_search_volume),
                format_percent(detail.seed_search_ratio)
            ),
        },
    ];

    rsx! {
        BarChart { title: t!("chart-overview-title"), bars }
    }
}

#[component]
pub(crate) fn CooccurrenceChart(rows: Vec<CooccurrenceRow>) -> Element {
    let bars = rows
        .iter()
        .map(|row| ChartBar {
            label: row.keyword.clone(),
            value: row.cooccurrence_count as f64,
            display: format_count(row.cooccurrence_count),
        })
        .collect::<Vec<_>>();

    rsx! {
        BarChart { title: t!("tab-cooccurrence"), bars }
    }
}

#[component]
pub(crate) fn VolumeChart(rows: Vec<SearchVolumeRow>) -> Element {
    let bars = rows
        .iter()
        .map(|row| ChartBar {
            label: row.mediator_keyword.clone(),
            value: row.cooccurrence_volume as f64,
            display: format_count(row.cooccurrence_volume),
        })
        .collect::<Vec<_>>();

    rsx! {
        BarChart { title: t!("tab-volume"), bars }
    }
}

#[component]
pub(crate) fn CompetitorChart(rows: Vec<CompetitorRow>) -> Element {
    let bars = rows
        .iter()
        .map(|row| ChartBar {
            label: row.competitor_keyword.clone(),
            value: row.weighted_competition_score,
            display: format_score(row.weighted_competition_score),
        })
        .collect::<Vec<_>>();

    rsx! {
        BarChart { title: t!("tab-competitors"), bars }
    }
}

/// One slice of a user-profile distribution, as much of it as this view
/// understands. The payload itself is backend-owned and opaque.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ProfileSlice {
    #[serde(alias = "profile_type", alias = "label")]
    name: String,
    #[serde(alias = "ratio", alias = "value")]
    percentage: f64,
}

/// Pick the slices this chart can plot; anything unreadable is skipped.
fn parse_profile_slices(slices: &[serde_json::Value]) -> Vec<ProfileSlice> {
    slices
        .iter()
        .filter_map(|value| serde_json::from_value(value.clone()).ok())
        .collect()
}

#[component]
pub(crate) fn UserProfilesChart(
    slices: Vec<serde_json::Value>,
    analysis_id: Option<i64>,
) -> Element {
    let parsed = parse_profile_slices(&slices);
    let bars = parsed
        .iter()
        .map(|slice| ChartBar {
            label: slice.name.clone(),
            value: slice.percentage,
            display: format_percent(slice.percentage),
        })
        .collect::<Vec<_>>();

    let title = match analysis_id {
        Some(id) => t!("chart-profiles-for", id = id),
        None => t!("chart-profiles-title"),
    };

    rsx! {
        BarChart { title, bars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn widths_scale_to_series_maximum() {
        assert_eq!(bar_width(50.0, 100.0), 50.0);
        assert_eq!(bar_width(100.0, 100.0), 100.0);
        assert_eq!(bar_width(0.0, 100.0), 0.0);
        // Degenerate series never divide by zero or overflow the track.
        assert_eq!(bar_width(10.0, 0.0), 0.0);
        assert_eq!(bar_width(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn unreadable_profile_slices_are_skipped() {
        let slices = vec![
            json!({"name": "runners", "percentage": 62.0}),
            json!({"unrelated": true}),
            json!({"profile_type": "walkers", "ratio": 38.0}),
        ];
        let parsed = parse_profile_slices(&slices);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "runners");
        assert_eq!(parsed[1].name, "walkers");
        assert_eq!(parsed[1].percentage, 38.0);
    }
}
