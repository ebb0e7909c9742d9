//! Table rendering for the analysis views.
//!
//! Cell text is produced by small pure helpers so the exact formatted
//! output stays testable without mounting a component.

use dioxus::prelude::*;

use crate::api::{AnalysisDetail, CompetitorRow, CooccurrenceRow, SearchVolumeRow};
use crate::core::format::{format_count, format_percent, format_score};
use crate::t;

/// Shared table: first `text_columns` columns read left-aligned, the
/// rest are numeric. Row keys keep Dioxus diffing stable across
/// re-fetches of the same dataset.
#[component]
pub(crate) fn ResultsTable(
    headers: Vec<String>,
    rows: Vec<(i64, Vec<String>)>,
    #[props(default = 1)] text_columns: usize,
) -> Element {
    rsx! {
        table { class: "results-table",
            thead {
                tr {
                    for (idx, header) in headers.iter().enumerate() {
                        th {
                            class: if idx < text_columns { "" } else { "num" },
                            "{header}"
                        }
                    }
                }
            }
            tbody {
                for (row_key, cells) in rows.iter() {
                    tr { key: "{row_key}",
                        for (idx, cell) in cells.iter().enumerate() {
                            td {
                                class: if idx < text_columns { "" } else { "num" },
                                "{cell}"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub(crate) fn overview_headers() -> Vec<String> {
    vec![
        t!("col-seed-keyword"),
        t!("col-total-volume"),
        t!("col-seed-volume"),
        t!("col-seed-ratio"),
    ]
}

pub(crate) fn overview_cells(detail: &AnalysisDetail) -> [String; 4] {
    [
        detail.seed_keyword.clone(),
        format_count(detail.total_search_volume),
        format_count(detail.seed_search_volume),
        format_percent(detail.seed_search_ratio),
    ]
}

pub(crate) fn cooccurrence_headers() -> Vec<String> {
    vec![t!("col-keyword"), t!("col-count")]
}

pub(crate) fn cooccurrence_cells(row: &CooccurrenceRow) -> [String; 2] {
    [row.keyword.clone(), format_count(row.cooccurrence_count)]
}

pub(crate) fn volume_headers() -> Vec<String> {
    vec![
        t!("col-mediator"),
        t!("col-cooccurrence-volume"),
        t!("col-mediator-volume"),
        t!("col-cooccurrence-ratio"),
        t!("col-weight"),
    ]
}

pub(crate) fn volume_cells(row: &SearchVolumeRow) -> [String; 5] {
    [
        row.mediator_keyword.clone(),
        format_count(row.cooccurrence_volume),
        format_count(row.mediator_total_volume),
        format_percent(row.cooccurrence_ratio),
        format_score(row.weight),
    ]
}

pub(crate) fn competitor_headers() -> Vec<String> {
    vec![
        t!("col-competitor"),
        t!("col-mediators"),
        t!("col-cooccurrence-volume"),
        t!("col-base-score"),
        t!("col-weighted-score"),
    ]
}

pub(crate) fn competitor_cells(row: &CompetitorRow) -> [String; 5] {
    [
        row.competitor_keyword.clone(),
        row.mediator_keywords.clone(),
        format_count(row.cooccurrence_volume),
        format_score(row.base_competition_score),
        format_score(row.weighted_competition_score),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_detail() -> AnalysisDetail {
        AnalysisDetail {
            seed_keyword: "shoes".into(),
            total_search_volume: 120_000,
            seed_search_volume: 30_000,
            seed_search_ratio: 25.0,
            user_profiles: None,
        }
    }

    #[test]
    fn overview_row_formats_volumes_and_ratio() {
        let cells = overview_cells(&sample_detail());
        assert_eq!(cells, ["shoes", "120,000", "30,000", "25.00%"]);
    }

    #[test]
    fn cooccurrence_row_formats_count() {
        let row = CooccurrenceRow {
            id: 1,
            keyword: "running shoes".into(),
            cooccurrence_count: 4200,
        };
        assert_eq!(cooccurrence_cells(&row), ["running shoes", "4,200"]);
    }

    #[test]
    fn volume_row_formats_all_five_columns() {
        let row = SearchVolumeRow {
            id: 3,
            mediator_keyword: "trail".into(),
            cooccurrence_volume: 8_400,
            mediator_total_volume: 52_000,
            cooccurrence_ratio: 16.5,
            weight: 0.75,
        };
        assert_eq!(
            volume_cells(&row),
            ["trail", "8,400", "52,000", "16.50%", "0.75"]
        );
    }

    #[test]
    fn competitor_row_keeps_prejoined_mediators_verbatim() {
        let row = CompetitorRow {
            id: 9,
            competitor_keyword: "sneakers".into(),
            mediator_keywords: "trail, marathon".into(),
            cooccurrence_volume: 1_000,
            base_competition_score: 3.5,
            weighted_competition_score: 4.25,
        };
        assert_eq!(
            competitor_cells(&row),
            ["sneakers", "trail, marathon", "1,000", "3.50", "4.25"]
        );
    }

    #[test]
    fn rows_are_stable_across_repeat_formatting() {
        let detail = sample_detail();
        assert_eq!(overview_cells(&detail), overview_cells(&detail));
    }
}
