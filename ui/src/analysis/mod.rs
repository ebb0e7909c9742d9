//! The analysis results adapter: fetch one view's dataset, keep it as
//! transient component state, and dispatch to the matching chart/table
//! renderer.

mod charts;
mod tables;

use dioxus::prelude::*;

use crate::api::{self, AnalysisPayload, ViewKind};
use crate::components::toast::use_toasts;
use crate::core::config::ApiConfig;
use crate::t;

use charts::{CompetitorChart, CooccurrenceChart, OverviewChart, UserProfilesChart, VolumeChart};
use tables::ResultsTable;

/// Whether a fetch started at `started` has been superseded by a newer
/// trigger. Responses that lose this check are dropped, so a slow
/// earlier request can never overwrite state for newer inputs.
fn superseded(current: u64, started: u64) -> bool {
    current != started
}

/// Fetches and renders one analysis view.
///
/// Re-fetches whenever `analysis_id`, `kind`, or `refresh` changes;
/// `refresh` carries no meaning beyond forcing a reload of the same
/// id/kind pair. On failure the previous payload (or the loading
/// placeholder) stays on screen and one toast is emitted.
#[component]
pub fn AnalysisResultsView(
    analysis_id: ReadOnlySignal<i64>,
    kind: ReadOnlySignal<ViewKind>,
    refresh: ReadOnlySignal<u64>,
) -> Element {
    let config = try_use_context::<ApiConfig>().unwrap_or_default();
    let mut toasts = use_toasts();
    let mut payload = use_signal(|| Option::<AnalysisPayload>::None);
    let mut request_seq = use_signal(|| 0u64);

    use_effect(move || {
        let id = analysis_id();
        let view = kind();
        let _tick = refresh();

        // Claim the next request generation. `write` does not subscribe,
        // so bumping the counter here cannot re-trigger this effect.
        let seq = {
            let mut seq = request_seq.write();
            *seq += 1;
            *seq
        };

        let config = config.clone();
        spawn(async move {
            let result = api::fetch_view(&config, id, view).await;

            if superseded(*request_seq.peek(), seq) {
                #[cfg(debug_assertions)]
                println!("[fetch] dropped stale response view={} seq={seq}", view.tag());
                return;
            }

            match result {
                Ok(data) => payload.set(Some(data)),
                // Previous payload stays untouched; the view keeps
                // showing whatever it showed before this attempt.
                Err(err) => toasts.error(t!("toast-load-failed"), err.to_string()),
            }
        });
    });

    let content = match payload() {
        Some(data) => render_payload(analysis_id(), kind(), &data),
        None => loading_placeholder(),
    };

    rsx! {
        div { class: "results-card analysis-results",
            {content}
        }
    }
}

fn loading_placeholder() -> Element {
    rsx! {
        p { class: "results-card__placeholder", {t!("analysis-loading")} }
    }
}

/// Exhaustive dispatch over (requested view, stored payload). The
/// mismatch arm covers the window between a kind change and its fetch
/// completing, when the stored payload still has the previous shape.
fn render_payload(analysis_id: i64, kind: ViewKind, payload: &AnalysisPayload) -> Element {
    match (kind, payload) {
        (ViewKind::Overview, AnalysisPayload::Overview(detail)) => rsx! {
            OverviewChart { detail: detail.clone() }
            if detail.has_profiles() {
                div { class: "analysis-results__profiles",
                    UserProfilesChart {
                        slices: detail.user_profiles.clone().unwrap_or_default(),
                    }
                }
            }
            ResultsTable {
                headers: tables::overview_headers(),
                rows: vec![(0, tables::overview_cells(detail).to_vec())],
            }
        },
        (ViewKind::Cooccurrence, AnalysisPayload::Cooccurrence(rows)) => rsx! {
            CooccurrenceChart { rows: rows.clone() }
            ResultsTable {
                headers: tables::cooccurrence_headers(),
                rows: rows
                    .iter()
                    .map(|row| (row.id, tables::cooccurrence_cells(row).to_vec()))
                    .collect::<Vec<_>>(),
            }
        },
        (ViewKind::Volume, AnalysisPayload::Volume(rows)) => rsx! {
            VolumeChart { rows: rows.clone() }
            ResultsTable {
                headers: tables::volume_headers(),
                rows: rows
                    .iter()
                    .map(|row| (row.id, tables::volume_cells(row).to_vec()))
                    .collect::<Vec<_>>(),
            }
        },
        (ViewKind::Competitors, AnalysisPayload::Competitors(rows)) => rsx! {
            CompetitorChart { rows: rows.clone() }
            ResultsTable {
                headers: tables::competitor_headers(),
                text_columns: 2,
                rows: rows
                    .iter()
                    .map(|row| (row.id, tables::competitor_cells(row).to_vec()))
                    .collect::<Vec<_>>(),
            }
        },
        (ViewKind::UserProfiles, AnalysisPayload::UserProfiles(slices)) => rsx! {
            UserProfilesChart {
                slices: slices.clone(),
                analysis_id: Some(analysis_id),
            }
        },
        _ => loading_placeholder(),
    }
}
