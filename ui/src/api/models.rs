//! Payload shapes returned by the backend, one per view kind.
//!
//! These are decoded eagerly at the load boundary; nothing downstream
//! ever sees raw JSON except the user-profile rows, which stay opaque
//! and are handed to the profile chart to pick apart.

use serde::Deserialize;

use super::endpoint::ViewKind;
use super::error::LoadError;

/// Summary record for one analysis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisDetail {
    pub seed_keyword: String,
    pub total_search_volume: i64,
    pub seed_search_volume: i64,
    pub seed_search_ratio: f64,
    #[serde(default)]
    pub user_profiles: Option<Vec<serde_json::Value>>,
}

impl AnalysisDetail {
    /// Whether the optional profile sequence warrants its own chart.
    pub fn has_profiles(&self) -> bool {
        self.user_profiles
            .as_ref()
            .map(|profiles| !profiles.is_empty())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CooccurrenceRow {
    pub id: i64,
    pub keyword: String,
    pub cooccurrence_count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchVolumeRow {
    pub id: i64,
    pub mediator_keyword: String,
    pub cooccurrence_volume: i64,
    pub mediator_total_volume: i64,
    pub cooccurrence_ratio: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompetitorRow {
    pub id: i64,
    pub competitor_keyword: String,
    /// Already joined into display text by the backend.
    pub mediator_keywords: String,
    pub cooccurrence_volume: i64,
    pub base_competition_score: f64,
    pub weighted_competition_score: f64,
}

/// One decoded response body, tagged with the shape it was decoded as.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisPayload {
    Overview(AnalysisDetail),
    Cooccurrence(Vec<CooccurrenceRow>),
    Volume(Vec<SearchVolumeRow>),
    Competitors(Vec<CompetitorRow>),
    UserProfiles(Vec<serde_json::Value>),
}

impl AnalysisPayload {
    /// Decode `body` as the shape implied by `kind`. A mismatch between
    /// what the backend sent and what the view expects comes back as a
    /// [`LoadError::Decode`] naming the view.
    pub fn decode(kind: ViewKind, body: &str) -> Result<Self, LoadError> {
        let decode_err = |err: serde_json::Error| LoadError::Decode {
            kind: kind.tag(),
            detail: err.to_string(),
        };

        match kind {
            ViewKind::Overview => serde_json::from_str(body)
                .map(AnalysisPayload::Overview)
                .map_err(decode_err),
            ViewKind::Cooccurrence => serde_json::from_str(body)
                .map(AnalysisPayload::Cooccurrence)
                .map_err(decode_err),
            ViewKind::Volume => serde_json::from_str(body)
                .map(AnalysisPayload::Volume)
                .map_err(decode_err),
            ViewKind::Competitors => serde_json::from_str(body)
                .map(AnalysisPayload::Competitors)
                .map_err(decode_err),
            ViewKind::UserProfiles => serde_json::from_str(body)
                .map(AnalysisPayload::UserProfiles)
                .map_err(decode_err),
        }
    }

    /// The kind this payload was decoded for.
    pub fn kind(&self) -> ViewKind {
        match self {
            AnalysisPayload::Overview(_) => ViewKind::Overview,
            AnalysisPayload::Cooccurrence(_) => ViewKind::Cooccurrence,
            AnalysisPayload::Volume(_) => ViewKind::Volume,
            AnalysisPayload::Competitors(_) => ViewKind::Competitors,
            AnalysisPayload::UserProfiles(_) => ViewKind::UserProfiles,
        }
    }
}
