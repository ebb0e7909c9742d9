//! Client for the keyword-analysis backend: view kinds, resource path
//! resolution, payload shapes, and the single-GET fetch entry point.

mod client;
mod endpoint;
mod error;
mod models;

pub use client::fetch_view;
pub use endpoint::ViewKind;
pub use error::LoadError;
pub use models::{
    AnalysisDetail, AnalysisPayload, CompetitorRow, CooccurrenceRow, SearchVolumeRow,
};
