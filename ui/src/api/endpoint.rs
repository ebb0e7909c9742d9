use crate::core::config::ApiConfig;

/// The five result views the backend can serve for one analysis.
///
/// Each kind maps to exactly one resource path and one payload shape;
/// dispatch on it is always an exhaustive match, never a default arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Overview,
    Cooccurrence,
    Volume,
    Competitors,
    UserProfiles,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Overview,
        ViewKind::Cooccurrence,
        ViewKind::Volume,
        ViewKind::Competitors,
        ViewKind::UserProfiles,
    ];

    /// Resource path under the service base, for one analysis id.
    pub fn resource_path(self, analysis_id: i64) -> String {
        match self {
            ViewKind::Overview => format!("analysis/{analysis_id}"),
            ViewKind::Cooccurrence => format!("cooccurrence/{analysis_id}"),
            ViewKind::Volume => format!("search-volume/{analysis_id}"),
            ViewKind::Competitors => format!("competitors/{analysis_id}"),
            ViewKind::UserProfiles => {
                format!("analysis/{analysis_id}/user-profiles/distribution")
            }
        }
    }

    /// Stable tag used in log lines and decode errors.
    pub fn tag(self) -> &'static str {
        match self {
            ViewKind::Overview => "overview",
            ViewKind::Cooccurrence => "cooccurrence",
            ViewKind::Volume => "volume",
            ViewKind::Competitors => "competitors",
            ViewKind::UserProfiles => "user-profiles",
        }
    }
}

/// Full request URL for `(config, analysis id, view kind)`. Pure.
pub(crate) fn resolve_url(config: &ApiConfig, analysis_id: i64, kind: ViewKind) -> String {
    format!("{}{}", config.base_url, kind.resource_path(analysis_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_paths_match_backend_routes() {
        assert_eq!(ViewKind::Overview.resource_path(7), "analysis/7");
        assert_eq!(ViewKind::Cooccurrence.resource_path(7), "cooccurrence/7");
        assert_eq!(ViewKind::Volume.resource_path(7), "search-volume/7");
        assert_eq!(ViewKind::Competitors.resource_path(7), "competitors/7");
        assert_eq!(
            ViewKind::UserProfiles.resource_path(7),
            "analysis/7/user-profiles/distribution"
        );
    }

    #[test]
    fn urls_append_to_configured_base() {
        let config = ApiConfig::default();
        assert_eq!(
            resolve_url(&config, 42, ViewKind::Volume),
            "http://localhost:8000/api/v1/keyword/search-volume/42"
        );

        let custom = ApiConfig::new("https://insights.example.com/kw");
        assert_eq!(
            resolve_url(&custom, 1, ViewKind::Overview),
            "https://insights.example.com/kw/analysis/1"
        );
    }

    #[test]
    fn every_kind_resolves_somewhere_distinct() {
        let config = ApiConfig::default();
        let mut urls: Vec<String> = ViewKind::ALL
            .iter()
            .map(|kind| resolve_url(&config, 9, *kind))
            .collect();
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), ViewKind::ALL.len());
    }
}
