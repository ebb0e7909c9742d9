use thiserror::Error;

/// Everything that can go wrong while loading one view.
///
/// The three cases are surfaced identically to the user (one toast), but
/// keeping them distinct makes shape mismatches reportable instead of a
/// silent mis-cast deeper in rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("unexpected {kind} payload: {detail}")]
    Decode { kind: &'static str, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_enough_for_a_toast() {
        assert_eq!(
            LoadError::Status(502).to_string(),
            "server returned status 502"
        );
        let err = LoadError::Decode {
            kind: "overview",
            detail: "missing field `seed_keyword`".into(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected overview payload: missing field `seed_keyword`"
        );
    }
}
