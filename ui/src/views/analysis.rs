use dioxus::prelude::*;

use crate::analysis::AnalysisResultsView;
use crate::api::ViewKind;
use crate::t;

fn tab_label(kind: ViewKind) -> String {
    match kind {
        ViewKind::Overview => t!("tab-overview"),
        ViewKind::Cooccurrence => t!("tab-cooccurrence"),
        ViewKind::Volume => t!("tab-volume"),
        ViewKind::Competitors => t!("tab-competitors"),
        ViewKind::UserProfiles => t!("tab-user-profiles"),
    }
}

/// Analysis page: view-kind tabs, a refresh control, and the results
/// adapter underneath.
#[component]
pub fn Analysis(analysis_id: ReadOnlySignal<i64>) -> Element {
    let mut kind = use_signal(|| ViewKind::Overview);
    let mut refresh = use_signal(|| 0u64);

    rsx! {
        section { class: "page page-analysis",
            div { class: "analysis__header",
                h1 { {t!("analysis-title", id = analysis_id())} }
                button {
                    r#type: "button",
                    class: "button button--ghost analysis__refresh",
                    onclick: move |_| {
                        let next = refresh() + 1;
                        refresh.set(next);
                    },
                    {t!("analysis-refresh")}
                }
            }

            div { class: "analysis-tabs",
                for view in ViewKind::ALL {
                    button {
                        key: "{view.tag()}",
                        r#type: "button",
                        class: if kind() == view { "analysis-tab analysis-tab--active" } else { "analysis-tab" },
                        onclick: move |_| kind.set(view),
                        {tab_label(view)}
                    }
                }
            }

            AnalysisResultsView {
                analysis_id: analysis_id(),
                kind: kind(),
                refresh: refresh(),
            }
        }
    }
}
