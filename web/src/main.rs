use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{provide_toasts, AppNavbar, ToastHost};
use ui::core::config::ApiConfig;
use ui::views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/analysis/:id")]
    Analysis { id: i64 },
}

// Embedded shared theme (ui/assets/theme/main.css); no separate web /assets needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Register localized navigation builder
    register_nav(NavBuilder { home: nav_home });

    // Process-wide notification surface
    let _toasts = provide_toasts();

    // Backend base path (documented default, env-overridable on native)
    use_context_provider(ApiConfig::from_env);

    // Global reactive language code signal; AppNavbar updates it via context.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change; the hidden
        // marker keeps an explicit reactive dependency on the signal.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> {}
        }

        ToastHost {}
    }
}

/// A web-specific shell around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        views::Home {
            on_open: move |id: i64| {
                nav.push(Route::Analysis { id });
            },
        }
    }
}

#[component]
fn Analysis(id: i64) -> Element {
    rsx! {
        views::Analysis { analysis_id: id }
    }
}
