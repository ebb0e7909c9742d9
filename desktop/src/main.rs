#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{provide_toasts, AppNavbar, ToastHost};
use ui::core::config::ApiConfig;
use ui::views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/analysis/:id")]
    Analysis { id: i64 },
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Keyscope – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    register_nav(NavBuilder { home: nav_home });

    let _toasts = provide_toasts();

    use_context_provider(ApiConfig::from_env);

    // Provide global reactive language code signal; the shared AppNavbar
    // updates it via context on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
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

#[component]
fn DesktopShell() -> Element {
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
