//! Shared UI crate for Keyscope. Cross-platform views, the analysis
//! results adapter, and the backend API client live here.

pub mod analysis;
pub mod api;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Process-wide toast notifications (components/toast.rs)
    pub mod toast;
    pub use toast::provide_toasts;
    pub use toast::use_toasts;
    pub use toast::ToastHost;
}
