//! Process-wide toast notifications.
//!
//! The launcher shell calls [`provide_toasts`] once at the root and
//! renders [`ToastHost`]; any component can then push a notification via
//! [`use_toasts`]. Toasts auto-dismiss after a few seconds.

use dioxus::prelude::*;

use crate::core::platform;

const DISMISS_AFTER_MS: u64 = 6_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Handle to the shared toast list. Cheap to copy.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    /// Push a failure notification. An empty body falls back to the
    /// localized "unknown error" message.
    pub fn error(&mut self, title: String, body: String) {
        let body = if body.trim().is_empty() {
            crate::t!("toast-unknown-error")
        } else {
            body
        };

        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        self.items.write().push(Toast { id, title, body });

        let mut items = self.items;
        spawn(async move {
            platform::sleep_ms(DISMISS_AFTER_MS).await;
            // Signal may be gone if the shell unmounted meanwhile.
            if let Ok(mut items) = items.try_write() {
                items.retain(|toast| toast.id != id);
            }
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|toast| toast.id != id);
    }
}

/// Install the toast context at the shell root.
pub fn provide_toasts() -> Toasts {
    use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

/// Access the toast handle from any descendant component.
pub fn use_toasts() -> Toasts {
    use_context()
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let items = (toasts.items)();

    rsx! {
        div { class: "toast-host",
            for toast in items.into_iter() {
                div { key: "{toast.id}", class: "toast toast--error",
                    div { class: "toast__text",
                        span { class: "toast__title", "{toast.title}" }
                        span { class: "toast__body", "{toast.body}" }
                    }
                    button {
                        r#type: "button",
                        class: "toast__dismiss",
                        onclick: {
                            let mut toasts = toasts;
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
