use dioxus::prelude::*;

#[component]
pub fn Home(on_open: EventHandler<i64>) -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut id_text = use_signal(|| "1".to_string());

    let open = move |_| {
        if let Ok(id) = id_text().trim().parse::<i64>() {
            on_open.call(id);
        }
    };

    rsx! {
        section { class: "page page-home",
            div { style: "display:none", "{_lang_marker}" }
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            div { class: "page-home__open",
                label { r#for: "analysis-id", {crate::t!("home-id-label")} }
                input {
                    id: "analysis-id",
                    r#type: "number",
                    min: "1",
                    value: "{id_text()}",
                    oninput: move |evt| id_text.set(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: open,
                    {crate::t!("home-open")}
                }
            }
        }
    }
}
