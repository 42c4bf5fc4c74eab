use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Language picker shown above the chart.
///
/// Platforms provide a `Signal<String>` language code through context; the
/// picker updates it so every view keyed on it re-renders with fresh strings.
/// Without that context the picker still switches the loader, and its own
/// local state keeps the select in sync.
#[component]
pub fn LocaleSwitcher() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    if langs().len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::info!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(lang = %val, "couldn't switch language: {err}"),
        }
    };

    rsx! {
        div { class: "locale-switcher",
            label { class: "visually-hidden", r#for: "locale-select", {t!("locale-label")} }
            select {
                id: "locale-select",
                value: "{current_lang()}",
                oninput: on_change,
                for code in langs() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
