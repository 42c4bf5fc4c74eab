use dioxus::prelude::*;

use ui::views::TimelinePage;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; the locale switcher updates it and the page
    // re-renders its copy.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "A Timeline of Anime" }
        document::Style { "{ui::THEME_CSS}" }

        TimelinePage {}
    }
}
