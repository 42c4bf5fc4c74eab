use dioxus::prelude::*;

use crate::t;

#[component]
pub fn MobileNotice() -> Element {
    rsx! {
        h2 { class: "mobile-notice", {t!("mobile-notice")} }
    }
}
