//! Loading and empty-state blocks

use dioxus::prelude::*;

/// Full-area loading block for list screens
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "loading__dots",
                div { class: "loading__dot" }
                div { class: "loading__dot loading__dot--second" }
                div { class: "loading__dot loading__dot--third" }
            }
            p { class: "loading__text", "Đang tải..." }
        }
    }
}

/// Empty-table placeholder
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state",
            p { class: "empty-state__text", "{message}" }
        }
    }
}
