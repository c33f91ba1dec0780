//! Catch-all page for unknown routes

use dioxus::prelude::*;

use crate::components::{SiteFooter, SiteHeader};
use crate::routes::Route;

/// 404 page
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(%path, "unknown route");

    rsx! {
        SiteHeader {}
        div { class: "not-found",
            h1 { class: "not-found__title", "404" }
            p { class: "not-found__message", "Trang bạn tìm không tồn tại." }
            Link { to: Route::Home {}, class: "btn btn--primary", "Về trang chủ" }
        }
        SiteFooter {}
    }
}
