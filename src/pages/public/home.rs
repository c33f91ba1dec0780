//! Public landing page

use dioxus::prelude::*;

use crate::components::{SiteFooter, SiteHeader};

/// Hero slides shown on the landing page.
const SLIDES: [(&str, &str); 2] = [
    (
        "Smile Care Dental Clinic",
        "Chăm sóc nụ cười của bạn với đội ngũ bác sĩ tận tâm",
    ),
    (
        "Smile Dental",
        "Công nghệ hiện đại, trải nghiệm điều trị nhẹ nhàng",
    ),
];

#[cfg(feature = "web")]
const SLIDE_INTERVAL_MS: u32 = 3_500;

/// Landing page
#[component]
pub fn Home() -> Element {
    let mut current = use_signal(|| 0usize);

    // Rotate the hero every few seconds
    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
            current.set((current() + 1) % SLIDES.len());
        }
    });

    rsx! {
        div { class: "homepage",
            SiteHeader {}
            main { class: "homepage__content",
                div { class: "hero-carousel",
                    for (index, (title, caption)) in SLIDES.iter().enumerate() {
                        div {
                            class: "hero-carousel__slide",
                            class: if index == current() { "hero-carousel__slide--active" },
                            div { class: "hero-carousel__copy",
                                h1 { "{title}" }
                                p { "{caption}" }
                            }
                        }
                    }
                    div { class: "hero-carousel__dots",
                        for index in 0..SLIDES.len() {
                            button {
                                class: "hero-carousel__dot",
                                class: if index == current() { "hero-carousel__dot--active" },
                                aria_label: format!("Chuyển đến slide {}", index + 1),
                                onclick: move |_| current.set(index),
                            }
                        }
                    }
                }
            }
            SiteFooter {}
        }
    }
}
