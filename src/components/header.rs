//! Public site header

use dioxus::prelude::*;

use crate::auth::{use_auth, use_session};
use crate::components::use_toast;
use crate::routes::Route;

#[component]
pub fn SiteHeader() -> Element {
    let auth = use_auth();
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator();

    let signed_in = auth.is_authenticated();
    let can_manage = auth.can_manage();
    let user_name = auth.display_name();

    let handle_logout = move |_| {
        auth.log_out(&session);
        navigator.push(Route::Home {});
    };

    rsx! {
        header { class: "site-header",
            div { class: "site-header__container",
                div { class: "site-header__brand",
                    Link { to: Route::Home {}, class: "site-header__logo", "Smile Dental" }
                }
                nav { class: "site-header__nav",
                    Link {
                        to: Route::Home {},
                        class: "site-header__link site-header__link--active",
                        "Trang chủ"
                    }
                    a { class: "site-header__link", href: "#", "Giới thiệu" }
                    a { class: "site-header__link", href: "#", "Bảng giá" }
                    a { class: "site-header__link", href: "#", "Dịch vụ" }
                    a { class: "site-header__link", href: "#", "Kiến thức nha khoa" }
                    a { class: "site-header__link", href: "#", "Liên hệ" }
                }
                div { class: "site-header__actions",
                    if signed_in {
                        span { class: "site-header__user", "{user_name}" }
                        if can_manage {
                            Link {
                                to: Route::AdminDashboard {},
                                class: "btn btn--secondary",
                                "Quản trị"
                            }
                        }
                        button { class: "btn btn--primary", onclick: handle_logout, "Đăng xuất" }
                    } else {
                        button {
                            class: "btn btn--primary",
                            onclick: move |_| {
                                navigator.push(Route::Register {});
                            },
                            "Đăng ký"
                        }
                        button {
                            class: "btn btn--secondary",
                            onclick: move |_| {
                                navigator.push(Route::Login {});
                            },
                            "Đăng nhập"
                        }
                    }
                    button {
                        class: "btn btn--outline",
                        onclick: move |_| toast.info("Tính năng đặt lịch sẽ sớm ra mắt"),
                        span { class: "btn__icon", aria_hidden: "true", "📅" }
                        "Đặt lịch khám"
                    }
                }
            }
        }
    }
}
