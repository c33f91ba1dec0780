//! Public site footer

use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__container",
                div { class: "site-footer__column",
                    h4 { class: "site-footer__heading", "NHA KHOA SMILE DENTAL" }
                    p { class: "site-footer__text",
                        "Địa chỉ: Nguyễn Văn Bảo, Gò Vấp, thành phố Hồ Chí Minh"
                    }
                    p { class: "site-footer__text", "Email: smiledental@gmail.com" }
                    p { class: "site-footer__text",
                        "GIỜ LÀM VIỆC: 8:30 - 18:30 tất cả các ngày trong tuần"
                    }
                }
                div { class: "site-footer__column",
                    h4 { class: "site-footer__heading", "GIỚI THIỆU" }
                    ul { class: "site-footer__list",
                        li { class: "site-footer__item",
                            a { class: "site-footer__link", href: "#", "Về Chúng Tôi" }
                        }
                        li { class: "site-footer__item",
                            a { class: "site-footer__link", href: "#", "Bảng Giá Dịch Vụ" }
                        }
                        li { class: "site-footer__item",
                            a { class: "site-footer__link", href: "#", "Tin Tức Sự Kiện" }
                        }
                        li { class: "site-footer__item",
                            a { class: "site-footer__link", href: "#", "Kiến Thức Nha Khoa" }
                        }
                        li { class: "site-footer__item",
                            a { class: "site-footer__link", href: "#", "Chính sách bảo mật" }
                        }
                    }
                }
                div { class: "site-footer__column",
                    h4 { class: "site-footer__heading", "LIÊN HỆ" }
                    p { class: "site-footer__text", "HOTLINE: 190000010" }
                }
            }
        }
    }
}
