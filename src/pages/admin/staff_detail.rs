//! Staff detail screen

use dioxus::prelude::*;

use crate::api::{staff as staff_api, use_api};
use crate::components::{use_toast, LoadingSpinner};
use crate::routes::Route;
use crate::types::{
    format_display_date, format_phone, gender_label, role_label, staff_kind_label,
};

/// Read-only staff profile with a status toggle
#[component]
pub fn AdminStaffDetail(id: String) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut staff = use_resource({
        let api = api.clone();
        let id = id.clone();
        move || {
            let api = api.clone();
            let id = id.clone();
            async move { staff_api::get_by_id(&api.core, &id).await }
        }
    });

    rsx! {
        div { class: "page",
            match &*staff.read() {
                Some(Ok(detail)) => {
                    let user = &detail.user;
                    let user_id = user.id.clone().unwrap_or_default();
                    let name = user.display_name();
                    let initial = name
                        .chars()
                        .next()
                        .map(|first| first.to_uppercase().to_string())
                        .unwrap_or_else(|| "?".to_string());
                    let email = user.email.clone().unwrap_or_default();
                    let phone = user
                        .phone
                        .as_deref()
                        .map(format_phone)
                        .unwrap_or_else(|| "N/A".to_string());
                    let role = role_label(&user.role_key()).to_string();
                    let kind = staff_kind_label(user.kind.as_deref().unwrap_or("")).to_string();
                    let gender = gender_label(user.gender.as_deref().unwrap_or("")).to_string();
                    let birth_date = user
                        .date_of_birth
                        .as_deref()
                        .and_then(format_display_date)
                        .unwrap_or_else(|| "N/A".to_string());
                    let created = user
                        .created_at
                        .as_deref()
                        .and_then(format_display_date)
                        .unwrap_or_else(|| "N/A".to_string());
                    let active = user.is_active == Some(true);
                    let (status_class, status_label) = if active {
                        ("tag tag--success", "Hoạt động")
                    } else {
                        ("tag tag--muted", "Không hoạt động")
                    };
                    let toggle_label = if active { "Tạm ngưng" } else { "Kích hoạt" };

                    let handle_toggle = {
                        let api = api.clone();
                        let user_id = user_id.clone();
                        move |_| {
                            let api = api.clone();
                            let user_id = user_id.clone();
                            spawn(async move {
                                match staff_api::toggle_status(&api.core, &user_id).await {
                                    Ok(_) => {
                                        toast.success("Cập nhật trạng thái thành công!");
                                        staff.restart();
                                    }
                                    Err(err) => toast.error(
                                        err.message_or("Có lỗi xảy ra khi cập nhật trạng thái!"),
                                    ),
                                }
                            });
                        }
                    };

                    rsx! {
                        div { class: "card",
                            div { class: "page__toolbar",
                                div { class: "page__toolbar-group",
                                    Link { to: Route::AdminStaff {}, class: "btn btn--ghost", "Quay lại" }
                                    h3 { class: "page__title", "Chi tiết nhân viên" }
                                }
                                div { class: "page__toolbar-group",
                                    button { class: "btn btn--outline", onclick: handle_toggle, "{toggle_label}" }
                                    Link {
                                        to: Route::AdminStaffEdit { id: user_id.clone() },
                                        class: "btn btn--primary",
                                        "Chỉnh sửa"
                                    }
                                }
                            }
                            div { class: "detail",
                                div { class: "detail__profile",
                                    span { class: "detail__avatar", "{initial}" }
                                    h4 { class: "detail__name", "{name}" }
                                    span { class: "detail__email", "{email}" }
                                }
                                div { class: "detail__info",
                                    h4 { class: "detail__heading", "Thông tin chi tiết" }
                                    div { class: "detail__grid",
                                        div { class: "detail__item",
                                            span { class: "detail__label", "Họ và tên" }
                                            span { class: "detail__value", "{name}" }
                                        }
                                        div { class: "detail__item",
                                            span { class: "detail__label", "Email" }
                                            span { class: "detail__value", "{email}" }
                                        }
                                        div { class: "detail__item",
                                            span { class: "detail__label", "Số điện thoại" }
                                            span { class: "detail__value", "{phone}" }
                                        }
                                        div { class: "detail__item",
                                            span { class: "detail__label", "Vai trò" }
                                            span { class: "tag tag--info", "{role}" }
                                        }
                                        div { class: "detail__item",
                                            span { class: "detail__label", "Loại" }
                                            span { class: "tag tag--info", "{kind}" }
                                        }
                                        div { class: "detail__item",
                                            span { class: "detail__label", "Giới tính" }
                                            span { class: "tag tag--muted", "{gender}" }
                                        }
                                        div { class: "detail__item",
                                            span { class: "detail__label", "Ngày sinh" }
                                            span { class: "detail__value", "{birth_date}" }
                                        }
                                        div { class: "detail__item",
                                            span { class: "detail__label", "Trạng thái" }
                                            span { class: "{status_class}", "{status_label}" }
                                        }
                                        div { class: "detail__item",
                                            span { class: "detail__label", "Ngày tạo" }
                                            span { class: "detail__value", "{created}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(err)) => {
                    let message = err.message_or("Lỗi khi tải thông tin nhân viên");
                    rsx! {
                        div { class: "card error-state",
                            p { "Không tìm thấy thông tin nhân viên" }
                            p { class: "error-state__detail", "{message}" }
                            Link { to: Route::AdminStaff {}, class: "btn btn--primary", "Quay lại danh sách" }
                        }
                    }
                }
                None => rsx! {
                    LoadingSpinner {}
                },
            }
        }
    }
}
