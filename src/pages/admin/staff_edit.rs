//! Staff edit screen

use dioxus::prelude::*;

use crate::api::staff::{self as staff_api, StaffUpdatePayload};
use crate::api::use_api;
use crate::components::{use_toast, LoadingSpinner};
use crate::routes::Route;

/// Editable staff profile form
#[component]
pub fn AdminStaffEdit(id: String) -> Element {
    let api = use_api();
    let toast = use_toast();
    let navigator = use_navigator();

    let staff = use_resource({
        let api = api.clone();
        let id = id.clone();
        move || {
            let api = api.clone();
            let id = id.clone();
            async move { staff_api::get_by_id(&api.core, &id).await }
        }
    });

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut birth_date = use_signal(String::new);
    let mut kind = use_signal(String::new);
    let mut is_active = use_signal(|| true);
    let mut loaded = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Fill the form once the profile arrives
    use_effect(move || {
        if loaded() {
            return;
        }
        if let Some(Ok(detail)) = &*staff.read() {
            let user = &detail.user;
            full_name.set(user.full_name.clone().unwrap_or_default());
            email.set(user.email.clone().unwrap_or_default());
            phone.set(user.phone.clone().unwrap_or_default());
            gender.set(user.gender.clone().unwrap_or_default());
            birth_date.set(
                user.date_of_birth
                    .as_deref()
                    .map(|date| date.chars().take(10).collect::<String>())
                    .unwrap_or_default(),
            );
            kind.set(user.kind.clone().unwrap_or_default());
            is_active.set(user.is_active.unwrap_or(true));
            loaded.set(true);
        }
    });

    let handle_submit = {
        let api = api.clone();
        let id = id.clone();
        move |_: FormEvent| {
            if full_name().trim().is_empty() {
                toast.error("Vui lòng nhập họ và tên");
                return;
            }
            if email().trim().is_empty() {
                toast.error("Vui lòng nhập email");
                return;
            }
            if phone().trim().is_empty() {
                toast.error("Vui lòng nhập số điện thoại");
                return;
            }
            saving.set(true);
            let payload = StaffUpdatePayload {
                full_name: full_name().trim().to_string(),
                email: email().trim().to_string(),
                phone: phone().trim().to_string(),
                gender: gender(),
                date_of_birth: birth_date(),
                kind: kind(),
                is_active: is_active(),
            };
            let api = api.clone();
            let id = id.clone();
            spawn(async move {
                match staff_api::update(&api.core, &id, &payload).await {
                    Ok(_) => {
                        toast.success("Cập nhật thông tin nhân viên thành công");
                        navigator.push(Route::AdminStaffDetail { id });
                    }
                    Err(_) => toast.error("Lỗi khi cập nhật thông tin nhân viên"),
                }
                saving.set(false);
            });
        }
    };

    let detail_route = Route::AdminStaffDetail { id: id.clone() };
    let cancel_route = detail_route.clone();
    let save_label = if saving() { "Đang lưu..." } else { "Lưu thay đổi" };
    let status_value = if is_active() { "active" } else { "inactive" };

    rsx! {
        div { class: "page",
            match &*staff.read() {
                Some(Ok(_)) => rsx! {
                    div { class: "card",
                        div { class: "page__toolbar",
                            div { class: "page__toolbar-group",
                                Link { to: detail_route.clone(), class: "btn btn--ghost", "Quay lại" }
                                h3 { class: "page__title", "Chỉnh sửa nhân viên" }
                            }
                        }
                        form { class: "edit-form", onsubmit: handle_submit,
                            div { class: "field-group",
                                div { class: "field field--grow",
                                    label { class: "field__label", "Họ và tên" }
                                    input {
                                        class: "field__input",
                                        placeholder: "Nhập họ và tên",
                                        value: "{full_name}",
                                        oninput: move |event| full_name.set(event.value()),
                                    }
                                }
                                div { class: "field field--grow",
                                    label { class: "field__label", "Email" }
                                    input {
                                        class: "field__input",
                                        placeholder: "Nhập email",
                                        value: "{email}",
                                        oninput: move |event| email.set(event.value()),
                                    }
                                }
                            }
                            div { class: "field-group",
                                div { class: "field field--grow",
                                    label { class: "field__label", "Số điện thoại" }
                                    input {
                                        class: "field__input",
                                        placeholder: "Nhập số điện thoại",
                                        value: "{phone}",
                                        oninput: move |event| phone.set(event.value()),
                                    }
                                }
                                div { class: "field field--grow",
                                    label { class: "field__label", "Giới tính" }
                                    select {
                                        class: "field__input",
                                        value: "{gender}",
                                        onchange: move |event| gender.set(event.value()),
                                        option { value: "", "Chọn giới tính" }
                                        option { value: "male", selected: gender() == "male", "Nam" }
                                        option { value: "female", selected: gender() == "female", "Nữ" }
                                        option { value: "other", selected: gender() == "other", "Khác" }
                                    }
                                }
                            }
                            div { class: "field-group",
                                div { class: "field field--grow",
                                    label { class: "field__label", "Ngày sinh" }
                                    input {
                                        class: "field__input",
                                        r#type: "date",
                                        value: "{birth_date}",
                                        oninput: move |event| birth_date.set(event.value()),
                                    }
                                }
                                div { class: "field field--grow",
                                    label { class: "field__label", "Loại" }
                                    select {
                                        class: "field__input",
                                        value: "{kind}",
                                        onchange: move |event| kind.set(event.value()),
                                        option { value: "", "Chọn loại" }
                                        option { value: "fulltime", selected: kind() == "fulltime", "Toàn thời gian" }
                                        option { value: "parttime", selected: kind() == "parttime", "Bán thời gian" }
                                        option { value: "normal", selected: kind() == "normal", "Thường" }
                                    }
                                }
                            }
                            div { class: "field",
                                label { class: "field__label", "Trạng thái hoạt động" }
                                select {
                                    class: "field__input",
                                    value: "{status_value}",
                                    onchange: move |event| is_active.set(event.value() == "active"),
                                    option { value: "active", selected: is_active(), "Hoạt động" }
                                    option { value: "inactive", selected: !is_active(), "Không hoạt động" }
                                }
                            }
                            div { class: "modal__actions",
                                Link { to: cancel_route.clone(), class: "btn btn--ghost", "Hủy" }
                                button {
                                    class: "btn btn--primary",
                                    r#type: "submit",
                                    disabled: saving(),
                                    "{save_label}"
                                }
                            }
                        }
                    }
                },
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
