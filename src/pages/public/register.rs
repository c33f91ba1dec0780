//! Patient registration page

use chrono::Datelike;
use dioxus::prelude::*;

use crate::api::{auth as auth_api, use_api};
use crate::components::{use_toast, OtpInput, SiteFooter, SiteHeader};
use crate::routes::Route;
use crate::validation::{normalize_vietnamese_name, validate_register, FieldErrors, RegisterValues};

/// Registration page with email OTP verification
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let toast = use_toast();
    let navigator = use_navigator();

    let mut values = use_signal(RegisterValues::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut sending_otp = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    // The form revalidates on every change, like the other auth forms
    let mut revalidate = move || errors.set(validate_register(&values()));

    let handle_name_blur = move |_| {
        let normalized = normalize_vietnamese_name(&values().full_name);
        values.write().full_name = normalized;
        revalidate();
    };

    let handle_send_otp = {
        let api = api.clone();
        move |_| {
            let email = values().email.trim().to_string();
            if email.is_empty() {
                toast.error("Vui lòng nhập email");
                return;
            }
            sending_otp.set(true);
            let api = api.clone();
            spawn(async move {
                match auth_api::send_register_otp(&api.core, &email).await {
                    Ok(_) => toast.success("Đã gửi OTP đến email"),
                    Err(err) => toast.error(err.message_or("Gửi OTP thất bại")),
                }
                sending_otp.set(false);
            });
        }
    };

    let handle_submit = {
        let api = api.clone();
        move |_: FormEvent| {
            let validation = validate_register(&values());
            let valid = validation.is_empty();
            errors.set(validation);
            if !valid {
                toast.error("Vui lòng kiểm tra lại thông tin");
                return;
            }
            submitting.set(true);
            let payload = auth_api::RegisterPayload::from_values(&values());
            let api = api.clone();
            spawn(async move {
                match auth_api::register(&api.core, &payload).await {
                    Ok(_) => {
                        toast.success("Đăng ký thành công");
                        #[cfg(feature = "web")]
                        gloo_timers::future::TimeoutFuture::new(super::REDIRECT_DELAY_MS).await;
                        navigator.push(Route::Login {});
                    }
                    Err(err) => toast.error(err.message_or("Đăng ký thất bại")),
                }
                submitting.set(false);
            });
        }
    };

    let current_year = chrono::Utc::now().year();
    let otp_label = if sending_otp() { "Đang gửi..." } else { "Gửi OTP" };

    rsx! {
        SiteHeader {}
        div { class: "auth",
            div { class: "auth__container",
                div { class: "auth__illustration",
                    div { class: "auth__illustration-content",
                        h2 { "Smile Dental" }
                        p { "Nụ cười khỏe đẹp mỗi ngày" }
                    }
                }
                form { class: "auth__form", novalidate: true, onsubmit: handle_submit,
                    h2 { class: "auth__title", "Đăng ký" }
                    div {
                        class: "field",
                        class: if errors.read().get("full_name").is_some() { "field--error" },
                        label { class: "field__label", "Họ và tên" }
                        input {
                            class: "field__input",
                            name: "fullName",
                            value: "{values.read().full_name}",
                            oninput: move |event| {
                                values.write().full_name = event.value();
                                revalidate();
                            },
                            onblur: handle_name_blur,
                        }
                        if let Some(message) = errors.read().get("full_name") {
                            div { class: "field__error", "{message}" }
                        }
                    }
                    div { class: "field-group",
                        div {
                            class: "field field--grow",
                            class: if errors.read().get("email").is_some() { "field--error" },
                            label { class: "field__label", "Email" }
                            input {
                                class: "field__input",
                                name: "email",
                                value: "{values.read().email}",
                                oninput: move |event| {
                                    values.write().email = event.value();
                                    revalidate();
                                },
                            }
                            if let Some(message) = errors.read().get("email") {
                                div { class: "field__error", "{message}" }
                            }
                        }
                        div { class: "field field--action",
                            button {
                                class: "btn btn--primary",
                                r#type: "button",
                                disabled: sending_otp(),
                                onclick: handle_send_otp,
                                "{otp_label}"
                            }
                        }
                    }
                    div {
                        class: "field",
                        class: if errors.read().get("otp").is_some() { "field--error" },
                        label { class: "field__label", "Mã OTP" }
                        OtpInput {
                            value: values.read().otp.clone(),
                            on_change: move |otp: String| {
                                values.write().otp = otp;
                                revalidate();
                            },
                        }
                        if let Some(message) = errors.read().get("otp") {
                            div { class: "field__error", "{message}" }
                        }
                    }
                    div {
                        class: "field",
                        class: if errors.read().get("phone").is_some() { "field--error" },
                        label { class: "field__label", "Số điện thoại" }
                        input {
                            class: "field__input",
                            name: "phone",
                            value: "{values.read().phone}",
                            oninput: move |event| {
                                values.write().phone = event.value();
                                revalidate();
                            },
                        }
                        if let Some(message) = errors.read().get("phone") {
                            div { class: "field__error", "{message}" }
                        }
                    }
                    div { class: "field-group",
                        div {
                            class: "field",
                            class: if errors.read().get("gender").is_some() { "field--error" },
                            label { class: "field__label", "Giới tính" }
                            div { class: "field__radios",
                                label {
                                    input {
                                        r#type: "radio",
                                        name: "gender",
                                        value: "male",
                                        checked: values.read().gender == "male",
                                        onchange: move |_| {
                                            values.write().gender = "male".to_string();
                                            revalidate();
                                        },
                                    }
                                    "Nam"
                                }
                                label {
                                    input {
                                        r#type: "radio",
                                        name: "gender",
                                        value: "female",
                                        checked: values.read().gender == "female",
                                        onchange: move |_| {
                                            values.write().gender = "female".to_string();
                                            revalidate();
                                        },
                                    }
                                    "Nữ"
                                }
                                label {
                                    input {
                                        r#type: "radio",
                                        name: "gender",
                                        value: "other",
                                        checked: values.read().gender == "other",
                                        onchange: move |_| {
                                            values.write().gender = "other".to_string();
                                            revalidate();
                                        },
                                    }
                                    "Khác"
                                }
                            }
                            if let Some(message) = errors.read().get("gender") {
                                div { class: "field__error", "{message}" }
                            }
                        }
                        div {
                            class: "field",
                            class: if errors.read().get("date_of_birth").is_some() { "field--error" },
                            label { class: "field__label", "Ngày sinh" }
                            div { class: "field__selects",
                                select {
                                    class: "field__input",
                                    value: "{values.read().day}",
                                    onchange: move |event| {
                                        values.write().day = event.value().parse().unwrap_or(0);
                                        revalidate();
                                    },
                                    option { value: "0", "Ngày" }
                                    for day in 1..=31u32 {
                                        option { value: "{day}", selected: values.read().day == day, "{day}" }
                                    }
                                }
                                select {
                                    class: "field__input",
                                    value: "{values.read().month}",
                                    onchange: move |event| {
                                        values.write().month = event.value().parse().unwrap_or(0);
                                        revalidate();
                                    },
                                    option { value: "0", "Tháng" }
                                    for month in 1..=12u32 {
                                        option { value: "{month}", selected: values.read().month == month, "{month}" }
                                    }
                                }
                                select {
                                    class: "field__input",
                                    value: "{values.read().year}",
                                    onchange: move |event| {
                                        values.write().year = event.value().parse().unwrap_or(0);
                                        revalidate();
                                    },
                                    option { value: "0", "Năm" }
                                    for year in 1900..=current_year {
                                        option { value: "{year}", selected: values.read().year == year, "{year}" }
                                    }
                                }
                            }
                            if let Some(message) = errors.read().get("date_of_birth") {
                                div { class: "field__error", "{message}" }
                            }
                        }
                    }
                    div {
                        class: "field",
                        class: if errors.read().get("password").is_some() { "field--error" },
                        label { class: "field__label", "Mật khẩu" }
                        input {
                            class: "field__input",
                            r#type: "password",
                            name: "password",
                            value: "{values.read().password}",
                            oninput: move |event| {
                                values.write().password = event.value();
                                revalidate();
                            },
                        }
                        if let Some(message) = errors.read().get("password") {
                            div { class: "field__error", "{message}" }
                        }
                    }
                    div {
                        class: "field",
                        class: if errors.read().get("confirm_password").is_some() { "field--error" },
                        label { class: "field__label", "Xác nhận mật khẩu" }
                        input {
                            class: "field__input",
                            r#type: "password",
                            name: "confirmPassword",
                            value: "{values.read().confirm_password}",
                            oninput: move |event| {
                                values.write().confirm_password = event.value();
                                revalidate();
                            },
                        }
                        if let Some(message) = errors.read().get("confirm_password") {
                            div { class: "field__error", "{message}" }
                        }
                    }
                    button {
                        class: "btn btn--primary",
                        r#type: "submit",
                        disabled: submitting(),
                        "Đăng ký"
                    }
                    div { class: "auth__links",
                        span { "Đã có tài khoản? " }
                        Link { to: Route::Login {}, class: "link", "Đăng nhập" }
                    }
                }
            }
        }
        SiteFooter {}
    }
}
