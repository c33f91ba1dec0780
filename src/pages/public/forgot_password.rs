//! Password reset page, gated by an email OTP

use dioxus::prelude::*;

use crate::api::{auth as auth_api, use_api};
use crate::components::{use_toast, OtpInput, SiteFooter, SiteHeader};
use crate::routes::Route;
use crate::validation::{validate_reset, FieldErrors, ResetValues};

/// Password reset page
#[component]
pub fn ForgotPassword() -> Element {
    let api = use_api();
    let toast = use_toast();
    let navigator = use_navigator();

    let mut values = use_signal(ResetValues::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut sending_otp = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let handle_blur = move |_| errors.set(validate_reset(&values()));

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
                match auth_api::send_reset_otp(&api.core, &email).await {
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
            let validation = validate_reset(&values());
            let valid = validation.is_empty();
            errors.set(validation);
            if !valid {
                toast.error("Vui lòng kiểm tra lại thông tin");
                return;
            }
            submitting.set(true);
            let current = values();
            let payload = auth_api::ResetPasswordPayload {
                email: current.email,
                otp: current.otp,
                new_password: current.new_password,
                confirm_password: current.confirm_password,
            };
            let api = api.clone();
            spawn(async move {
                match auth_api::reset_password(&api.core, &payload).await {
                    Ok(_) => {
                        toast.success("Đặt lại mật khẩu thành công");
                        #[cfg(feature = "web")]
                        gloo_timers::future::TimeoutFuture::new(super::REDIRECT_DELAY_MS).await;
                        navigator.push(Route::Login {});
                    }
                    Err(err) => toast.error(err.message_or("Đặt lại mật khẩu thất bại")),
                }
                submitting.set(false);
            });
        }
    };

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
                    h2 { class: "auth__title", "Đặt lại mật khẩu" }
                    div { class: "field-group",
                        div {
                            class: "field field--grow",
                            class: if errors.read().get("email").is_some() { "field--error" },
                            label { class: "field__label", "Email" }
                            input {
                                class: "field__input",
                                name: "email",
                                value: "{values.read().email}",
                                oninput: move |event| values.write().email = event.value(),
                                onblur: handle_blur,
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
                                errors.set(validate_reset(&values()));
                            },
                        }
                        if let Some(message) = errors.read().get("otp") {
                            div { class: "field__error", "{message}" }
                        }
                    }
                    div {
                        class: "field",
                        class: if errors.read().get("new_password").is_some() { "field--error" },
                        label { class: "field__label", "Mật khẩu mới" }
                        input {
                            class: "field__input",
                            r#type: "password",
                            name: "newPassword",
                            value: "{values.read().new_password}",
                            oninput: move |event| values.write().new_password = event.value(),
                            onblur: handle_blur,
                        }
                        if let Some(message) = errors.read().get("new_password") {
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
                            oninput: move |event| values.write().confirm_password = event.value(),
                            onblur: handle_blur,
                        }
                        if let Some(message) = errors.read().get("confirm_password") {
                            div { class: "field__error", "{message}" }
                        }
                    }
                    button {
                        class: "btn btn--primary",
                        r#type: "submit",
                        disabled: submitting(),
                        "Đặt lại mật khẩu"
                    }
                    div { class: "auth__links",
                        Link { to: Route::Login {}, class: "link", "Quay lại đăng nhập" }
                    }
                }
            }
        }
        SiteFooter {}
    }
}
