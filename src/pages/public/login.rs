//! Login page

use dioxus::prelude::*;

use crate::api::{auth as auth_api, use_api};
use crate::auth::{use_auth, use_session};
use crate::components::{use_toast, SiteFooter, SiteHeader};
use crate::routes::{route_for_role, Redirect, Route};
use crate::validation::{validate_login, FieldErrors, LoginValues};

/// Login page
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let session = use_session();
    let api = use_api();
    let toast = use_toast();
    let navigator = use_navigator();

    let mut values = use_signal({
        let session = session.clone();
        move || LoginValues {
            email: session.remembered_email().unwrap_or_default(),
            ..LoginValues::default()
        }
    });
    let mut remember = use_signal({
        let session = session.clone();
        move || session.remembered_email().is_some()
    });
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    // Already signed in: go straight to the role's landing page
    if auth.is_authenticated() {
        let role = auth.role_key();
        return rsx! {
            Redirect { to: route_for_role(&role) }
        };
    }

    let handle_blur = move |_| errors.set(validate_login(&values()));

    let handle_submit = {
        let api = api.clone();
        let session = session.clone();
        move |_: FormEvent| {
            let cleaned = LoginValues {
                email: values().email.trim().to_string(),
                password: values().password.trim().to_string(),
            };
            let validation = validate_login(&cleaned);
            let valid = validation.is_empty();
            errors.set(validation);
            if !valid {
                return;
            }
            submitting.set(true);
            let api = api.clone();
            let session = session.clone();
            spawn(async move {
                match auth_api::login(&api.core, &cleaned.email, &cleaned.password).await {
                    Ok(response) => {
                        if remember() {
                            session.remember_email(&cleaned.email);
                        } else {
                            session.forget_email();
                        }
                        let token = response.access_token.unwrap_or_default();
                        let user = response.user.unwrap_or_default();
                        let role = user.role_key();
                        auth.log_in(&session, &token, user);
                        toast.success("Đăng nhập thành công");
                        navigator.push(route_for_role(&role));
                    }
                    Err(err) => toast.error(err.message_or("Đăng nhập thất bại")),
                }
                submitting.set(false);
            });
        }
    };

    let submit_label = if submitting() {
        "Đang đăng nhập..."
    } else {
        "Đăng nhập"
    };

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
                    h2 { class: "auth__title", "Đăng nhập" }
                    div {
                        class: "field",
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
                    div {
                        class: "field",
                        class: if errors.read().get("password").is_some() { "field--error" },
                        label { class: "field__label", "Mật khẩu" }
                        input {
                            class: "field__input",
                            r#type: "password",
                            name: "password",
                            value: "{values.read().password}",
                            oninput: move |event| values.write().password = event.value(),
                            onblur: handle_blur,
                        }
                        if let Some(message) = errors.read().get("password") {
                            div { class: "field__error", "{message}" }
                        }
                    }
                    label { class: "field__checkbox",
                        input {
                            r#type: "checkbox",
                            checked: remember(),
                            onchange: move |event| remember.set(event.checked()),
                        }
                        "Ghi nhớ email"
                    }
                    button {
                        class: "btn btn--primary",
                        r#type: "submit",
                        disabled: submitting(),
                        "{submit_label}"
                    }
                    div { class: "auth__links",
                        Link { to: Route::ForgotPassword {}, class: "link", "Quên mật khẩu?" }
                    }
                }
            }
        }
        SiteFooter {}
    }
}
