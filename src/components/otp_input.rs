//! OTP entry field
//!
//! One wide input instead of six linked one-character cells, so focus
//! handling stays with the browser. The value is kept to digits and code
//! length by [`sanitize_otp`].

use dioxus::prelude::*;

pub const OTP_LENGTH: usize = 6;

/// Digits only, truncated to the code length.
pub fn sanitize_otp(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(OTP_LENGTH)
        .collect()
}

#[component]
pub fn OtpInput(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { class: "otp", role: "group", aria_label: "otp",
            input {
                class: "otp__field",
                r#type: "text",
                inputmode: "numeric",
                autocomplete: "one-time-code",
                maxlength: "{OTP_LENGTH}",
                value: "{value}",
                oninput: move |event| on_change.call(sanitize_otp(&event.value())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_digits_only() {
        assert_eq!(sanitize_otp("1a2b3c"), "123");
        assert_eq!(sanitize_otp("abc"), "");
    }

    #[test]
    fn truncates_to_code_length() {
        assert_eq!(sanitize_otp("1234567890"), "123456");
    }

    #[test]
    fn short_and_empty_input_pass_through() {
        assert_eq!(sanitize_otp("12"), "12");
        assert_eq!(sanitize_otp(""), "");
    }
}
