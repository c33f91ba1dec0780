//! Client-side form validation
//!
//! Pure functions over plain value structs; nothing here touches the network
//! or the session. Every message is the exact Vietnamese string the screens
//! display next to the field. An empty [`FieldErrors`] means the form may be
//! submitted.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::Datelike;
use unicode_normalization::UnicodeNormalization;

/// Per-field messages for one submission attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

// ============================================================================
// Field checks
// ============================================================================

static EMAIL_RE: OnceLock<Option<regex::Regex>> = OnceLock::new();

/// `local@domain.tld` with a TLD of at least two characters, checked against
/// the lowercased input.
pub fn is_valid_email(value: &str) -> bool {
    let pattern =
        EMAIL_RE.get_or_init(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").ok());
    match pattern {
        Some(re) => re.is_match(&value.to_lowercase()),
        None => false,
    }
}

/// Same minimum the account service enforces on its side.
pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= 8
}

/// Lowercase, NFC-normalize, then capitalize each whitespace-separated word:
/// `"  nguyễn   văn a "` becomes `"Nguyễn Văn A"`. Idempotent.
pub fn normalize_vietnamese_name(input: &str) -> String {
    let lower: String = input.to_lowercase().nfc().collect();
    lower
        .split_whitespace()
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Day/month/year come from select controls with 0 meaning "not chosen".
/// Rejects years outside [1900, current year] and impossible calendar dates.
pub fn is_valid_birth_date(day: u32, month: u32, year: i32) -> bool {
    if day == 0 || month == 0 || year == 0 {
        return false;
    }
    if year < 1900 || year > chrono::Utc::now().year() {
        return false;
    }
    chrono::NaiveDate::from_ymd_opt(year, month, day).is_some()
}

// ============================================================================
// Form validators
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginValues {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterValues {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub password: String,
    pub confirm_password: String,
    pub otp: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetValues {
    pub email: String,
    pub otp: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub fn validate_login(values: &LoginValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if values.email.is_empty() {
        errors.insert("email", "Vui lòng nhập email");
    } else if !is_valid_email(&values.email) {
        errors.insert("email", "Email không hợp lệ");
    }
    if values.password.is_empty() {
        errors.insert("password", "Vui lòng nhập mật khẩu");
    }
    errors
}

pub fn validate_register(values: &RegisterValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if values.full_name.is_empty() {
        errors.insert("full_name", "Vui lòng nhập họ và tên");
    } else if normalize_vietnamese_name(&values.full_name).chars().count() < 3 {
        errors.insert("full_name", "Họ và tên không hợp lệ");
    }
    if values.email.is_empty() {
        errors.insert("email", "Vui lòng nhập email");
    } else if !is_valid_email(&values.email) {
        errors.insert("email", "Email không hợp lệ");
    }
    if values.phone.is_empty() {
        errors.insert("phone", "Vui lòng nhập số điện thoại");
    }
    if values.gender.is_empty() {
        errors.insert("gender", "Vui lòng chọn giới tính");
    }
    if !is_valid_birth_date(values.day, values.month, values.year) {
        errors.insert("date_of_birth", "Ngày sinh không hợp lệ");
    }
    if values.password.is_empty() {
        errors.insert("password", "Vui lòng nhập mật khẩu");
    } else if !is_strong_password(&values.password) {
        errors.insert("password", "Mật khẩu tối thiểu 8 ký tự");
    }
    if values.confirm_password.is_empty() {
        errors.insert("confirm_password", "Vui lòng xác nhận mật khẩu");
    } else if values.password != values.confirm_password {
        errors.insert("confirm_password", "Mật khẩu không khớp");
    }
    if values.otp.chars().count() != 6 {
        errors.insert("otp", "OTP gồm 6 chữ số");
    }
    errors
}

pub fn validate_reset(values: &ResetValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if values.email.is_empty() {
        errors.insert("email", "Vui lòng nhập email");
    } else if !is_valid_email(&values.email) {
        errors.insert("email", "Email không hợp lệ");
    }
    if values.otp.chars().count() != 6 {
        errors.insert("otp", "OTP gồm 6 chữ số");
    }
    if values.new_password.is_empty() {
        errors.insert("new_password", "Vui lòng nhập mật khẩu mới");
    } else if !is_strong_password(&values.new_password) {
        errors.insert("new_password", "Mật khẩu tối thiểu 8 ký tự");
    }
    if values.confirm_password.is_empty() {
        errors.insert("confirm_password", "Vui lòng xác nhận mật khẩu");
    } else if values.new_password != values.confirm_password {
        errors.insert("confirm_password", "Mật khẩu không khớp");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterValues {
        RegisterValues {
            full_name: "Nguyễn Văn A".into(),
            email: "a.nguyen@example.com".into(),
            phone: "0901234567".into(),
            gender: "male".into(),
            day: 15,
            month: 6,
            year: 1990,
            password: "matkhau123".into(),
            confirm_password: "matkhau123".into(),
            otp: "123456".into(),
        }
    }

    #[test]
    fn accepts_well_formed_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("USER@EXAMPLE.COM"));
        assert!(is_valid_email("a.b+c@sub.domain.vn"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@domain.c"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn password_strength_boundary_is_eight_chars() {
        assert!(!is_strong_password("1234567"));
        assert!(is_strong_password("12345678"));
    }

    #[test]
    fn normalizes_vietnamese_names() {
        assert_eq!(normalize_vietnamese_name("  nguyễn   văn a "), "Nguyễn Văn A");
        assert_eq!(normalize_vietnamese_name("TRẦN THỊ BÍCH"), "Trần Thị Bích");
        assert_eq!(normalize_vietnamese_name(""), "");
    }

    #[test]
    fn name_normalization_is_idempotent() {
        let once = normalize_vietnamese_name("  nguyễn   văn a ");
        assert_eq!(normalize_vietnamese_name(&once), once);
    }

    #[test]
    fn name_normalization_composes_decomposed_diacritics() {
        // "nguyễn văn" typed with combining marks instead of precomposed
        // letters.
        let decomposed = "nguye\u{0302}\u{0303}n va\u{0306}n a";
        assert_eq!(normalize_vietnamese_name(decomposed), "Nguyễn Văn A");
    }

    #[test]
    fn birth_date_rejects_impossible_dates() {
        assert!(!is_valid_birth_date(31, 4, 2020));
        assert!(!is_valid_birth_date(29, 2, 2021));
        assert!(is_valid_birth_date(29, 2, 2020));
        assert!(is_valid_birth_date(15, 6, 1990));
    }

    #[test]
    fn birth_date_rejects_unset_parts_and_out_of_range_years() {
        assert!(!is_valid_birth_date(0, 6, 1990));
        assert!(!is_valid_birth_date(15, 0, 1990));
        assert!(!is_valid_birth_date(15, 6, 0));
        assert!(!is_valid_birth_date(15, 6, 1899));
        assert!(!is_valid_birth_date(1, 1, chrono::Utc::now().year() + 1));
    }

    #[test]
    fn login_requires_email_and_password() {
        let errors = validate_login(&LoginValues::default());
        assert_eq!(errors.get("email"), Some("Vui lòng nhập email"));
        assert_eq!(errors.get("password"), Some("Vui lòng nhập mật khẩu"));

        let errors = validate_login(&LoginValues {
            email: "not-an-email".into(),
            password: "x".into(),
        });
        assert_eq!(errors.get("email"), Some("Email không hợp lệ"));
        assert_eq!(errors.get("password"), None);
    }

    #[test]
    fn complete_register_form_passes() {
        assert!(validate_register(&valid_register()).is_empty());
    }

    #[test]
    fn register_marks_each_missing_field() {
        let errors = validate_register(&RegisterValues::default());
        assert_eq!(errors.get("full_name"), Some("Vui lòng nhập họ và tên"));
        assert_eq!(errors.get("email"), Some("Vui lòng nhập email"));
        assert_eq!(errors.get("phone"), Some("Vui lòng nhập số điện thoại"));
        assert_eq!(errors.get("gender"), Some("Vui lòng chọn giới tính"));
        assert_eq!(errors.get("date_of_birth"), Some("Ngày sinh không hợp lệ"));
        assert_eq!(errors.get("password"), Some("Vui lòng nhập mật khẩu"));
        assert_eq!(
            errors.get("confirm_password"),
            Some("Vui lòng xác nhận mật khẩu")
        );
        assert_eq!(errors.get("otp"), Some("OTP gồm 6 chữ số"));
    }

    #[test]
    fn register_rejects_short_names_and_weak_passwords() {
        let mut values = valid_register();
        values.full_name = "ab".into();
        values.password = "1234567".into();
        values.confirm_password = "1234567".into();
        let errors = validate_register(&values);
        assert_eq!(errors.get("full_name"), Some("Họ và tên không hợp lệ"));
        assert_eq!(errors.get("password"), Some("Mật khẩu tối thiểu 8 ký tự"));
    }

    #[test]
    fn register_rejects_mismatched_confirmation_and_short_otp() {
        let mut values = valid_register();
        values.confirm_password = "khac-mat-khau".into();
        values.otp = "12345".into();
        let errors = validate_register(&values);
        assert_eq!(errors.get("confirm_password"), Some("Mật khẩu không khớp"));
        assert_eq!(errors.get("otp"), Some("OTP gồm 6 chữ số"));
    }

    #[test]
    fn reset_mirrors_register_password_rules() {
        let errors = validate_reset(&ResetValues::default());
        assert_eq!(errors.get("email"), Some("Vui lòng nhập email"));
        assert_eq!(errors.get("otp"), Some("OTP gồm 6 chữ số"));
        assert_eq!(errors.get("new_password"), Some("Vui lòng nhập mật khẩu mới"));

        let errors = validate_reset(&ResetValues {
            email: "a@example.com".into(),
            otp: "123456".into(),
            new_password: "matkhau123".into(),
            confirm_password: "matkhau124".into(),
        });
        assert_eq!(errors.get("confirm_password"), Some("Mật khẩu không khớp"));
        assert!(errors.get("new_password").is_none());
    }
}
