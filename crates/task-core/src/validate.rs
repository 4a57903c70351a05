//! Form Validators
//!
//! Field checks for the sign-in, sign-up and task forms. Each validator
//! returns the message to show under the field, or an empty string when
//! the value is acceptable.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid number regex"));
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit regex"));
static LOWER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid lowercase regex"));
static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid uppercase regex"));
static SPECIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[!@#$%^&*]").expect("valid special char regex"));

const MIN_USERNAME_LEN: usize = 6;
const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_email(email: &str) -> String {
    if email.is_empty() {
        return "Email is required".to_string();
    }
    if !EMAIL_RE.is_match(email) {
        return "Invalid email address".to_string();
    }
    String::new()
}

/// Phone-style number: exactly ten digits
pub fn validate_number(number: &str) -> String {
    if number.is_empty() {
        return "Number is required".to_string();
    }
    if !NUMBER_RE.is_match(number) {
        return "Number must be 10 digits".to_string();
    }
    String::new()
}

pub fn validate_username(username: &str) -> String {
    if username.is_empty() {
        return "Username is required".to_string();
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return "Username must be 6 characters or more".to_string();
    }
    String::new()
}

/// At least six characters with an uppercase letter, a lowercase letter,
/// a digit and one of `!@#$%^&*`
pub fn validate_password(password: &str) -> String {
    if password.is_empty() {
        return "Password is required".to_string();
    }
    let strong = password.chars().count() >= MIN_PASSWORD_LEN
        && DIGIT_RE.is_match(password)
        && LOWER_RE.is_match(password)
        && UPPER_RE.is_match(password)
        && SPECIAL_RE.is_match(password);
    if !strong {
        return "Password must be at least 6 characters long and contain at least one uppercase letter, one lowercase letter, one number, and one special character".to_string();
    }
    String::new()
}

/// Validate a single named field; unknown fields are always valid
pub fn validate_field(field: &str, value: &str) -> String {
    match field {
        "email" => validate_email(value),
        "number" => validate_number(value),
        "username" => validate_username(value),
        "password" => validate_password(value),
        _ => String::new(),
    }
}

/// Validate every known field of a form
pub fn validate_form<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> FormErrors {
    let mut errors = FormErrors::default();
    for (field, value) in fields {
        errors.set(field, validate_field(field, value));
    }
    errors
}

/// Field name -> error message.
///
/// Only failing fields are stored; looking up any other field yields "".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    /// Record a message for a field; an empty message clears it
    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.0.remove(field);
        } else {
            self.0.insert(field.to_string(), message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
