//! Session cookie lookup.

use percent_encoding::percent_decode_str;

/// Name of the cookie the backend sets on login
pub const TOKEN_COOKIE: &str = "token";

/// Find the session token in a `document.cookie` string
pub fn token_from_cookie(cookie: &str) -> Option<String> {
    let decoded = percent_decode_str(cookie).decode_utf8_lossy();
    let prefix = format!("{TOKEN_COOKIE}=");
    decoded
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| pair.strip_prefix(&prefix))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_token() {
        assert_eq!(
            token_from_cookie("theme=dark; token=abc.def; lang=en"),
            Some("abc.def".to_string())
        );
    }

    #[test]
    fn test_decodes_value() {
        assert_eq!(token_from_cookie("token=a%3Db"), Some("a=b".to_string()));
    }

    #[test]
    fn test_missing_or_empty_token() {
        assert_eq!(token_from_cookie(""), None);
        assert_eq!(token_from_cookie("token="), None);
        assert_eq!(token_from_cookie("xtoken=abc"), None);
    }
}
