use once_cell::sync::Lazy;
use regex::Regex;

// Conservative shape only: local@domain.tld with a 2-6 letter tld. Not RFC 5321.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,6}$").expect("email regex")
});

/// Returns true when `address` has the `local@domain.tld` shape accepted by
/// [`assert_valid_email`](crate::assert_valid_email).
pub fn is_email_shaped(address: &str) -> bool {
    EMAIL_RE.is_match(address)
}
