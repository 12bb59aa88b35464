//! Email syntax validator

use crate::lazy_patterns::EMAIL_REGEX;
use crate::validator::Validator;

/// Fails unless the value is a syntactically valid email address.
///
/// Only syntax is checked. The domain needs no top-level part, so
/// `admin@localhost` passes.
///
/// # Examples
///
/// ```
/// use formwork_validators::is_email;
///
/// let email = is_email("Enter a valid email address");
/// assert!(email.check(&"user@example.com".to_string()));
/// assert!(!email.check(&"user@".to_string()));
/// ```
pub fn is_email(message: impl Into<String>) -> Validator<String> {
	Validator::new(|value: &String| EMAIL_REGEX.is_match(value), message)
}
