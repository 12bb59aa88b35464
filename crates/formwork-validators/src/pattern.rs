//! Validators built from caller-supplied regular expressions

use crate::errors::ValidatorResult;
use crate::validator::Validator;
use regex::Regex;

/// Builds a validator that passes when `pattern` matches the value.
///
/// The pattern is used as written; anchor it with `^...$` to match the whole
/// value. An invalid pattern is reported as
/// [`ValidatorError::InvalidPattern`](crate::ValidatorError::InvalidPattern).
///
/// # Examples
///
/// ```
/// use formwork_validators::matches_pattern;
///
/// let zip = matches_pattern(r"^\d{5}$", "Enter a 5-digit ZIP code").unwrap();
/// assert!(zip.check(&"12345".to_string()));
/// assert!(!zip.check(&"1234".to_string()));
/// ```
pub fn matches_pattern(
	pattern: &str,
	message: impl Into<String>,
) -> ValidatorResult<Validator<String>> {
	let regex = Regex::new(pattern)?;
	Ok(Validator::new(
		move |value: &String| regex.is_match(value),
		message,
	))
}
