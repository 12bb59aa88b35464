//! String validators
//!
//! Lengths are counted in Unicode scalar values (`char`s), not bytes, so a
//! limit of 5 accepts `"héllo"`.

use crate::errors::{ValidatorError, ValidatorResult};
use crate::validator::Validator;

/// Fails on the empty string.
///
/// # Examples
///
/// ```
/// use formwork_validators::is_not_empty;
///
/// let required = is_not_empty("This field is required");
/// assert!(required.check(&"x".to_string()));
/// assert!(!required.check(&String::new()));
/// ```
pub fn is_not_empty(message: impl Into<String>) -> Validator<String> {
	Validator::new(|value: &String| !value.is_empty(), message)
}

/// Fails when the value is longer than `max` characters.
///
/// # Examples
///
/// ```
/// use formwork_validators::has_max_length;
///
/// let short = has_max_length(5, "At most 5 characters");
/// assert!(short.check(&"hello".to_string()));
/// assert!(!short.check(&"hello!".to_string()));
/// ```
pub fn has_max_length(max: usize, message: impl Into<String>) -> Validator<String> {
	Validator::new(move |value: &String| value.chars().count() <= max, message)
}

/// Fails unless the length lies in `min..=max`.
///
/// A range with `min > max` accepts nothing. Use [`try_length_between`] when
/// the bounds come from configuration and should be checked.
pub fn has_length_between(
	min: usize,
	max: usize,
	message: impl Into<String>,
) -> Validator<String> {
	Validator::new(
		move |value: &String| (min..=max).contains(&value.chars().count()),
		message,
	)
}

/// Checked variant of [`has_length_between`].
///
/// # Examples
///
/// ```
/// use formwork_validators::{ValidatorError, try_length_between};
///
/// assert!(try_length_between(2, 4, "2 to 4 characters").is_ok());
/// assert!(matches!(
/// 	try_length_between(4, 2, "unreachable"),
/// 	Err(ValidatorError::InvalidRange { min: 4, max: 2 })
/// ));
/// ```
pub fn try_length_between(
	min: usize,
	max: usize,
	message: impl Into<String>,
) -> ValidatorResult<Validator<String>> {
	if min > max {
		return Err(ValidatorError::InvalidRange { min, max });
	}
	Ok(has_length_between(min, max, message))
}

/// Fails on anything other than ASCII letters and digits.
///
/// The empty string passes; pair with [`is_not_empty`] to require input.
pub fn is_alphanumeric(message: impl Into<String>) -> Validator<String> {
	Validator::new(
		|value: &String| value.chars().all(|c| c.is_ascii_alphanumeric()),
		message,
	)
}

/// Fails on anything other than ASCII letters, digits and `_`.
///
/// The empty string passes.
pub fn is_alphanumeric_or_underscore(message: impl Into<String>) -> Validator<String> {
	Validator::new(
		|value: &String| {
			value
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || c == '_')
		},
		message,
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", false)]
	#[case(" ", true)]
	#[case("text", true)]
	fn test_is_not_empty(#[case] input: &str, #[case] expected: bool) {
		// Arrange
		let validator = is_not_empty("Required");

		// Act
		let result = validator.check(&input.to_string());

		// Assert
		assert_eq!(result, expected);
	}

	#[rstest]
	#[case("", true)]
	#[case("abcde", true)]
	#[case("abcdef", false)]
	#[case("héllo", true)]
	#[case("日本語テキスト", false)]
	fn test_has_max_length(#[case] input: &str, #[case] expected: bool) {
		let validator = has_max_length(5, "Too long");

		assert_eq!(validator.check(&input.to_string()), expected);
	}

	#[rstest]
	#[case("a", false)]
	#[case("ab", true)]
	#[case("abcd", true)]
	#[case("abcde", false)]
	fn test_has_length_between_is_inclusive(#[case] input: &str, #[case] expected: bool) {
		let validator = has_length_between(2, 4, "2 to 4 characters");

		assert_eq!(validator.check(&input.to_string()), expected);
	}

	#[rstest]
	fn test_has_length_between_inverted_accepts_nothing() {
		let validator = has_length_between(4, 2, "Impossible");

		assert!(!validator.check(&"abc".to_string()));
		assert!(!validator.check(&String::new()));
	}

	#[rstest]
	fn test_try_length_between_rejects_inverted_range() {
		// Act
		let result = try_length_between(10, 1, "Impossible");

		// Assert
		match result {
			Err(ValidatorError::InvalidRange { min, max }) => {
				assert_eq!((min, max), (10, 1));
			}
			other => panic!("Expected InvalidRange, got {other:?}"),
		}
	}

	#[rstest]
	#[case("", true)]
	#[case("abc123", true)]
	#[case("ABC", true)]
	#[case("with space", false)]
	#[case("under_score", false)]
	#[case("dash-ed", false)]
	#[case("ünïcode", false)]
	fn test_is_alphanumeric(#[case] input: &str, #[case] expected: bool) {
		let validator = is_alphanumeric("Letters and digits only");

		assert_eq!(validator.check(&input.to_string()), expected);
	}

	#[rstest]
	#[case("", true)]
	#[case("snake_case_1", true)]
	#[case("_leading", true)]
	#[case("dash-ed", false)]
	#[case("dot.ted", false)]
	fn test_is_alphanumeric_or_underscore(#[case] input: &str, #[case] expected: bool) {
		let validator = is_alphanumeric_or_underscore("Letters, digits and underscores only");

		assert_eq!(validator.check(&input.to_string()), expected);
	}
}
