//! The atomic validation rule: a predicate plus its failure message.

use std::fmt;
use std::sync::Arc;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A single pass/fail rule over a value.
///
/// The predicate returns `true` when the value is acceptable. The message is
/// what a form displays when it is not. Validators are immutable once built
/// and cloning one only bumps a reference count.
///
/// # Examples
///
/// ```
/// use formwork_validators::Validator;
///
/// let even = Validator::new(|n: &i32| n % 2 == 0, "Must be even");
/// assert_eq!(even.validate(&4), Ok(()));
/// assert_eq!(even.validate(&3), Err("Must be even"));
/// ```
pub struct Validator<T> {
	predicate: Predicate<T>,
	message: String,
}

impl<T> Validator<T> {
	/// Creates a validator from a predicate and the message reported on failure.
	pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
	where
		F: Fn(&T) -> bool + Send + Sync + 'static,
	{
		Self {
			predicate: Arc::new(predicate),
			message: message.into(),
		}
	}

	/// The message reported when the predicate fails.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Runs the predicate.
	pub fn check(&self, value: &T) -> bool {
		(self.predicate)(value)
	}

	/// Runs the predicate, returning the failure message when it does not hold.
	pub fn validate(&self, value: &T) -> Result<(), &str> {
		if self.check(value) {
			Ok(())
		} else {
			Err(self.message.as_str())
		}
	}
}

impl<T> Clone for Validator<T> {
	fn clone(&self) -> Self {
		Self {
			predicate: Arc::clone(&self.predicate),
			message: self.message.clone(),
		}
	}
}

impl<T> fmt::Debug for Validator<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Validator")
			.field("message", &self.message)
			.finish_non_exhaustive()
	}
}

/// Two validators are equal when they share the same predicate instance and
/// carry the same message. Clones of one validator compare equal, independently
/// built validators never do.
impl<T> PartialEq for Validator<T> {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.predicate, &other.predicate) && self.message == other.message
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(10, Ok(()))]
	#[case(0, Ok(()))]
	#[case(-1, Err("Must not be negative"))]
	fn test_validate_reports_message_on_failure(
		#[case] value: i64,
		#[case] expected: Result<(), &str>,
	) {
		// Arrange
		let validator = Validator::new(|n: &i64| *n >= 0, "Must not be negative");

		// Act
		let result = validator.validate(&value);

		// Assert
		assert_eq!(result, expected);
	}

	#[rstest]
	fn test_clone_shares_predicate() {
		// Arrange
		let validator = Validator::new(|s: &String| !s.is_empty(), "Required");

		// Act
		let cloned = validator.clone();

		// Assert
		assert_eq!(validator, cloned);
		assert_eq!(cloned.message(), "Required");
	}

	#[rstest]
	fn test_independent_validators_are_not_equal() {
		// Arrange
		let a = Validator::new(|s: &String| !s.is_empty(), "Required");
		let b = Validator::new(|s: &String| !s.is_empty(), "Required");

		// Act + Assert
		assert_ne!(a, b);
	}

	#[rstest]
	fn test_debug_shows_message() {
		let validator = Validator::new(|_: &u8| true, "Never fails");

		let debug = format!("{validator:?}");

		assert!(debug.contains("Never fails"));
	}
}
