//! Ordered validator collections.

use crate::validator::Validator;
use std::fmt;

/// The validation rules attached to one value.
///
/// `Evaluate` runs its validators in declaration order and stops at the first
/// one that fails; later validators are never evaluated. An empty list is
/// accepted and always passes, exactly like `SkipAlways`.
///
/// # Examples
///
/// ```
/// use formwork_validators::{Validator, ValidatorSet};
///
/// let set = ValidatorSet::evaluate_all(vec![
/// 	Validator::new(|n: &u32| *n > 0, "Must be positive"),
/// 	Validator::new(|n: &u32| *n < 100, "Must be below 100"),
/// ]);
///
/// assert_eq!(set.evaluate(&0), Err("Must be positive"));
/// assert_eq!(set.evaluate(&100), Err("Must be below 100"));
/// assert_eq!(set.evaluate(&42), Ok(()));
/// ```
pub enum ValidatorSet<T> {
	/// Evaluate every validator in order, first failure wins.
	Evaluate(Vec<Validator<T>>),
	/// Always valid, nothing is evaluated.
	SkipAlways,
}

impl<T> ValidatorSet<T> {
	/// Builds an `Evaluate` set from validators in evaluation order.
	pub fn evaluate_all(validators: Vec<Validator<T>>) -> Self {
		Self::Evaluate(validators)
	}

	/// Builds the always-valid marker.
	pub fn skip_always() -> Self {
		Self::SkipAlways
	}

	/// Appends a validator, turning `SkipAlways` into a one-element set.
	pub fn with(self, validator: Validator<T>) -> Self {
		match self {
			Self::Evaluate(mut validators) => {
				validators.push(validator);
				Self::Evaluate(validators)
			}
			Self::SkipAlways => Self::Evaluate(vec![validator]),
		}
	}

	/// Evaluates the set against `value`.
	///
	/// Returns the message of the first failing validator, or `Ok(())` when
	/// every validator passes or the set is skipped.
	pub fn evaluate(&self, value: &T) -> Result<(), &str> {
		match self {
			Self::SkipAlways => Ok(()),
			Self::Evaluate(validators) => validators
				.iter()
				.try_for_each(|validator| validator.validate(value)),
		}
	}

	pub fn is_skip_always(&self) -> bool {
		matches!(self, Self::SkipAlways)
	}

	/// The validators in evaluation order (empty for `SkipAlways`).
	pub fn validators(&self) -> &[Validator<T>] {
		match self {
			Self::Evaluate(validators) => validators,
			Self::SkipAlways => &[],
		}
	}
}

impl<T> Clone for ValidatorSet<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Evaluate(validators) => Self::Evaluate(validators.clone()),
			Self::SkipAlways => Self::SkipAlways,
		}
	}
}

impl<T> fmt::Debug for ValidatorSet<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Evaluate(validators) => f.debug_tuple("Evaluate").field(validators).finish(),
			Self::SkipAlways => f.write_str("SkipAlways"),
		}
	}
}

impl<T> PartialEq for ValidatorSet<T> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Evaluate(a), Self::Evaluate(b)) => a == b,
			(Self::SkipAlways, Self::SkipAlways) => true,
			_ => false,
		}
	}
}

impl<T> From<Vec<Validator<T>>> for ValidatorSet<T> {
	fn from(validators: Vec<Validator<T>>) -> Self {
		Self::Evaluate(validators)
	}
}

impl<T> FromIterator<Validator<T>> for ValidatorSet<T> {
	fn from_iter<I: IntoIterator<Item = Validator<T>>>(iter: I) -> Self {
		Self::Evaluate(iter.into_iter().collect())
	}
}
