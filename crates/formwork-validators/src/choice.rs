//! Validators for selections and confirmations

use crate::validator::Validator;

/// Fails when no option has been chosen.
///
/// # Examples
///
/// ```
/// use formwork_validators::is_some;
///
/// let chosen = is_some::<u32>("Pick a plan");
/// assert!(chosen.check(&Some(2)));
/// assert!(!chosen.check(&None));
/// ```
pub fn is_some<T: 'static>(message: impl Into<String>) -> Validator<Option<T>> {
	Validator::new(|value: &Option<T>| value.is_some(), message)
}

/// Fails unless the box is checked.
///
/// # Examples
///
/// ```
/// use formwork_validators::is_true;
///
/// let terms = is_true("You must accept the terms");
/// assert!(terms.check(&true));
/// assert!(!terms.check(&false));
/// ```
pub fn is_true(message: impl Into<String>) -> Validator<bool> {
	Validator::new(|value: &bool| *value, message)
}
