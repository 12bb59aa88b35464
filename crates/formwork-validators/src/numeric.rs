//! Range validator for ordered values

use crate::validator::Validator;

/// Fails unless `min <= value <= max`.
///
/// Works for any ordered value: numbers, dates, or application enums that
/// implement `PartialOrd`. Incomparable values (such as `NaN`) fail.
///
/// # Examples
///
/// ```
/// use formwork_validators::is_in_range;
///
/// let age = is_in_range(18u8, 120, "Age must be between 18 and 120");
/// assert!(age.check(&30));
/// assert!(!age.check(&17));
/// ```
pub fn is_in_range<T>(min: T, max: T, message: impl Into<String>) -> Validator<T>
where
	T: PartialOrd + Send + Sync + 'static,
{
	Validator::new(move |value: &T| *value >= min && *value <= max, message)
}
