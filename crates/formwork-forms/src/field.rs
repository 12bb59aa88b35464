//! A single user input.

use crate::state::ValidationState;
use crate::validatable::Validatable;
use crate::validity::ErrBehavior;
use formwork_validators::ValidatorSet;

/// One input's value, its rules, its validation state and its own edit flag.
///
/// Fields normally live inside the aggregate value of a
/// [`Form`](crate::Form) and are reached through a
/// [`FieldLens`](crate::FieldLens).
///
/// # Examples
///
/// ```
/// use formwork_forms::{Field, Validatable, Validity};
/// use formwork_validators::{ValidatorSet, has_max_length, is_not_empty};
///
/// let name = Field::new(
/// 	ValidatorSet::evaluate_all(vec![
/// 		is_not_empty("Required"),
/// 		has_max_length(5, "Too long"),
/// 	]),
/// 	String::new(),
/// );
///
/// let name = name.validate();
/// assert_eq!(name.validity(), Validity::Invalid);
/// assert_eq!(name.error_message(), "Required");
/// // Not shown until the error behavior says so
/// assert!(!name.should_display_error());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
	value: T,
	validators: ValidatorSet<T>,
	state: ValidationState,
	editable: bool,
}

impl<T> Field<T> {
	/// A fresh, unchecked field whose errors are revealed once validated.
	pub fn new(validators: ValidatorSet<T>, initial: T) -> Self {
		Self {
			value: initial,
			validators,
			state: ValidationState::unchecked(ErrBehavior::Revealed),
			editable: true,
		}
	}

	/// A field holding known-good data: valid, errors always shown.
	pub fn prefilled(validators: ValidatorSet<T>, initial: T) -> Self {
		Self {
			value: initial,
			validators,
			state: ValidationState::prefilled(),
			editable: true,
		}
	}

	/// Same as [`prefilled`](Self::prefilled), but refuses edits.
	pub fn prefilled_read_only(validators: ValidatorSet<T>, initial: T) -> Self {
		Self {
			editable: false,
			..Self::prefilled(validators, initial)
		}
	}

	pub fn with_behavior(mut self, error_behavior: ErrBehavior) -> Self {
		self.state.set_error_behavior(error_behavior);
		self
	}

	pub fn with_editable(mut self, editable: bool) -> Self {
		self.editable = editable;
		self
	}

	pub fn into_value(self) -> T {
		self.value
	}

	/// The field's own edit flag. Whether it can be edited inside a form also
	/// depends on the form, see [`Form::is_field_editable`](crate::Form::is_field_editable).
	pub fn is_editable(&self) -> bool {
		self.editable
	}

	pub fn state(&self) -> &ValidationState {
		&self.state
	}

	/// Replaces the value when both the enclosing form and the field accept
	/// edits; otherwise returns the field unchanged.
	///
	/// Does not validate. Validation is always a separate, explicit step.
	pub fn replace_value(mut self, form_editable: bool, new_value: T) -> Self {
		if form_editable && self.editable {
			self.value = new_value;
		}
		self
	}
}

impl<T> Validatable for Field<T> {
	type Value = T;

	fn value(&self) -> &T {
		&self.value
	}

	fn validators(&self) -> &ValidatorSet<T> {
		&self.validators
	}

	fn validation_state(&self) -> &ValidationState {
		&self.state
	}

	fn validation_state_mut(&mut self) -> &mut ValidationState {
		&mut self.state
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validity::{ErrVisibility, Validity};
	use formwork_validators::{has_max_length, is_not_empty};
	use proptest::prelude::*;
	use rstest::{fixture, rstest};

	fn rules() -> ValidatorSet<String> {
		ValidatorSet::evaluate_all(vec![
			is_not_empty("required"),
			has_max_length(5, "too long"),
		])
	}

	#[fixture]
	fn username_rules() -> ValidatorSet<String> {
		rules()
	}

	#[rstest]
	fn test_new_field_defaults(username_rules: ValidatorSet<String>) {
		// Act
		let field = Field::new(username_rules, String::new());

		// Assert
		assert_eq!(field.validity(), Validity::Unchecked);
		assert_eq!(field.error_visibility(), ErrVisibility::Hide);
		assert_eq!(field.error_behavior(), ErrBehavior::Revealed);
		assert_eq!(field.error_message(), "");
		assert!(field.is_editable());
	}

	#[rstest]
	fn test_prefilled_field_defaults(username_rules: ValidatorSet<String>) {
		let field = Field::prefilled(username_rules.clone(), "alice".to_string());
		let read_only = Field::prefilled_read_only(username_rules, "bob".to_string());

		assert_eq!(field.validity(), Validity::Valid);
		assert_eq!(field.error_visibility(), ErrVisibility::Show);
		assert_eq!(field.error_behavior(), ErrBehavior::Always);
		assert!(field.is_editable());
		assert!(!read_only.is_editable());
		assert_eq!(read_only.value(), "bob");
	}

	#[rstest]
	#[case("", Validity::Invalid, "required")]
	#[case("abcdef", Validity::Invalid, "too long")]
	#[case("abc", Validity::Valid, "")]
	fn test_validate_reports_first_failure(
		username_rules: ValidatorSet<String>,
		#[case] input: &str,
		#[case] validity: Validity,
		#[case] message: &str,
	) {
		// Arrange
		let field = Field::new(username_rules, input.to_string());

		// Act
		let field = field.validate();

		// Assert
		assert_eq!(field.validity(), validity);
		assert_eq!(field.error_message(), message);
		assert_eq!(field.error_visibility(), ErrVisibility::Hide);
	}

	#[rstest]
	fn test_error_message_sticks_after_recovery(username_rules: ValidatorSet<String>) {
		// Arrange
		let field = Field::new(username_rules, "abcdef".to_string()).validate_and_show_err();

		// Act
		let field = field.replace_value(true, "abc".to_string()).validate();

		// Assert
		assert!(field.is_valid());
		assert_eq!(field.error_message(), "too long");
		assert!(!field.should_display_error());
	}

	#[rstest]
	fn test_triggered_field_shows_then_hides(username_rules: ValidatorSet<String>) {
		// Arrange
		let field =
			Field::new(username_rules, String::new()).with_behavior(ErrBehavior::Triggered);
		assert_eq!(field.error_visibility(), ErrVisibility::Hide);

		// Act
		let invalid = field.validate_and_show_err();
		let recovered = invalid
			.clone()
			.replace_value(true, "ok".to_string())
			.validate_and_hide_err();

		// Assert
		assert_eq!(invalid.error_visibility(), ErrVisibility::Show);
		assert!(invalid.should_display_error());
		assert_eq!(recovered.error_visibility(), ErrVisibility::Hide);
		assert!(!recovered.should_display_error());
	}

	#[rstest]
	fn test_revealed_field_stays_shown(username_rules: ValidatorSet<String>) {
		// Arrange
		let field = Field::new(username_rules, String::new()).validate_and_show_err();

		// Act
		let field = field
			.replace_value(true, "ok".to_string())
			.validate_and_hide_err();

		// Assert
		assert!(field.is_valid());
		assert_eq!(field.error_visibility(), ErrVisibility::Show);
		assert!(!field.should_display_error());
	}

	#[rstest]
	fn test_toggle_prefers_show_for_invalid(username_rules: ValidatorSet<String>) {
		let field = Field::new(username_rules, String::new())
			.with_behavior(ErrBehavior::Triggered)
			.validate_and_toggle_err();

		assert!(field.should_display_error());
	}

	#[rstest]
	#[case(true, true, "new")]
	#[case(true, false, "old")]
	#[case(false, true, "old")]
	#[case(false, false, "old")]
	fn test_replace_value_requires_both_flags(
		#[case] form_editable: bool,
		#[case] field_editable: bool,
		#[case] expected: &str,
	) {
		// Arrange
		let field = Field::new(ValidatorSet::SkipAlways, "old".to_string())
			.with_editable(field_editable);
		let before = field.clone();

		// Act
		let field = field.replace_value(form_editable, "new".to_string());

		// Assert
		assert_eq!(field.value(), expected);
		if expected == "old" {
			assert_eq!(field, before);
		}
	}

	#[rstest]
	fn test_replace_value_does_not_validate(username_rules: ValidatorSet<String>) {
		let field =
			Field::new(username_rules, "abc".to_string()).replace_value(true, String::new());

		assert_eq!(field.validity(), Validity::Unchecked);
	}

	proptest! {
		#[test]
		fn prop_validate_is_idempotent(input in ".{0,10}") {
			let field = Field::new(rules(), input);

			let once = field.validate();
			let twice = once.clone().validate();

			prop_assert_eq!(once, twice);
		}

		#[test]
		fn prop_valid_revalidation_keeps_message(first in ".{0,10}", second in ".{0,10}") {
			let field = Field::new(rules(), first).validate();
			let message = field.error_message().to_owned();

			let field = field.replace_value(true, second).validate();

			if field.is_valid() {
				prop_assert_eq!(field.error_message(), message.as_str());
			} else {
				let expected = rules()
					.evaluate(field.value())
					.err()
					.map(str::to_owned);
				prop_assert_eq!(Some(field.error_message().to_owned()), expected);
			}
		}

		#[test]
		fn prop_always_behavior_always_shows(input in ".{0,10}", visible in any::<bool>()) {
			let mut field = Field::new(rules(), input).with_behavior(ErrBehavior::Always);
			if !visible {
				field = field.force_hide_err();
			}

			let field = field.validate_and_show_err();

			prop_assert_eq!(field.error_visibility(), ErrVisibility::Show);
		}

		#[test]
		fn prop_revealed_never_auto_hides(input in ".{0,10}") {
			let field = Field::new(rules(), input).force_show_err();

			let field = field.validate_and_hide_err();

			prop_assert_eq!(field.error_visibility(), ErrVisibility::Show);
		}
	}
}
