//! The validation and error-visibility contract shared by fields and forms.

use crate::state::ValidationState;
use crate::validity::{ErrBehavior, ErrVisibility, Validity};
use formwork_validators::ValidatorSet;

/// Anything holding a value, the rules for it and a [`ValidationState`].
///
/// Implementors provide the accessors; every transition is a provided method
/// that consumes the value and returns the updated one. None of them can fail.
///
/// Validation and visibility are separate steps. [`validate`](Self::validate)
/// only updates validity and the sticky message; the `possibly_*` methods
/// apply the [`ErrBehavior`] policy; the `validate_and_*` methods chain both.
pub trait Validatable: Sized {
	type Value;

	fn value(&self) -> &Self::Value;

	fn validators(&self) -> &ValidatorSet<Self::Value>;

	fn validation_state(&self) -> &ValidationState;

	fn validation_state_mut(&mut self) -> &mut ValidationState;

	/// Evaluates the validators against the current value.
	///
	/// Sets validity, and on failure the error message. Visibility is not
	/// touched.
	///
	/// For a [`Form`](crate::Form) this checks the aggregate only, and so do
	/// the `validate_and_*` methods built on it. Generic code bounded on
	/// `Validatable` gets this version; call the inherent
	/// [`Form::validate`](crate::Form::validate) to run the field validation
	/// first.
	fn validate(mut self) -> Self {
		let outcome = self
			.validators()
			.evaluate(self.value())
			.map_err(str::to_owned);
		self.validation_state_mut().record(outcome);
		self
	}

	fn possibly_show_err(mut self) -> Self {
		self.validation_state_mut().possibly_show_err();
		self
	}

	fn possibly_hide_err(mut self) -> Self {
		self.validation_state_mut().possibly_hide_err();
		self
	}

	/// Hide check first, then show check; the show check decides when both
	/// apply.
	fn possibly_toggle_err(self) -> Self {
		self.possibly_hide_err().possibly_show_err()
	}

	fn force_show_err(mut self) -> Self {
		self.validation_state_mut().force_show_err();
		self
	}

	fn force_hide_err(mut self) -> Self {
		self.validation_state_mut().force_hide_err();
		self
	}

	fn validate_and_show_err(self) -> Self {
		self.validate().possibly_show_err()
	}

	fn validate_and_hide_err(self) -> Self {
		self.validate().possibly_hide_err()
	}

	fn validate_and_toggle_err(self) -> Self {
		self.validate().possibly_toggle_err()
	}

	fn validity(&self) -> Validity {
		self.validation_state().validity()
	}

	fn error_message(&self) -> &str {
		self.validation_state().error_message()
	}

	fn error_visibility(&self) -> ErrVisibility {
		self.validation_state().error_visibility()
	}

	fn error_behavior(&self) -> ErrBehavior {
		self.validation_state().error_behavior()
	}

	fn is_valid(&self) -> bool {
		self.validation_state().is_valid()
	}

	fn is_invalid(&self) -> bool {
		self.validation_state().is_invalid()
	}

	fn should_display_error(&self) -> bool {
		self.validation_state().should_display_error()
	}
}
