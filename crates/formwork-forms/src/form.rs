//! Aggregate forms: a composite value of fields plus form-level validation,
//! a lifecycle state and a transient error slot.

use crate::error::{FormError, FormResult};
use crate::field::Field;
use crate::lens::FieldLens;
use crate::lifecycle::{Lifecycle, State};
use crate::state::ValidationState;
use crate::validatable::Validatable;
use crate::validity::ErrBehavior;
use formwork_validators::ValidatorSet;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied function validating every field inside the aggregate.
///
/// Usually built from one [`validate_field`] call per field.
pub type FieldValidation<B> = Arc<dyn Fn(B) -> B + Send + Sync>;

/// A form over an application-defined aggregate `B`.
///
/// The aggregate owns the [`Field`]s; the form reaches them through the
/// `field_validation` function and [`FieldLens`]es. Its own
/// [`ValidatorSet`] runs against the whole aggregate after the fields have
/// been validated, which is where cross-field rules live.
///
/// The form's own validity only reflects its own validators. To keep a form
/// with invalid fields from being submitted, include a form-level validator
/// that checks the fields, as in the example below.
///
/// # Examples
///
/// ```
/// use formwork_forms::{Field, Form, Validatable, field_lens, validate_field};
/// use formwork_validators::{Validator, ValidatorSet, is_email};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Signup {
/// 	email: Field<String>,
/// }
///
/// let email = field_lens!(Signup, email);
/// let form = Form::new(
/// 	ValidatorSet::evaluate_all(vec![Validator::new(
/// 		|signup: &Signup| signup.email.is_valid(),
/// 		"Please fix the highlighted fields",
/// 	)]),
/// 	move |signup| validate_field(email, signup),
/// 	Signup {
/// 		email: Field::new(
/// 			ValidatorSet::evaluate_all(vec![is_email("Enter a valid email")]),
/// 			String::new(),
/// 		),
/// 	},
/// );
///
/// let form = form.update_field(email, "ferris@example.com".to_string());
/// assert!(form.field(email).is_valid());
/// assert!(form.submit().is_proceed());
/// ```
pub struct Form<B> {
	value: B,
	validators: ValidatorSet<B>,
	state: ValidationState,
	field_validation: FieldValidation<B>,
	editable: bool,
	lifecycle: State,
	transient_error: String,
}

/// Result of [`Form::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<B> {
	/// The form was validated and may be sent.
	Proceed(Form<B>),
	/// The form is locked or invalid. When it was validated, the returned form
	/// carries the fresh errors.
	Reject(Form<B>),
}

impl<B> Submission<B> {
	pub fn is_proceed(&self) -> bool {
		matches!(self, Self::Proceed(_))
	}

	pub fn is_reject(&self) -> bool {
		matches!(self, Self::Reject(_))
	}

	pub fn form(&self) -> &Form<B> {
		match self {
			Self::Proceed(form) | Self::Reject(form) => form,
		}
	}

	pub fn into_form(self) -> Form<B> {
		match self {
			Self::Proceed(form) | Self::Reject(form) => form,
		}
	}
}

/// Validates one field of an aggregate and reveals its error if invalid.
///
/// This is the building block for a form's `field_validation` function: call
/// it once per field, threading the aggregate through.
pub fn validate_field<B, T: Clone>(lens: FieldLens<B, T>, aggregate: B) -> B {
	let field = lens.get(&aggregate).clone().validate_and_show_err();
	lens.set(aggregate, field)
}

impl<B> Form<B> {
	/// A fresh form: unchecked, errors hidden until triggered, `Unsaved`.
	pub fn new<F>(validators: ValidatorSet<B>, field_validation: F, initial: B) -> Self
	where
		F: Fn(B) -> B + Send + Sync + 'static,
	{
		Self {
			value: initial,
			validators,
			state: ValidationState::unchecked(ErrBehavior::Triggered),
			field_validation: Arc::new(field_validation),
			editable: true,
			lifecycle: State::Unsaved,
			transient_error: String::new(),
		}
	}

	/// A form over data that was saved before: valid, errors always shown,
	/// `Saved`.
	pub fn prefilled<F>(validators: ValidatorSet<B>, field_validation: F, initial: B) -> Self
	where
		F: Fn(B) -> B + Send + Sync + 'static,
	{
		Self {
			value: initial,
			validators,
			state: ValidationState::prefilled(),
			field_validation: Arc::new(field_validation),
			editable: true,
			lifecycle: State::Saved,
			transient_error: String::new(),
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

	pub fn into_value(self) -> B {
		self.value
	}

	pub fn state(&self) -> &ValidationState {
		&self.state
	}

	pub fn lifecycle(&self) -> State {
		self.lifecycle
	}

	pub fn transient_error(&self) -> &str {
		&self.transient_error
	}

	/// The form's own edit flag, ignoring the lifecycle. See
	/// [`is_editable`](Self::is_editable) for the effective permission.
	pub fn editable(&self) -> bool {
		self.editable
	}

	pub fn field<'a, T>(&'a self, lens: FieldLens<B, T>) -> &'a Field<T> {
		lens.get(&self.value)
	}

	pub fn field_value<'a, T>(&'a self, lens: FieldLens<B, T>) -> &'a T {
		self.field(lens).value()
	}

	/// Replaces the aggregate when the form's edit flag is set. Does not
	/// validate.
	pub fn replace_values(self, new_value: B) -> Self {
		if self.editable {
			self.map_value(|_| new_value)
		} else {
			self
		}
	}

	/// Sets the lifecycle state unconditionally.
	///
	/// No transition table is enforced here; see [`Lifecycle`] for the two
	/// intended lifecycles and [`transition`](Self::transition)
	/// for a guarded variant.
	pub fn change_state(mut self, lifecycle: State) -> Self {
		self.lifecycle = lifecycle;
		self
	}

	/// Marks a submission as in flight and clears any previous transient
	/// error.
	pub fn set_saving(mut self) -> Self {
		self.lifecycle = State::Saving;
		self.transient_error.clear();
		self
	}

	pub fn set_done(self) -> Self {
		self.change_state(State::Done)
	}

	pub fn set_saved(self) -> Self {
		self.change_state(State::Saved)
	}

	/// Records an external failure (for example a rejected request) and
	/// reopens the form for editing.
	pub fn fail_submission(self, message: impl Into<String>) -> Self {
		self.change_state(State::Unsaved).add_http_err(message)
	}

	/// Checks whether moving to `next` follows `lifecycle`.
	pub fn check_transition(&self, lifecycle: Lifecycle, next: State) -> FormResult<()> {
		if lifecycle.allows(self.lifecycle, next) {
			Ok(())
		} else {
			tracing::debug!(
				%lifecycle,
				from = %self.lifecycle,
				to = %next,
				"rejected form lifecycle transition"
			);
			Err(FormError::InvalidTransition {
				lifecycle,
				from: self.lifecycle,
				to: next,
			})
		}
	}

	/// Moves to `next` only if `lifecycle` allows it.
	///
	/// The form is consumed either way; clone it first to keep it after a
	/// rejected move.
	pub fn transition(self, lifecycle: Lifecycle, next: State) -> FormResult<Self> {
		self.check_transition(lifecycle, next)?;
		Ok(self.change_state(next))
	}

	/// Stores a message from an external operation for display. It is not
	/// validated and stays until the next [`set_saving`](Self::set_saving).
	pub fn add_http_err(mut self, message: impl Into<String>) -> Self {
		self.transient_error = message.into();
		self
	}

	pub fn is_editable(&self) -> bool {
		self.editable && !self.lifecycle.blocks_edits()
	}

	pub fn is_field_editable<T>(&self, field: &Field<T>) -> bool {
		self.is_editable() && field.is_editable()
	}

	pub fn is_submissible(&self) -> bool {
		self.state.is_valid() && !self.lifecycle.blocks_edits()
	}

	/// Validates every field through `field_validation`, then the aggregate
	/// against the form's own validators, toggling the form's error
	/// visibility.
	///
	/// [`Validatable::validate`] on a form only runs the second half.
	pub fn validate(self) -> Self {
		let field_validation = Arc::clone(&self.field_validation);
		self.map_value(|aggregate| field_validation(aggregate))
			.validate_and_toggle_err()
	}

	/// Text input protocol: set the field's value, validate the field without
	/// changing its error visibility, then validate the form with its errors
	/// suppressed until its behavior reveals them.
	///
	/// Returns the form unchanged when the field cannot be edited.
	pub fn update_field<T: Clone>(self, lens: FieldLens<B, T>, new_value: T) -> Self {
		let Some(field) = self.editable_field(lens) else {
			return self;
		};
		let field = field.replace_value(self.editable, new_value).validate();
		self.map_value(|aggregate| lens.set(aggregate, field))
			.validate_and_hide_err()
	}

	/// Same as [`update_field`](Self::update_field) without validating the
	/// field or the form, for inputs whose changes are validated elsewhere.
	pub fn update_field_without_validation<T: Clone>(
		self,
		lens: FieldLens<B, T>,
		new_value: T,
	) -> Self {
		let Some(field) = self.editable_field(lens) else {
			return self;
		};
		let field = field.replace_value(self.editable, new_value);
		self.map_value(|aggregate| lens.set(aggregate, field))
	}

	/// Same as [`update_field`](Self::update_field), for controls that produce
	/// a value rather than an edited input (radio groups, toggles, pickers).
	pub fn update_field_manually<T: Clone>(self, new_value: T, lens: FieldLens<B, T>) -> Self {
		self.update_field(lens, new_value)
	}

	/// Commit protocol (leaving an input): validate the field and reveal its
	/// error if invalid, then validate the form with its errors suppressed.
	/// The value is not changed.
	pub fn show_any_field_err<T: Clone>(self, lens: FieldLens<B, T>) -> Self {
		let Some(field) = self.editable_field(lens) else {
			return self;
		};
		let field = field.validate().possibly_show_err();
		self.map_value(|aggregate| lens.set(aggregate, field))
			.validate_and_hide_err()
	}

	/// Validates the whole form and decides whether it may be sent.
	///
	/// A form that is not editable is rejected as is, without validation.
	/// Invalid fields only block submission when the form's own validators
	/// check them, so include a form-level validator that does.
	pub fn submit(self) -> Submission<B> {
		if !self.is_editable() {
			tracing::debug!(
				lifecycle = %self.lifecycle,
				editable = self.editable,
				"form submission rejected: form is locked"
			);
			return Submission::Reject(self);
		}

		let form = self.validate();
		if form.is_submissible() {
			tracing::debug!("form submission proceeding");
			Submission::Proceed(form)
		} else {
			tracing::debug!(
				error = form.state.error_message(),
				"form submission rejected: form is invalid"
			);
			Submission::Reject(form)
		}
	}

	fn editable_field<T: Clone>(&self, lens: FieldLens<B, T>) -> Option<Field<T>> {
		let field = lens.get(&self.value);
		if self.is_field_editable(field) {
			Some(field.clone())
		} else {
			tracing::trace!(
				lifecycle = %self.lifecycle,
				form_editable = self.editable,
				field_editable = field.is_editable(),
				"field update blocked"
			);
			None
		}
	}

	fn map_value(self, f: impl FnOnce(B) -> B) -> Self {
		let Self {
			value,
			validators,
			state,
			field_validation,
			editable,
			lifecycle,
			transient_error,
		} = self;
		Self {
			value: f(value),
			validators,
			state,
			field_validation,
			editable,
			lifecycle,
			transient_error,
		}
	}
}

impl<B> Validatable for Form<B> {
	type Value = B;

	fn value(&self) -> &B {
		&self.value
	}

	fn validators(&self) -> &ValidatorSet<B> {
		&self.validators
	}

	fn validation_state(&self) -> &ValidationState {
		&self.state
	}

	fn validation_state_mut(&mut self) -> &mut ValidationState {
		&mut self.state
	}
}

impl<B: Clone> Clone for Form<B> {
	fn clone(&self) -> Self {
		Self {
			value: self.value.clone(),
			validators: self.validators.clone(),
			state: self.state.clone(),
			field_validation: Arc::clone(&self.field_validation),
			editable: self.editable,
			lifecycle: self.lifecycle,
			transient_error: self.transient_error.clone(),
		}
	}
}

impl<B: fmt::Debug> fmt::Debug for Form<B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Form")
			.field("value", &self.value)
			.field("validators", &self.validators)
			.field("state", &self.state)
			.field("editable", &self.editable)
			.field("lifecycle", &self.lifecycle)
			.field("transient_error", &self.transient_error)
			.finish_non_exhaustive()
	}
}

/// Forms compare equal when their data and state match and they share the
/// same `field_validation` function.
impl<B: PartialEq> PartialEq for Form<B> {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
			&& self.validators == other.validators
			&& self.state == other.state
			&& Arc::ptr_eq(&self.field_validation, &other.field_validation)
			&& self.editable == other.editable
			&& self.lifecycle == other.lifecycle
			&& self.transient_error == other.transient_error
	}
}
