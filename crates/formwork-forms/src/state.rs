//! Validation state carried by every [`Validatable`](crate::Validatable).

use crate::validity::{ErrBehavior, ErrVisibility, Validity};
use serde::{Deserialize, Serialize};

/// Validity, last failure message and error visibility of one value.
///
/// The three are stored independently. In particular the error message is
/// sticky: it keeps the most recent failure text after the value becomes
/// valid again (so a renderer can fade it out) and is only replaced by a new
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationState {
	validity: Validity,
	error_message: String,
	error_visibility: ErrVisibility,
	error_behavior: ErrBehavior,
}

impl ValidationState {
	/// Not yet validated, errors hidden.
	pub fn unchecked(error_behavior: ErrBehavior) -> Self {
		Self {
			validity: Validity::Unchecked,
			error_message: String::new(),
			error_visibility: ErrVisibility::Hide,
			error_behavior,
		}
	}

	/// Known-good data loaded from elsewhere: valid, errors always shown.
	pub fn prefilled() -> Self {
		Self {
			validity: Validity::Valid,
			error_message: String::new(),
			error_visibility: ErrVisibility::Show,
			error_behavior: ErrBehavior::Always,
		}
	}

	pub fn validity(&self) -> Validity {
		self.validity
	}

	pub fn error_message(&self) -> &str {
		&self.error_message
	}

	pub fn error_visibility(&self) -> ErrVisibility {
		self.error_visibility
	}

	pub fn error_behavior(&self) -> ErrBehavior {
		self.error_behavior
	}

	pub fn set_error_behavior(&mut self, error_behavior: ErrBehavior) {
		self.error_behavior = error_behavior;
	}

	/// Records the outcome of evaluating a validator set.
	///
	/// A failure replaces the message; a pass keeps it.
	pub fn record(&mut self, outcome: Result<(), String>) {
		match outcome {
			Ok(()) => self.validity = Validity::Valid,
			Err(message) => {
				self.validity = Validity::Invalid;
				self.error_message = message;
			}
		}
	}

	pub fn possibly_show_err(&mut self) {
		self.error_visibility = match self.error_behavior {
			ErrBehavior::Always => ErrVisibility::Show,
			ErrBehavior::Revealed | ErrBehavior::Triggered => {
				if self.validity == Validity::Valid {
					ErrVisibility::Hide
				} else {
					ErrVisibility::Show
				}
			}
		};
	}

	pub fn possibly_hide_err(&mut self) {
		match self.error_behavior {
			ErrBehavior::Always => self.error_visibility = ErrVisibility::Show,
			ErrBehavior::Revealed => {}
			ErrBehavior::Triggered => {
				if self.validity == Validity::Valid {
					self.error_visibility = ErrVisibility::Hide;
				}
			}
		}
	}

	pub fn force_show_err(&mut self) {
		self.error_visibility = ErrVisibility::Show;
	}

	pub fn force_hide_err(&mut self) {
		self.error_visibility = ErrVisibility::Hide;
	}

	pub fn is_valid(&self) -> bool {
		self.validity == Validity::Valid
	}

	pub fn is_invalid(&self) -> bool {
		self.validity == Validity::Invalid
	}

	/// `true` only for an invalid value whose error is meant to be visible.
	pub fn should_display_error(&self) -> bool {
		self.is_invalid() && self.error_visibility == ErrVisibility::Show
	}
}
