use crate::lifecycle::{Lifecycle, State};
use thiserror::Error;

/// Errors raised by the checked form APIs.
///
/// The core transitions never fail; validation failures are recorded in the
/// form's state instead. Only the opt-in lifecycle checks return errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
	#[error("Invalid {lifecycle} transition from {from} to {to}")]
	InvalidTransition {
		lifecycle: Lifecycle,
		from: State,
		to: State,
	},
}

pub type FormResult<T> = Result<T, FormError>;
