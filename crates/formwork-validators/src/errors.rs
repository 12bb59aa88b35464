use thiserror::Error;

/// Errors raised while building a validator.
///
/// Evaluating a validator never fails; a value either satisfies it or
/// produces the validator's message. These errors only cover construction
/// from caller-supplied configuration.
#[derive(Debug, Error)]
pub enum ValidatorError {
	#[error("Invalid pattern: {0}")]
	InvalidPattern(#[from] regex::Error),
	#[error("Invalid length range: min {min} is greater than max {max}")]
	InvalidRange { min: usize, max: usize },
}

pub type ValidatorResult<T> = Result<T, ValidatorError>;
