//! Predicate validators for formwork
//!
//! A [`Validator`] pairs a boolean predicate with the message reported when the
//! predicate fails. Validators are grouped per value in a [`ValidatorSet`],
//! which is evaluated in declaration order and stops at the first failure.
//!
//! ```
//! use formwork_validators::{ValidatorSet, has_max_length, is_not_empty};
//!
//! let set = ValidatorSet::evaluate_all(vec![
//! 	is_not_empty("Required"),
//! 	has_max_length(5, "Too long"),
//! ]);
//!
//! assert_eq!(set.evaluate(&String::new()), Err("Required"));
//! assert_eq!(set.evaluate(&"abcdef".to_string()), Err("Too long"));
//! assert_eq!(set.evaluate(&"abc".to_string()), Ok(()));
//! ```
//!
//! The built-in validators cover the common input checks (required text,
//! length limits, email syntax, identifier-like text, required choices and
//! confirmations). Anything application specific is a plain closure passed to
//! [`Validator::new`].

pub(crate) mod lazy_patterns;

pub mod choice;
pub mod email;
pub mod errors;
pub mod numeric;
pub mod pattern;
pub mod set;
pub mod string;
pub mod validator;

pub use choice::{is_some, is_true};
pub use email::is_email;
pub use errors::{ValidatorError, ValidatorResult};
pub use numeric::is_in_range;
pub use pattern::matches_pattern;
pub use set::ValidatorSet;
pub use string::{
	has_length_between, has_max_length, is_alphanumeric, is_alphanumeric_or_underscore,
	is_not_empty, try_length_between,
};
pub use validator::Validator;

/// Re-export commonly used types
pub mod prelude {
	pub use crate::choice::*;
	pub use crate::email::*;
	pub use crate::errors::*;
	pub use crate::numeric::*;
	pub use crate::pattern::*;
	pub use crate::set::*;
	pub use crate::string::*;
	pub use crate::validator::*;
}
