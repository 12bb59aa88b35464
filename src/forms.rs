//! Field and form state machines.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "forms")]
//! # {
//! use formwork::forms::{Field, Validatable};
//! use formwork::validators::{ValidatorSet, is_not_empty};
//!
//! let name = Field::new(ValidatorSet::evaluate_all(vec![is_not_empty("Required")]), String::new())
//! 	.validate_and_show_err();
//! assert!(name.should_display_error());
//! # }
//! ```

#[cfg(feature = "forms")]
pub use formwork_forms::*;
