//! # formwork
//!
//! Validation and error-visibility state for interactive form input.
//!
//! formwork tracks, for every input, its value, its validation rules, its
//! validity, whether its error should be shown and whether it may be edited.
//! A UI layer calls the pure transformations on each keystroke, blur or submit
//! and renders the returned snapshot; formwork itself never renders, performs
//! I/O or keeps hidden state.
//!
//! ## Crates
//!
//! - [`validators`]: [`Validator`](validators::Validator),
//!   [`ValidatorSet`](validators::ValidatorSet) and the built-in predicates
//! - [`forms`]: the `Validatable` contract, `Field`, `Form` and the
//!   lifecycle (feature `forms`, enabled by default)
//!
//! ## Feature Flags
//!
//! - `minimal` - validators only
//! - `full` (default) - validators and forms
//! - `forms` - the field and form state machines
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "forms")]
//! # {
//! use formwork::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Login {
//! 	username: Field<String>,
//! 	password: Field<String>,
//! }
//!
//! let username = field_lens!(Login, username);
//! let password = field_lens!(Login, password);
//!
//! let form = Form::new(
//! 	ValidatorSet::evaluate_all(vec![Validator::new(
//! 		|login: &Login| login.username.is_valid() && login.password.is_valid(),
//! 		"Please fix the highlighted fields",
//! 	)]),
//! 	move |login| validate_field(password, validate_field(username, login)),
//! 	Login {
//! 		username: Field::new(
//! 			ValidatorSet::evaluate_all(vec![is_not_empty("Enter your username")]),
//! 			String::new(),
//! 		),
//! 		password: Field::new(
//! 			ValidatorSet::evaluate_all(vec![has_length_between(8, 64, "8 to 64 characters")]),
//! 			String::new(),
//! 		),
//! 	},
//! );
//!
//! // Typing validates quietly
//! let form = form.update_field(username, "ferris".to_string());
//! assert!(form.field(username).is_valid());
//!
//! // Submitting reveals what is still wrong
//! let submission = form.submit();
//! assert!(submission.is_reject());
//! assert!(submission.form().field(password).should_display_error());
//! # }
//! ```

pub mod forms;
pub mod validators;

/// Re-export commonly used types
pub mod prelude {
	pub use formwork_validators::prelude::*;

	#[cfg(feature = "forms")]
	pub use formwork_forms::prelude::*;
}
