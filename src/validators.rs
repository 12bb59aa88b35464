//! Predicate validators and validator sets.
//!
//! # Examples
//!
//! ```rust
//! use formwork::validators::{ValidatorSet, is_email, is_not_empty};
//!
//! let email = ValidatorSet::evaluate_all(vec![
//! 	is_not_empty("Email is required"),
//! 	is_email("Enter a valid email"),
//! ]);
//! assert_eq!(email.evaluate(&"nope".to_string()), Err("Enter a valid email"));
//! ```

pub use formwork_validators::*;
