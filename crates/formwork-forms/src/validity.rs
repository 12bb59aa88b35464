//! Validity and error-visibility enums shared by fields and forms.

use serde::{Deserialize, Serialize};

/// Tri-state result of the most recent validation.
///
/// `Unchecked` means no validation has run yet. Coercing to `bool` treats it
/// like `Invalid`, but the reverse conversion never produces it.
///
/// ```
/// use formwork_forms::Validity;
///
/// assert!(bool::from(Validity::Valid));
/// assert!(!bool::from(Validity::Unchecked));
/// assert_eq!(Validity::from(false), Validity::Invalid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
	Valid,
	Invalid,
	#[default]
	Unchecked,
}

impl From<bool> for Validity {
	fn from(valid: bool) -> Self {
		if valid { Self::Valid } else { Self::Invalid }
	}
}

impl From<Validity> for bool {
	fn from(validity: Validity) -> Self {
		validity == Validity::Valid
	}
}

/// Whether an error should currently be shown, independent of validity.
///
/// A consumer displays an error only when the value is `Invalid` *and* the
/// visibility is `Show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrVisibility {
	Show,
	#[default]
	Hide,
}

/// Policy governing how visibility reacts to validity changes.
///
/// | Behavior    | show check                | hide check                |
/// |-------------|---------------------------|---------------------------|
/// | `Always`    | `Show`                    | `Show`                    |
/// | `Revealed`  | `Show` unless valid       | unchanged                 |
/// | `Triggered` | `Show` unless valid       | `Hide` once valid         |
///
/// `Revealed` is one-way: once an error has been revealed it stays visible
/// until it is explicitly hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrBehavior {
	Always,
	Revealed,
	Triggered,
}
