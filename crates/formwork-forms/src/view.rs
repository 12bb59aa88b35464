//! Serializable snapshots for renderers
//!
//! Fields and forms hold closures and cannot be serialized. A view is the
//! plain data a renderer needs, ready to be handed to a template or sent to a
//! client as JSON.
//!
//! ```
//! use formwork_forms::{Field, FieldView, Validatable};
//! use formwork_validators::{ValidatorSet, is_not_empty};
//!
//! let field = Field::new(
//! 	ValidatorSet::evaluate_all(vec![is_not_empty("Required")]),
//! 	String::new(),
//! )
//! .validate_and_show_err();
//!
//! let view: FieldView<String> = field.to_view();
//! assert!(view.should_display_error);
//! assert_eq!(view.error_message, "Required");
//! ```

use crate::field::Field;
use crate::form::Form;
use crate::lens::FieldLens;
use crate::lifecycle::State;
use crate::validatable::Validatable;
use crate::validity::Validity;
use serde::{Deserialize, Serialize};

/// Render data for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldView<T> {
	pub value: T,
	pub validity: Validity,
	/// Last failure message, kept after recovery; only display it when
	/// `should_display_error` is set.
	pub error_message: String,
	pub should_display_error: bool,
	/// Whether the input should accept changes.
	pub editable: bool,
}

/// Render data for a form, with the aggregate projected to `V`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormView<V> {
	pub value: V,
	pub validity: Validity,
	pub error_message: String,
	pub should_display_error: bool,
	pub editable: bool,
	pub submissible: bool,
	pub lifecycle: State,
	/// Message from a failed external operation, empty when there is none.
	pub transient_error: String,
}

impl<T: Clone> Field<T> {
	/// Snapshot of the field on its own. Inside a form, prefer
	/// [`Form::field_view`], which also accounts for the form's edit state.
	pub fn to_view(&self) -> FieldView<T> {
		FieldView {
			value: self.value().clone(),
			validity: self.validity(),
			error_message: self.error_message().to_owned(),
			should_display_error: self.should_display_error(),
			editable: self.is_editable(),
		}
	}
}

impl<B> Form<B> {
	/// Snapshot of one field, `editable` reflecting
	/// [`is_field_editable`](Self::is_field_editable).
	pub fn field_view<T: Clone>(&self, lens: FieldLens<B, T>) -> FieldView<T> {
		let field = self.field(lens);
		FieldView {
			editable: self.is_field_editable(field),
			..field.to_view()
		}
	}

	/// Snapshot of the form, using `project` to turn the aggregate into
	/// renderable data (typically a struct of [`FieldView`]s).
	pub fn to_view<V>(&self, project: impl FnOnce(&B) -> V) -> FormView<V> {
		FormView {
			value: project(self.value()),
			validity: self.validity(),
			error_message: self.error_message().to_owned(),
			should_display_error: self.should_display_error(),
			editable: self.is_editable(),
			submissible: self.is_submissible(),
			lifecycle: self.lifecycle(),
			transient_error: self.transient_error().to_owned(),
		}
	}
}
