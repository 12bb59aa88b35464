//! Validation state machines for interactive form input
//!
//! This crate tracks, for every input of a form, its value, its validation
//! rules, whether it is currently valid, whether its error should be visible,
//! and whether it may be edited. Every operation is a pure transformation: it
//! consumes a [`Field`] or [`Form`] and returns the updated one, so a UI layer
//! can call it on each keystroke, blur or submit event and store the result.
//!
//! ## Architecture
//!
//! ```mermaid
//! flowchart LR
//!     Event["UI event"] -->|"update_field / show_any_field_err / submit"| Form
//!     subgraph Form["Form&lt;B&gt;"]
//!         Aggregate["B (application struct)"] --> Fields["Field&lt;T&gt; ..."]
//!     end
//!     Form -->|"to_view()"| View["FormView / FieldView"]
//! ```
//!
//! Validation runs bottom-up: the form's `field_validation` function validates
//! each field (see [`validate_field`]), then the form's own validators check
//! the aggregate, which is where cross-field rules belong.
//!
//! ## Error visibility
//!
//! Validity and visibility are tracked separately. An error is displayed only
//! when the value is invalid *and* its visibility is `Show`; the
//! [`ErrBehavior`] of each field or form decides how visibility follows
//! validity:
//!
//! - `Always`: errors are always shown (prefilled data)
//! - `Revealed`: shown once validation has failed, never hidden automatically
//!   (the default for fields)
//! - `Triggered`: shown on failure, hidden again once valid (the default for
//!   forms)
//!
//! ## Lifecycle
//!
//! Forms carry a [`State`]. While `Saving` or `Done`, every update protocol
//! is a no-op and [`Form::submit`] rejects. See [`Lifecycle`] for the two
//! intended lifecycles.

pub mod error;
pub mod field;
pub mod form;
pub mod lens;
pub mod lifecycle;
pub mod state;
pub mod validatable;
pub mod validity;
pub mod view;

pub use error::{FormError, FormResult};
pub use field::Field;
pub use form::{FieldValidation, Form, Submission, validate_field};
pub use lens::FieldLens;
pub use lifecycle::{Lifecycle, State};
pub use state::ValidationState;
pub use validatable::Validatable;
pub use validity::{ErrBehavior, ErrVisibility, Validity};
pub use view::{FieldView, FormView};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::field_lens;
	pub use crate::{
		ErrBehavior, ErrVisibility, Field, FieldLens, FieldView, Form, FormError, FormView,
		Lifecycle, State, Submission, Validatable, Validity, validate_field,
	};
}
