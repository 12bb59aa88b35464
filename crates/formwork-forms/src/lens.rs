//! Accessor pairs reaching one [`Field`] inside an application-defined
//! aggregate.

use crate::field::Field;
use std::fmt;

/// A getter/setter pair for one field of an aggregate `B`.
///
/// Forms are generic over the aggregate and cannot enumerate its fields, so
/// every operation that addresses a single field takes a lens. The
/// [`field_lens!`](crate::field_lens) macro builds one for a named struct
/// field.
///
/// # Examples
///
/// ```
/// use formwork_forms::{Field, FieldLens, Validatable};
/// use formwork_validators::ValidatorSet;
///
/// struct Profile {
/// 	nickname: Field<String>,
/// }
///
/// let nickname = FieldLens::new(
/// 	|profile: &Profile| &profile.nickname,
/// 	|profile: &mut Profile, field| profile.nickname = field,
/// );
///
/// let profile = Profile {
/// 	nickname: Field::new(ValidatorSet::SkipAlways, "old".to_string()),
/// };
/// let updated = Field::new(ValidatorSet::SkipAlways, "new".to_string());
/// let profile = nickname.set(profile, updated);
///
/// assert_eq!(nickname.get(&profile).value(), "new");
/// ```
pub struct FieldLens<B, T> {
	get: fn(&B) -> &Field<T>,
	set: fn(&mut B, Field<T>),
}

impl<B, T> FieldLens<B, T> {
	pub const fn new(get: fn(&B) -> &Field<T>, set: fn(&mut B, Field<T>)) -> Self {
		Self { get, set }
	}

	pub fn get<'a>(&self, aggregate: &'a B) -> &'a Field<T> {
		(self.get)(aggregate)
	}

	/// Writes `field` into `aggregate` and hands the aggregate back.
	pub fn set(&self, mut aggregate: B, field: Field<T>) -> B {
		(self.set)(&mut aggregate, field);
		aggregate
	}
}

impl<B, T> Clone for FieldLens<B, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<B, T> Copy for FieldLens<B, T> {}

impl<B, T> fmt::Debug for FieldLens<B, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldLens").finish_non_exhaustive()
	}
}

/// Builds a [`FieldLens`] for a named field of a struct.
///
/// ```
/// use formwork_forms::{Field, Validatable, field_lens};
/// use formwork_validators::ValidatorSet;
///
/// struct Login {
/// 	username: Field<String>,
/// }
///
/// let username = field_lens!(Login, username);
/// let login = Login {
/// 	username: Field::new(ValidatorSet::SkipAlways, "ferris".to_string()),
/// };
///
/// assert_eq!(username.get(&login).value(), "ferris");
/// ```
#[macro_export]
macro_rules! field_lens {
	($aggregate:ty, $field:ident) => {
		$crate::FieldLens::<$aggregate, _>::new(
			|aggregate| &aggregate.$field,
			|aggregate, field| aggregate.$field = field,
		)
	};
}
