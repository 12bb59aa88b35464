//! Form lifecycle states and the two supported lifecycles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a form is in its save cycle.
///
/// While `Saving` or `Done` the form refuses edits and submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
	#[default]
	Unsaved,
	Saving,
	Saved,
	Done,
}

impl State {
	/// `true` for `Saving` and `Done`.
	pub fn blocks_edits(self) -> bool {
		matches!(self, Self::Saving | Self::Done)
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Unsaved => "unsaved",
			Self::Saving => "saving",
			Self::Saved => "saved",
			Self::Done => "done",
		})
	}
}

/// The lifecycles a form can follow.
///
/// ```text
/// OneShot:   Unsaved -> Saving -> Done
///                         |
///                         +-> Unsaved (submission failed)
///
/// Resumable: Unsaved -> Saving -> Saved -> Saving -> ...
///                         |
///                         +-> Unsaved (submission failed)
/// ```
///
/// [`Form::change_state`](crate::Form::change_state) accepts any state.
/// [`Form::check_transition`](crate::Form::check_transition) is the opt-in
/// guard for callers that want a lifecycle enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
	OneShot,
	Resumable,
}

impl Lifecycle {
	pub fn allows(self, from: State, to: State) -> bool {
		use State::*;

		match (from, to) {
			(Unsaved, Saving) | (Saving, Unsaved) => true,
			(Saving, Done) => self == Self::OneShot,
			(Saving, Saved) | (Saved, Saving) => self == Self::Resumable,
			_ => false,
		}
	}
}

impl fmt::Display for Lifecycle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::OneShot => "one-shot",
			Self::Resumable => "resumable",
		})
	}
}
