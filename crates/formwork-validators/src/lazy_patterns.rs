//! Pre-compiled regular expressions shared by the built-in validators.

use regex::Regex;
use std::sync::LazyLock;

// Email address pattern.
//
// - Local part: ASCII letters, digits and ``.!#$%&'*+/=?^_`{|}~-``
// - Domain: dot-separated labels of 1 to 63 letters, digits or hyphens,
//   starting and ending with a letter or digit
// - ASCII only, anchored at both ends. No `(?i)`: Unicode case folding
//   would let `ſ` and the Kelvin sign match `s` and `k`
pub(crate) static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});
