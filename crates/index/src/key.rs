use std::borrow::Borrow;
use std::fmt;

/// Canonical key for a partial or full combination of value names.
///
/// Parts are joined in dimension order with a caller-supplied delimiter. Value names must
/// not contain the delimiter; the key does not escape it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathKey(String);

impl PathKey {
	/// Joins an ordered sequence of value names.
	pub fn join<'a, I>(delimiter: &str, parts: I) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut key = String::new();
		for (i, part) in parts.into_iter().enumerate() {
			if i > 0 {
				key.push_str(delimiter);
			}
			key.push_str(part);
		}
		Self(key)
	}

	/// Joins per-dimension slots, skipping dimensions that have no value.
	///
	/// An empty slot is left out of the key entirely rather than matching any value, which is
	/// the same shape the index stores for a variant restricted to the filled dimensions.
	pub fn from_slots<'a, I>(delimiter: &str, slots: I) -> Self
	where
		I: IntoIterator<Item = Option<&'a str>>,
	{
		Self::join(delimiter, slots.into_iter().flatten())
	}

	/// Splits the key back into value names.
	pub fn split<'a>(&'a self, delimiter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		self.0.split(delimiter)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns true if no dimension contributed to the key.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Borrow<str> for PathKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for PathKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for PathKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
