use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// Where a plugin wants its entry placed within its group.
///
/// Plugins without a preference are ordered lexicographically by name; a
/// placement nudges a single entry relative to that base order:
///
/// - [`Front`](Placement::Front) (`"<"`): before all other entries.
/// - [`Back`](Placement::Back) (`">"`): after all other entries.
/// - [`Before`](Placement::Before) (`"<foo"`): immediately before the entry
///   of the plugin named `foo`; ignored if no such plugin is registered.
/// - [`After`](Placement::After) (`">foo"`): immediately after the entry of
///   the plugin named `foo`; ignored if no such plugin is registered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Placement {
	/// No preference; lexicographic base order applies.
	#[default]
	Anywhere,
	/// Move to the very front of the group.
	Front,
	/// Move to the very end of the group.
	Back,
	/// Move to immediately before the named plugin's entry.
	Before(String),
	/// Move to immediately after the named plugin's entry.
	After(String),
}

impl Placement {
	/// Parses a placement directive string.
	///
	/// The grammar is `"" | "<" | ">" | "<owner" | ">owner"`. Anything else
	/// is rejected with [`RegistryError::InvalidPlacement`].
	pub fn parse(directive: &str) -> Result<Self, RegistryError> {
		if directive.is_empty() {
			Ok(Self::Anywhere)
		} else if let Some(anchor) = directive.strip_prefix('<') {
			if anchor.is_empty() {
				Ok(Self::Front)
			} else {
				Ok(Self::Before(anchor.to_owned()))
			}
		} else if let Some(anchor) = directive.strip_prefix('>') {
			if anchor.is_empty() {
				Ok(Self::Back)
			} else {
				Ok(Self::After(anchor.to_owned()))
			}
		} else {
			Err(RegistryError::InvalidPlacement {
				placement: directive.to_owned(),
			})
		}
	}

	/// Returns the anchor plugin name for relative placements.
	pub fn anchor(&self) -> Option<&str> {
		match self {
			Self::Before(anchor) | Self::After(anchor) => Some(anchor),
			_ => None,
		}
	}
}

impl FromStr for Placement {
	type Err = RegistryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for Placement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Anywhere => Ok(()),
			Self::Front => f.write_str("<"),
			Self::Back => f.write_str(">"),
			Self::Before(anchor) => write!(f, "<{anchor}"),
			Self::After(anchor) => write!(f, ">{anchor}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_the_directive_grammar() {
		assert_eq!(Placement::parse(""), Ok(Placement::Anywhere));
		assert_eq!(Placement::parse("<"), Ok(Placement::Front));
		assert_eq!(Placement::parse(">"), Ok(Placement::Back));
		assert_eq!(Placement::parse("<foo"), Ok(Placement::Before("foo".into())));
		assert_eq!(Placement::parse(">foo"), Ok(Placement::After("foo".into())));
	}

	#[test]
	fn rejects_directives_without_an_operator() {
		assert_eq!(
			Placement::parse("foo"),
			Err(RegistryError::InvalidPlacement {
				placement: "foo".into()
			})
		);
	}

	#[test]
	fn renders_back_to_the_directive_string() {
		for directive in ["", "<", ">", "<foo", ">foo"] {
			assert_eq!(Placement::parse(directive).unwrap().to_string(), directive);
		}
	}

	#[test]
	fn anchors_only_on_relative_placements() {
		assert_eq!(Placement::parse("<foo").unwrap().anchor(), Some("foo"));
		assert_eq!(Placement::parse(">foo").unwrap().anchor(), Some("foo"));
		assert_eq!(Placement::Front.anchor(), None);
		assert_eq!(Placement::Anywhere.anchor(), None);
	}
}
