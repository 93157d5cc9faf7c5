use thiserror::Error;

/// Errors reported when registering plugin symbols.
///
/// All of these indicate a programming error in the registering plugin and
/// abort that registration; queries never produce errors. A placement
/// directive naming an absent anchor is deliberately *not* an error: open
/// build configurations degrade gracefully instead of crashing because a
/// peer plugin is missing from the build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// The plugin name was empty.
	#[error("plugin name must not be empty")]
	MissingOwner,
	/// A plugin with the same name is already registered in the group.
	#[error("duplicate plugin {owner:?} in group {group:?}")]
	DuplicateOwner { group: String, owner: String },
	/// The same symbol name was exposed twice by one plugin.
	#[error("plugin {owner:?}: duplicate symbol {name:?}")]
	DuplicateSymbol { owner: String, name: String },
	/// The plugin exposed no symbols at all.
	#[error("plugin {owner:?} exposes no symbols")]
	NoSymbols { owner: String },
	/// The placement directive did not match `"" | "<" | ">" | "<owner" | ">owner"`.
	#[error("invalid placement directive {placement:?}")]
	InvalidPlacement { placement: String },
}
