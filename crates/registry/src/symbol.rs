use crate::placement::Placement;

/// One exposed symbol: a name plus the value behind it.
///
/// The value type `T` is the group's symbol kind. In practice this is a
/// function pointer type or a shared trait object such as `Arc<dyn Codec>`;
/// the group can only ever hold values of that one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSymbol<T> {
	name: String,
	value: T,
}

impl<T> NamedSymbol<T> {
	/// Creates a named symbol.
	pub fn new(name: impl Into<String>, value: T) -> Self {
		Self {
			name: name.into(),
			value,
		}
	}

	/// The symbol's name, distinct from the owning plugin's name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The exposed value.
	pub fn value(&self) -> &T {
		&self.value
	}
}

/// One plugin's contribution to a group: its name, an optional placement
/// preference, and the symbols it exposes.
///
/// Entries are immutable once registered; they can only be replaced
/// wholesale through [`Group::clear`](crate::Group::clear) or
/// [`Group::restore`](crate::Group::restore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
	pub(crate) owner: String,
	pub(crate) placement: Placement,
	pub(crate) symbols: Vec<NamedSymbol<T>>,
}

impl<T> Entry<T> {
	/// The name of the plugin that contributed this entry.
	pub fn owner(&self) -> &str {
		&self.owner
	}

	/// The entry's placement preference.
	pub fn placement(&self) -> &Placement {
		&self.placement
	}

	/// All symbols exposed by this entry, in registration order.
	pub fn symbols(&self) -> &[NamedSymbol<T>] {
		&self.symbols
	}

	/// The first exposed symbol's value.
	///
	/// For plugins registered via [`PluginSpec::single`] this is *the*
	/// exposed value.
	pub fn value(&self) -> &T {
		// Entries are validated to expose at least one symbol.
		&self.symbols[0].value
	}

	/// Looks up an exposed symbol by name.
	pub fn symbol(&self, name: &str) -> Option<&T> {
		self.symbols.iter().find(|s| s.name == name).map(|s| &s.value)
	}
}

/// Registration request for one plugin, consumed by
/// [`Group::register`](crate::Group::register).
///
/// ```
/// use plugdock_registry::{Placement, PluginSpec};
///
/// fn render(input: &str) -> String {
/// 	input.to_owned()
/// }
///
/// let spec = PluginSpec::new("markdown")
/// 	.placement(Placement::Before("plaintext".into()))
/// 	.symbol("render", render as fn(&str) -> String);
/// ```
#[derive(Debug, Clone)]
pub struct PluginSpec<T> {
	pub(crate) owner: String,
	pub(crate) placement: Placement,
	pub(crate) symbols: Vec<NamedSymbol<T>>,
}

impl<T> PluginSpec<T> {
	/// Starts a spec for the plugin with the given name.
	pub fn new(owner: impl Into<String>) -> Self {
		Self {
			owner: owner.into(),
			placement: Placement::Anywhere,
			symbols: Vec::new(),
		}
	}

	/// Spec for a plugin exposing a single value named after the plugin
	/// itself.
	pub fn single(owner: impl Into<String>, value: T) -> Self {
		let owner = owner.into();
		let symbol = NamedSymbol::new(owner.clone(), value);
		Self {
			owner,
			placement: Placement::Anywhere,
			symbols: vec![symbol],
		}
	}

	/// Sets the placement preference.
	pub fn placement(mut self, placement: Placement) -> Self {
		self.placement = placement;
		self
	}

	/// Adds an exposed symbol. May be called multiple times; symbol names
	/// must be unique within one spec.
	pub fn symbol(mut self, name: impl Into<String>, value: T) -> Self {
		self.symbols.push(NamedSymbol::new(name, value));
		self
	}
}
