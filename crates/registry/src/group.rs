use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RegistryError;
use crate::order;
use crate::symbol::{Entry, PluginSpec};

/// What happens when a plugin name is registered twice in the same group.
///
/// [`Reject`](DuplicatePolicy::Reject) is the default: a duplicate name is
/// almost always a wiring mistake, and relative placements anchored on a
/// doubly registered name would become ambiguous. [`Ignore`](DuplicatePolicy::Ignore)
/// keeps the first registration and drops later ones, for setups where the
/// same plugin crate may be linked in via more than one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
	/// Fail the registration with [`RegistryError::DuplicateOwner`].
	#[default]
	Reject,
	/// Keep the first registration, silently drop later ones.
	Ignore,
}

/// Deep-copied snapshot of a group's entries and ordering state.
///
/// A stash is independent of the live group from the moment it is taken;
/// later registrations do not leak into it. Its main use is test isolation:
/// stash, mutate, [`restore`](Group::restore).
#[derive(Debug, Clone)]
pub struct Stash<T> {
	entries: Vec<Entry<T>>,
	dirty: bool,
}

struct GroupState<T> {
	entries: Vec<Entry<T>>,
	/// True while `entries` reflects raw registration order instead of
	/// resolved order.
	dirty: bool,
}

/// A named group of plugin entries sharing one symbol kind `T`, kept in
/// deterministic, placement-resolved order.
///
/// Registration appends and marks the group dirty; the first query after
/// that resolves the order once and caches it until the next write. All
/// operations are safe to call from multiple threads; queries return owned
/// copies that never alias internal state.
///
/// Groups are usually obtained through a [`Registry`](crate::Registry), which
/// guarantees one shared instance per (symbol kind, name) key, but they can
/// also be constructed standalone.
pub struct Group<T> {
	name: String,
	policy: DuplicatePolicy,
	state: RwLock<GroupState<T>>,
}

impl<T> Group<T> {
	/// Creates an empty group with the default [`DuplicatePolicy`].
	pub fn new(name: impl Into<String>) -> Self {
		Self::with_policy(name, DuplicatePolicy::default())
	}

	/// Creates an empty group with an explicit duplicate policy.
	pub fn with_policy(name: impl Into<String>, policy: DuplicatePolicy) -> Self {
		Self {
			name: name.into(),
			policy,
			state: RwLock::new(GroupState {
				entries: Vec::new(),
				// An empty list is trivially ordered.
				dirty: false,
			}),
		}
	}

	/// The group's name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The group's duplicate policy.
	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Registers one plugin's symbols in this group.
	///
	/// The spec must name a plugin and expose at least one symbol, with
	/// symbol names unique within the spec. Whether re-registering an
	/// already present plugin name fails or is dropped depends on the
	/// group's [`DuplicatePolicy`]; on failure the group's previous entries
	/// are left untouched.
	pub fn register(&self, spec: PluginSpec<T>) -> Result<(), RegistryError> {
		if spec.owner.is_empty() {
			return Err(RegistryError::MissingOwner);
		}
		if spec.symbols.is_empty() {
			return Err(RegistryError::NoSymbols { owner: spec.owner });
		}
		for (i, symbol) in spec.symbols.iter().enumerate() {
			if spec.symbols[..i].iter().any(|s| s.name() == symbol.name()) {
				return Err(RegistryError::DuplicateSymbol {
					name: symbol.name().to_owned(),
					owner: spec.owner,
				});
			}
		}

		let mut state = self.state.write();
		if state.entries.iter().any(|e| e.owner == spec.owner) {
			match self.policy {
				DuplicatePolicy::Reject => {
					return Err(RegistryError::DuplicateOwner {
						group: self.name.clone(),
						owner: spec.owner,
					});
				}
				DuplicatePolicy::Ignore => {
					tracing::warn!(
						group = %self.name,
						plugin = %spec.owner,
						"ignoring re-registration of already registered plugin"
					);
					return Ok(());
				}
			}
		}

		tracing::debug!(
			group = %self.name,
			plugin = %spec.owner,
			placement = %spec.placement,
			symbols = spec.symbols.len(),
			"registering plugin"
		);
		state.entries.push(Entry {
			owner: spec.owner,
			placement: spec.placement,
			symbols: spec.symbols,
		});
		state.dirty = true;
		Ok(())
	}

	/// Discards all entries. The empty group is trivially ordered, so this
	/// also clears the dirty flag.
	pub fn clear(&self) {
		let mut state = self.state.write();
		state.entries.clear();
		state.dirty = false;
	}

	/// Number of registered plugins. Does not force resolution.
	pub fn len(&self) -> usize {
		self.state.read().entries.len()
	}

	/// True if no plugins are registered.
	pub fn is_empty(&self) -> bool {
		self.state.read().entries.is_empty()
	}

	/// Acquires the state for reading, resolving the order first if the
	/// group is dirty.
	///
	/// Readers normally share the read lock. A dirty group needs exclusive
	/// access for the one-time resolve, so the reader trades its read lock
	/// for the write lock, re-checks dirtiness (another reader may have
	/// resolved in the gap), resolves, and atomically downgrades back to a
	/// read lock.
	fn read_resolved(&self) -> RwLockReadGuard<'_, GroupState<T>> {
		let state = self.state.read();
		if !state.dirty {
			return state;
		}
		drop(state);

		let mut state = self.state.write();
		if state.dirty {
			tracing::debug!(
				group = %self.name,
				entries = state.entries.len(),
				"resolving group order"
			);
			order::resolve(&mut state.entries);
			state.dirty = false;
		}
		RwLockWriteGuard::downgrade(state)
	}
}

impl<T: Clone> Group<T> {
	/// All entries in resolved group order.
	pub fn entries(&self) -> Vec<Entry<T>> {
		self.read_resolved().entries.clone()
	}

	/// Plugin names in resolved group order.
	pub fn owners(&self) -> Vec<String> {
		self.read_resolved()
			.entries
			.iter()
			.map(|e| e.owner.clone())
			.collect()
	}

	/// All exposed symbol values in resolved group order; a plugin's own
	/// symbols stay in their registration order.
	pub fn values(&self) -> Vec<T> {
		self.read_resolved()
			.entries
			.iter()
			.flat_map(|e| e.symbols.iter().map(|s| s.value().clone()))
			.collect()
	}

	/// The first symbol value exposed by the named plugin.
	pub fn value_of(&self, owner: &str) -> Option<T> {
		self.read_resolved()
			.entries
			.iter()
			.find(|e| e.owner == owner)
			.map(|e| e.value().clone())
	}

	/// The named symbol exposed by the named plugin.
	pub fn symbol_of(&self, owner: &str, name: &str) -> Option<T> {
		self.read_resolved()
			.entries
			.iter()
			.find(|e| e.owner == owner)
			.and_then(|e| e.symbol(name).cloned())
	}

	/// Values of all symbols with the given name, in resolved group order.
	pub fn values_named(&self, name: &str) -> Vec<T> {
		self.read_resolved()
			.entries
			.iter()
			.filter_map(|e| e.symbol(name).cloned())
			.collect()
	}

	/// Values of all symbols whose name starts with `prefix`, in resolved
	/// group order.
	pub fn values_with_prefix(&self, prefix: &str) -> Vec<T> {
		self.read_resolved()
			.entries
			.iter()
			.flat_map(|e| {
				e.symbols()
					.iter()
					.filter(|s| s.name().starts_with(prefix))
					.map(|s| s.value().clone())
			})
			.collect()
	}

	/// `(plugin name, value)` pairs for all symbols with the given name, in
	/// resolved group order. Useful for logging which concrete plugins get
	/// invoked for a function.
	pub fn providers(&self, name: &str) -> Vec<(String, T)> {
		self.read_resolved()
			.entries
			.iter()
			.filter_map(|e| e.symbol(name).map(|v| (e.owner.clone(), v.clone())))
			.collect()
	}

	/// Takes a deep-copied snapshot of the group's entries and ordering
	/// state.
	pub fn backup(&self) -> Stash<T> {
		let state = self.state.read();
		Stash {
			entries: state.entries.clone(),
			dirty: state.dirty,
		}
	}

	/// Replaces the group's state with a previously taken snapshot.
	///
	/// Restored non-empty groups are marked dirty so the next read
	/// re-resolves; resolution is idempotent, so a stash of an already
	/// resolved group restores to the identical order.
	pub fn restore(&self, stash: &Stash<T>) {
		let mut state = self.state.write();
		state.dirty = stash.dirty || !stash.entries.is_empty();
		state.entries = stash.entries.clone();
	}
}

impl<T> std::fmt::Debug for Group<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.read();
		f.debug_struct("Group")
			.field("name", &self.name)
			.field("policy", &self.policy)
			.field("len", &state.entries.len())
			.field("dirty", &state.dirty)
			.finish()
	}
}
