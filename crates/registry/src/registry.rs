use std::any::{Any, TypeId};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::group::{DuplicatePolicy, Group};

/// Directory key: groups are distinguished by symbol kind *and* name, so two
/// groups may share a name as long as they hold different kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
	kind: TypeId,
	name: String,
}

/// Process-wide directory of plugin groups.
///
/// [`group`](Registry::group) hands out the same [`Group`] instance for the
/// same `(symbol kind, name)` key for the registry's whole lifetime, creating
/// an empty group on first use; callers never need to cache groups
/// themselves. The symbol kind is the type parameter, so mixing up a group's
/// kind is a compile error rather than a runtime surprise.
///
/// There is no ambient global registry: construct one with
/// [`Registry::new`] and pass it to whoever registers or queries. Tests get
/// isolation by simply constructing a fresh registry.
///
/// The internal lock is held only for the lookup-or-insert step; group
/// operations run under each group's own lock, so traffic on different
/// groups never serializes.
pub struct Registry {
	policy: DuplicatePolicy,
	groups: Mutex<FxHashMap<GroupKey, Arc<dyn Any + Send + Sync>>>,
}

impl Registry {
	/// Creates an empty registry with the default [`DuplicatePolicy`].
	pub fn new() -> Self {
		Self::with_policy(DuplicatePolicy::default())
	}

	/// Creates an empty registry whose groups use the given duplicate
	/// policy.
	pub fn with_policy(policy: DuplicatePolicy) -> Self {
		Self {
			policy,
			groups: Mutex::new(FxHashMap::default()),
		}
	}

	/// Returns the group holding symbols of kind `T` under the given name,
	/// creating it empty on first use. Never fails; repeated calls return
	/// the identical instance.
	pub fn group<T: Send + Sync + 'static>(&self, name: &str) -> Arc<Group<T>> {
		let key = GroupKey {
			kind: TypeId::of::<T>(),
			name: name.to_owned(),
		};
		let group = self
			.groups
			.lock()
			.entry(key)
			.or_insert_with(|| {
				tracing::debug!(group = name, "creating plugin group");
				Arc::new(Group::<T>::with_policy(name, self.policy)) as Arc<dyn Any + Send + Sync>
			})
			.clone();
		// The TypeId half of the key pins the stored group's kind to T.
		group.downcast().expect("group symbol kind mismatch")
	}

	fn lookup<T: Send + Sync + 'static>(&self, name: &str) -> Option<Arc<Group<T>>> {
		let key = GroupKey {
			kind: TypeId::of::<T>(),
			name: name.to_owned(),
		};
		let group = self.groups.lock().get(&key)?.clone();
		Some(group.downcast().expect("group symbol kind mismatch"))
	}

	/// Symbol values of the named group, in resolved order. Empty for a
	/// group nobody has touched; does not create the group.
	pub fn values<T: Clone + Send + Sync + 'static>(&self, name: &str) -> Vec<T> {
		self.lookup::<T>(name).map(|g| g.values()).unwrap_or_default()
	}

	/// Plugin names of the named group, in resolved order.
	pub fn owners<T: Clone + Send + Sync + 'static>(&self, name: &str) -> Vec<String> {
		self.lookup::<T>(name).map(|g| g.owners()).unwrap_or_default()
	}

	/// The first symbol value exposed by `owner` in the named group.
	pub fn value_of<T: Clone + Send + Sync + 'static>(&self, name: &str, owner: &str) -> Option<T> {
		self.lookup::<T>(name)?.value_of(owner)
	}

	/// Names of all groups created so far, sorted and deduplicated across
	/// symbol kinds. For logging and diagnostics.
	pub fn group_names(&self) -> Vec<String> {
		let groups = self.groups.lock();
		let mut names: Vec<String> = groups.keys().map(|k| k.name.clone()).collect();
		names.sort();
		names.dedup();
		names
	}

	/// Number of distinct groups created so far.
	pub fn len(&self) -> usize {
		self.groups.lock().len()
	}

	/// True if no group has been created yet.
	pub fn is_empty(&self) -> bool {
		self.groups.lock().is_empty()
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("policy", &self.policy)
			.field("groups", &self.group_names())
			.finish()
	}
}
