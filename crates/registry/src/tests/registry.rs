use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::{DuplicatePolicy, PluginSpec, Registry};

type Probe = fn() -> u32;

fn one() -> u32 {
	1
}
fn two() -> u32 {
	2
}

#[test]
fn hands_out_the_same_group_for_the_same_key() {
	let registry = Registry::new();
	let first = registry.group::<Probe>("probes");
	let second = registry.group::<Probe>("probes");
	assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn distinguishes_groups_by_symbol_kind() {
	let registry = Registry::new();
	let probes = registry.group::<Probe>("things");
	let labels = registry.group::<&'static str>("things");
	probes
		.register(PluginSpec::single("counter", one as Probe))
		.unwrap();

	// Same name, different kind: a separate, still empty group.
	assert!(labels.is_empty());
	assert_eq!(probes.len(), 1);
	assert_eq!(registry.len(), 2);
}

#[test]
fn registrations_survive_group_handle_drops() {
	let registry = Registry::new();
	registry
		.group::<Probe>("probes")
		.register(PluginSpec::single("counter", one as Probe))
		.unwrap();
	assert_eq!(registry.group::<Probe>("probes").owners(), ["counter"]);
}

#[test]
fn projects_values_owners_and_value_of() {
	let registry = Registry::new();
	let group = registry.group::<Probe>("probes");
	group
		.register(PluginSpec::single("uno", one as Probe))
		.unwrap();
	group
		.register(PluginSpec::single("dos", two as Probe))
		.unwrap();

	assert_eq!(registry.owners::<Probe>("probes"), ["dos", "uno"]);
	let values: Vec<u32> = registry
		.values::<Probe>("probes")
		.into_iter()
		.map(|f| f())
		.collect();
	assert_eq!(values, [2, 1]);
	assert_eq!(registry.value_of::<Probe>("probes", "uno").map(|f| f()), Some(1));
	assert_eq!(registry.value_of::<Probe>("probes", "tres").map(|f| f()), None);
}

#[test]
fn projections_do_not_create_groups() {
	let registry = Registry::new();
	assert!(registry.values::<Probe>("nothing").is_empty());
	assert!(registry.owners::<Probe>("nothing").is_empty());
	assert!(registry.value_of::<Probe>("nothing", "nobody").is_none());
	assert!(registry.is_empty());
}

#[test]
fn lists_created_group_names() {
	let registry = Registry::new();
	let _ = registry.group::<Probe>("zeta");
	let _ = registry.group::<Probe>("alpha");
	let _ = registry.group::<&'static str>("alpha");
	assert_eq!(registry.group_names(), ["alpha", "zeta"]);
}

#[test]
fn groups_inherit_the_registry_duplicate_policy() {
	let registry = Registry::with_policy(DuplicatePolicy::Ignore);
	let group = registry.group::<Probe>("probes");
	group
		.register(PluginSpec::single("counter", one as Probe))
		.unwrap();
	group
		.register(PluginSpec::single("counter", two as Probe))
		.unwrap();
	assert_eq!(group.value_of("counter").map(|f| f()), Some(1));
}

#[test]
fn fresh_registries_are_isolated() {
	let registry = Registry::new();
	registry
		.group::<Probe>("probes")
		.register(PluginSpec::single("counter", one as Probe))
		.unwrap();

	let other = Registry::new();
	assert!(other.group::<Probe>("probes").is_empty());
}
