//! End-to-end check that linking the demo plugin crate is all it takes for
//! its plugins to show up in a registry.

use plugdock_demo_plugin::{QUOTES_GROUP, Quote};
use plugdock_registry::{Registry, register_static_plugins};

#[test]
fn linked_plugins_register_themselves() {
	let registry = Registry::new();
	register_static_plugins(&registry).unwrap();

	let quotes = registry.group::<Quote>(QUOTES_GROUP);
	// "marvin" placed itself at the front, ahead of lexicographic order.
	assert_eq!(quotes.owners(), ["marvin", "deep-thought"]);

	let lines: Vec<&str> = quotes.values_named("quote").iter().map(|q| q()).collect();
	assert_eq!(lines, ["Life. Don't talk to me about life.", "forty-two"]);
}

#[test]
fn registries_collect_independently() {
	let first = Registry::new();
	register_static_plugins(&first).unwrap();
	let second = Registry::new();
	register_static_plugins(&second).unwrap();

	assert_eq!(
		first.owners::<Quote>(QUOTES_GROUP),
		second.owners::<Quote>(QUOTES_GROUP)
	);
}
