use std::sync::{Arc, Barrier};
use std::thread;

use crate::{PluginSpec, Registry};

type Probe = fn() -> u32;

fn probe() -> u32 {
	0
}

#[test]
fn concurrent_first_lookups_observe_one_instance() {
	let registry = Registry::new();
	let barrier = Barrier::new(8);

	let groups: Vec<_> = thread::scope(|scope| {
		(0..8)
			.map(|_| {
				scope.spawn(|| {
					barrier.wait();
					registry.group::<Probe>("contended")
				})
			})
			.collect::<Vec<_>>()
			.into_iter()
			.map(|handle| handle.join().unwrap())
			.collect()
	});

	for group in &groups[1..] {
		assert!(Arc::ptr_eq(&groups[0], group));
	}
}

#[test]
fn readers_never_observe_an_unresolved_list() {
	let registry = Registry::new();
	let group = registry.group::<Probe>("churn");
	group
		.register(PluginSpec::single("mmm", probe as Probe))
		.unwrap();

	// One writer keeps registering entries while readers hammer the group.
	// Placement-free entries must always come back lexicographically
	// sorted, whatever subset a reader happens to observe.
	let names = ["alpha", "zeta", "beta", "yankee", "gamma", "x-ray", "delta"];
	thread::scope(|scope| {
		let writer = scope.spawn(|| {
			for name in names {
				group.register(PluginSpec::single(name, probe as Probe)).unwrap();
			}
		});

		for _ in 0..4 {
			scope.spawn(|| {
				for _ in 0..100 {
					let owners = group.owners();
					assert!(!owners.is_empty());
					assert!(
						owners.is_sorted(),
						"reader observed unresolved order: {owners:?}"
					);
				}
			});
		}

		writer.join().unwrap();
	});

	// After the writer finishes, readers see the complete resolved list.
	assert_eq!(group.len(), names.len() + 1);
	assert!(group.owners().is_sorted());
}

#[test]
fn concurrent_registration_across_groups_does_not_interfere() {
	let registry = Registry::new();
	thread::scope(|scope| {
		for group_name in ["reds", "greens", "blues"] {
			let registry = &registry;
			scope.spawn(move || {
				let group = registry.group::<Probe>(group_name);
				for i in 0..50 {
					group
						.register(PluginSpec::single(format!("plug-{i:02}"), probe as Probe))
						.unwrap();
				}
			});
		}
	});

	for group_name in ["reds", "greens", "blues"] {
		let group = registry.group::<Probe>(group_name);
		assert_eq!(group.len(), 50);
		assert!(group.owners().is_sorted());
	}
}

#[test]
fn read_after_write_includes_the_new_entry() {
	let registry = Registry::new();
	let group = registry.group::<Probe>("raw");
	group
		.register(PluginSpec::single("early", probe as Probe))
		.unwrap();
	let _ = group.owners();

	group
		.register(PluginSpec::single("later", probe as Probe))
		.unwrap();

	thread::scope(|scope| {
		let handles: Vec<_> = (0..4)
			.map(|_| scope.spawn(|| group.owners()))
			.collect();
		for handle in handles {
			assert_eq!(handle.join().unwrap(), ["early", "later"]);
		}
	});
}
