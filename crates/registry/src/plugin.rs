//! Link-time collection of statically linked plugins.
//!
//! Plugin crates submit a [`PluginDef`] through [`static_plugin!`]; the
//! application collects them all with [`register_static_plugins`] once it
//! has constructed its [`Registry`]. This replaces "the linker found it, so
//! it exists" self-registration without any filesystem discovery.

use crate::error::RegistryError;
use crate::registry::Registry;

/// One statically linked plugin's registration hook.
///
/// The hook receives the application's registry and performs the plugin's
/// [`Group::register`](crate::Group::register) calls, typically one per
/// group the plugin contributes to.
pub struct PluginDef {
	/// Plugin name, for logs and deterministic collection order.
	pub name: &'static str,
	/// Performs the plugin's registrations.
	pub register: fn(&Registry) -> Result<(), RegistryError>,
}

inventory::collect!(PluginDef);

/// Runs every [`PluginDef`] submitted anywhere in the linked program against
/// the given registry.
///
/// Defs are invoked in ascending plugin-name order so that collection order
/// never depends on link order. The first failing hook aborts the run; a
/// failing plugin is a wiring error that should surface at startup, not be
/// papered over.
pub fn register_static_plugins(registry: &Registry) -> Result<(), RegistryError> {
	let mut defs: Vec<&'static PluginDef> = inventory::iter::<PluginDef>.into_iter().collect();
	defs.sort_by_key(|def| def.name);

	for def in defs {
		tracing::debug!(plugin = def.name, "running static plugin registration");
		(def.register)(registry)?;
	}
	Ok(())
}

/// Submits a static plugin registration hook.
///
/// ```
/// use plugdock_registry::{PluginSpec, Registry, RegistryError, static_plugin};
///
/// fn greet() -> &'static str {
/// 	"hello"
/// }
///
/// fn register(registry: &Registry) -> Result<(), RegistryError> {
/// 	registry
/// 		.group::<fn() -> &'static str>("greeters")
/// 		.register(PluginSpec::single("english", greet as fn() -> &'static str))
/// }
///
/// static_plugin!("english", register);
/// ```
#[macro_export]
macro_rules! static_plugin {
	($name:literal, $register:expr) => {
		$crate::inventory::submit! {
			$crate::PluginDef {
				name: $name,
				register: $register,
			}
		}
	};
}
