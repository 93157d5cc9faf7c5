//! Two statically linked demo plugins.
//!
//! Each plugin submits a registration hook through
//! [`static_plugin!`](plugdock_registry::static_plugin); an application that
//! links this crate picks both up with
//! [`register_static_plugins`](plugdock_registry::register_static_plugins)
//! without naming either plugin anywhere. The "marvin" plugin also
//! demonstrates a placement directive: it insists on going first.

use plugdock_registry::{Placement, PluginSpec, Registry, RegistryError, static_plugin};

/// Symbol kind shared by the demo plugins: a quote supplier.
pub type Quote = fn() -> &'static str;

/// Group the demo plugins register their quote symbols in.
pub const QUOTES_GROUP: &str = "quotes";

fn deep_thought_quote() -> &'static str {
	"forty-two"
}

fn register_deep_thought(registry: &Registry) -> Result<(), RegistryError> {
	registry
		.group::<Quote>(QUOTES_GROUP)
		.register(PluginSpec::new("deep-thought").symbol("quote", deep_thought_quote as Quote))
}

static_plugin!("deep-thought", register_deep_thought);

fn marvin_quote() -> &'static str {
	"Life. Don't talk to me about life."
}

fn register_marvin(registry: &Registry) -> Result<(), RegistryError> {
	registry.group::<Quote>(QUOTES_GROUP).register(
		PluginSpec::new("marvin")
			.placement(Placement::Front)
			.symbol("quote", marvin_quote as Quote),
	)
}

static_plugin!("marvin", register_marvin);
