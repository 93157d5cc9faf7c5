//! Ordered, hint-driven symbol registry for self-registering plugins.
//!
//! Independent plugins expose named callable or interface values
//! ("symbols") into shared, typed [`Group`]s; consumers read those symbols
//! back in one deterministic order. Plugins without a preference are ordered
//! lexicographically by name; a [`Placement`] directive lets a plugin nudge
//! its own entry to the front, to the back, or right next to a named peer.
//!
//! # Core types
//!
//! - [`Registry`]: directory handing out one [`Group`] per (symbol kind,
//!   name) key.
//! - [`Group`]: the ordered collection of one symbol kind; resolves its
//!   order lazily on first read after a write.
//! - [`PluginSpec`] / [`Entry`] / [`NamedSymbol`]: what a plugin registers
//!   and what a query returns.
//! - [`Placement`]: the `""`/`"<"`/`">"`/`"<foo"`/`">foo"` directive,
//!   parsed into a typed value.
//! - [`PluginDef`] + [`static_plugin!`]: link-time self-registration for
//!   statically linked plugin crates, collected via `inventory`.
//!
//! # Example
//!
//! ```
//! use plugdock_registry::{Placement, PluginSpec, Registry};
//!
//! type Renderer = fn(&str) -> String;
//!
//! fn plain(input: &str) -> String {
//! 	input.to_owned()
//! }
//! fn loud(input: &str) -> String {
//! 	input.to_uppercase()
//! }
//!
//! let registry = Registry::new();
//! let renderers = registry.group::<Renderer>("renderers");
//!
//! renderers
//! 	.register(PluginSpec::single("plain", plain as Renderer))
//! 	.unwrap();
//! renderers
//! 	.register(
//! 		PluginSpec::single("loud", loud as Renderer).placement(Placement::Front),
//! 	)
//! 	.unwrap();
//!
//! assert_eq!(renderers.owners(), ["loud", "plain"]);
//! for render in renderers.values() {
//! 	println!("{}", render("hi"));
//! }
//! ```

mod error;
mod group;
mod order;
mod placement;
mod plugin;
mod registry;
mod symbol;

pub use error::RegistryError;
pub use group::{DuplicatePolicy, Group, Stash};
pub use placement::Placement;
pub use plugin::{PluginDef, register_static_plugins};
pub use registry::Registry;
pub use symbol::{Entry, NamedSymbol, PluginSpec};

// Re-exported for the `static_plugin!` macro expansion.
pub use inventory;

#[cfg(test)]
mod tests;
