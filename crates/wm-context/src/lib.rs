//! Location hierarchy mapping for Warpmap.
//!
//! Derives, from nothing but the warps between locations, which outdoor
//! area every location belongs to and whether it is a building or a room
//! nested inside one. A [`ContextBuilder`] walks a [`wm_core::WorldSource`]
//! and fills a [`ContextStore`]; [`LocationQuery`] answers questions about
//! the finished store. The store is rebuilt wholesale whenever the world
//! changes, for which [`LocationMap`] keeps store and configuration together.

/// The two-pass mapper that fills a store from a world graph.
pub mod builder;
/// Configuration for mapping and sublevel naming.
pub mod config;
/// Per-location results: classification, root, parent, children.
pub mod context;
/// A store bundled with its configuration, rebuilt on world change.
pub mod map;
/// Read-only queries over a finished store.
pub mod query;
/// The identifier-to-context store.
pub mod store;

/// Re-exports of [`builder::ContextBuilder`] and [`builder::build_all`].
pub use builder::{ContextBuilder, build_all};
/// Re-export of [`config::MapConfig`].
pub use config::MapConfig;
/// Re-exports of [`context::LocationContext`] and [`context::LocationType`].
pub use context::{LocationContext, LocationType};
/// Re-export of [`map::LocationMap`].
pub use map::LocationMap;
/// Re-export of [`query::LocationQuery`].
pub use query::LocationQuery;
/// Re-export of [`store::ContextStore`].
pub use store::ContextStore;
