use tracing::info;
use wm_core::WorldSource;

use crate::builder::ContextBuilder;
use crate::config::MapConfig;
use crate::query::LocationQuery;
use crate::store::ContextStore;

/// A location map together with the configuration it was built with.
///
/// The map is never patched in place: when the world changes, call
/// [`LocationMap::rebuild`] with a fresh snapshot.
#[derive(Debug, Clone, Default)]
pub struct LocationMap {
    store: ContextStore,
    config: MapConfig,
}

impl LocationMap {
    /// Map `world` with the given configuration.
    pub fn build<S: WorldSource + ?Sized>(world: &S, config: MapConfig) -> Self {
        let store = ContextBuilder::new(world)
            .with_config(config.clone())
            .build();
        Self { store, config }
    }

    /// Replace the whole map with one built from `world`.
    pub fn rebuild<S: WorldSource + ?Sized>(&mut self, world: &S) {
        self.store = ContextBuilder::new(world)
            .with_config(self.config.clone())
            .build();
        info!(
            locations = self.store.len(),
            roots = self.store.roots().len(),
            "location map rebuilt"
        );
    }

    /// The computed contexts.
    pub fn store(&self) -> &ContextStore {
        &self.store
    }

    /// The configuration used for building and queries.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Start a query against the current map.
    pub fn query(&self) -> LocationQuery<'_> {
        LocationQuery::new(&self.store).with_config(&self.config)
    }
}
