use std::collections::HashSet;

use tracing::{debug, instrument, trace};
use wm_core::{Location, LocationId, TileCoord, Warp, WorldSource};

use crate::config::MapConfig;
use crate::context::{LocationContext, LocationType};
use crate::store::ContextStore;

/// Derives the location hierarchy from a world's warp graph.
///
/// Building runs two passes over the source:
///
/// 1. Every outdoor location becomes a root and records the outdoor areas
///    its warps lead to.
/// 2. Every indoor location not mapped yet is walked outward, one exit at
///    a time, until an outdoor root is reached. Each location on the walk
///    is classified as a building (its exit leads outdoors) or a room.
///
/// Only the first usable exit of a location is followed, in warp order.
/// Dangling warp targets are ignored, and a location with no way out keeps
/// an unresolved root.
#[derive(Debug)]
pub struct ContextBuilder<'w, S: WorldSource + ?Sized> {
    world: &'w S,
    config: MapConfig,
    store: ContextStore,
}

impl<'w, S: WorldSource + ?Sized> ContextBuilder<'w, S> {
    /// Create a builder reading from `world` with the default configuration.
    pub fn new(world: &'w S) -> Self {
        Self {
            world,
            config: MapConfig::default(),
            store: ContextStore::new(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: MapConfig) -> Self {
        self.config = config;
        self
    }

    /// Run both passes and return the finished store.
    #[instrument(level = "debug", skip_all)]
    pub fn build(mut self) -> ContextStore {
        let world = self.world;
        let locations = world.locations();
        let interiors = if self.config.seed_building_interiors {
            world.building_interiors()
        } else {
            Vec::new()
        };

        self.map_outdoor_neighbors(&locations);
        debug!(roots = self.store.len(), "mapped outdoor locations");

        self.map_indoor_roots(&locations, &interiors);
        debug!(
            contexts = self.store.len(),
            roots = self.store.roots().len(),
            unresolved = self.store.unresolved().len(),
            "mapped indoor locations"
        );

        self.store
    }

    // -----------------------------------------------------------------------
    // Pass 1: outdoor roots
    // -----------------------------------------------------------------------

    fn map_outdoor_neighbors(&mut self, locations: &[&'w Location]) {
        let world = self.world;
        for location in locations.iter().filter(|l| l.outdoors) {
            if !self.store.contains(location.id.as_str()) {
                self.store
                    .insert(location.id.clone(), LocationContext::outdoors(&location.id));
            }

            let ctx = self.store.ensure(&location.id);
            for warp in &location.warps {
                match world.resolve(warp.target.as_str()) {
                    Some(target) if target.outdoors => {
                        ctx.neighbors
                            .entry(warp.target.clone())
                            .or_insert(warp.source);
                    }
                    Some(_) => {}
                    None => {
                        trace!(from = %location.id, to = %warp.target, "skipping unresolved warp");
                    }
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Pass 2: indoor walks
    // -----------------------------------------------------------------------

    fn map_indoor_roots(&mut self, locations: &[&'w Location], interiors: &[&'w Location]) {
        let pending = locations
            .iter()
            .filter(|l| !l.outdoors)
            .chain(interiors.iter());

        for &location in pending {
            if self.store.contains(location.id.as_str()) {
                continue;
            }
            let mut path = HashSet::new();
            let root = self.map_root(location, None, None, false, None, &mut path);
            trace!(location = %location.id, root = ?root, "walked indoor location");
        }
    }

    /// Walk outward from `current` and return the root found, if any.
    ///
    /// `previous` is the location the walk came from and `entry` the tile in
    /// `current` where that location's exit landed. `path` holds every
    /// location already on this walk; exits back into it are not taken.
    fn map_root(
        &mut self,
        current: &'w Location,
        previous: Option<&'w Location>,
        root: Option<LocationId>,
        mut saw_outdoor_warp: bool,
        entry: Option<TileCoord>,
        path: &mut HashSet<&'w LocationId>,
    ) -> Option<LocationId> {
        // several warps can lead to the same place
        if previous.is_some_and(|prev| prev.id == current.id) {
            return root;
        }

        self.store.ensure(&current.id);
        if let (Some(prev), Some(entry)) = (previous, entry) {
            if let Some(prev_ctx) = self.store.get_mut(prev.id.as_str()) {
                prev_ctx.warp = Some(entry);
                if root.as_ref() != Some(&current.id) {
                    prev_ctx.parent = Some(current.id.clone());
                }
            }
        }

        if let Some(root) = root {
            self.store.ensure(&current.id).root = Some(root.clone());
            return Some(root);
        }

        if current.outdoors {
            let ctx = self.store.ensure(&current.id);
            ctx.kind = LocationType::Outdoors;
            ctx.root = Some(current.id.clone());
            if let Some(prev) = previous {
                ctx.children.insert(prev.id.clone());
            }
            return Some(current.id.clone());
        }

        let (warp, target) = self.first_exit(current, previous, path)?;

        if target.outdoors {
            saw_outdoor_warp = true;
        }
        if let Some(prev_ctx) = previous.and_then(|prev| self.store.get_mut(prev.id.as_str())) {
            prev_ctx.parent = Some(current.id.clone());
        }
        let ctx = self.store.ensure(&current.id);
        ctx.kind = if saw_outdoor_warp {
            LocationType::Building
        } else {
            LocationType::Room
        };
        if let Some(prev) = previous {
            ctx.children.insert(prev.id.clone());
        }

        path.insert(&current.id);
        let found = self.map_root(
            target,
            Some(current),
            None,
            saw_outdoor_warp,
            Some(warp.destination),
            path,
        );
        path.remove(&current.id);

        self.store.ensure(&current.id).root = found.clone();
        found
    }

    /// The first warp out of `current` that leads somewhere new.
    fn first_exit(
        &self,
        current: &'w Location,
        previous: Option<&'w Location>,
        path: &HashSet<&'w LocationId>,
    ) -> Option<(&'w Warp, &'w Location)> {
        let world = self.world;
        current.warps.iter().find_map(|warp| {
            if warp.target == current.id || previous.is_some_and(|prev| prev.id == warp.target) {
                return None;
            }
            if path.contains(&warp.target) {
                trace!(from = %current.id, to = %warp.target, "skipping warp back into walk");
                return None;
            }
            match world.resolve(warp.target.as_str()) {
                Some(target) => Some((warp, target)),
                None => {
                    trace!(from = %current.id, to = %warp.target, "skipping unresolved warp");
                    None
                }
            }
        })
    }
}

/// Build a fresh store from `world` with the default configuration.
pub fn build_all<S: WorldSource + ?Sized>(world: &S) -> ContextStore {
    ContextBuilder::new(world).build()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use wm_core::WorldGraph;

    /// Locations `L0..Ln`; warp indices past `n` point at missing locations.
    fn arb_world() -> impl Strategy<Value = WorldGraph> {
        (1usize..10).prop_flat_map(|n| {
            prop::collection::vec(
                (any::<bool>(), prop::collection::vec(0..n + 2, 0..4)),
                n,
            )
            .prop_map(move |specs| {
                let mut graph = WorldGraph::new();
                for (i, (outdoors, targets)) in specs.into_iter().enumerate() {
                    let name = format!("L{i}");
                    let mut location = if outdoors {
                        Location::outdoors(name)
                    } else {
                        Location::indoors(name)
                    };
                    for (k, t) in targets.into_iter().enumerate() {
                        let coord = (k as i32 + 1, t as i32);
                        location = location.warp_to(format!("L{t}"), coord, coord);
                    }
                    graph.add_location(location).unwrap();
                }
                graph
            })
        })
    }

    proptest! {
        #[test]
        fn every_location_is_mapped(world in arb_world()) {
            let store = build_all(&world);
            for location in world.locations() {
                prop_assert!(store.contains(location.id.as_str()));
            }
        }

        #[test]
        fn outdoors_iff_rooted_at_self(world in arb_world()) {
            let store = build_all(&world);
            for (id, ctx) in store.iter() {
                prop_assert_eq!(ctx.is_outdoors(), ctx.root.as_ref() == Some(id));
            }
        }

        #[test]
        fn roots_are_outdoor_locations(world in arb_world()) {
            let store = build_all(&world);
            for (_, ctx) in store.iter() {
                if let Some(root) = &ctx.root {
                    prop_assert!(store.get(root.as_str()).is_some_and(LocationContext::is_outdoors));
                }
            }
        }

        #[test]
        fn rebuilding_yields_same_store(world in arb_world()) {
            prop_assert_eq!(build_all(&world), build_all(&world));
        }
    }
}
