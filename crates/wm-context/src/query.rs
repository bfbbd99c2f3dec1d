use std::borrow::Cow;
use std::collections::HashSet;

use wm_core::{LocationId, TileCoord};

use crate::config::MapConfig;
use crate::context::{LocationContext, LocationType};
use crate::store::ContextStore;

/// Read-only questions about a finished [`ContextStore`].
///
/// Every query is total: unknown or empty identifiers produce `None`,
/// `false`, or [`LocationType::Unknown`] instead of an error.
#[derive(Debug, Clone)]
pub struct LocationQuery<'a> {
    store: &'a ContextStore,
    config: Cow<'a, MapConfig>,
}

impl<'a> LocationQuery<'a> {
    /// Query `store` using the default configuration.
    pub fn new(store: &'a ContextStore) -> Self {
        Self {
            store,
            config: Cow::Owned(MapConfig::default()),
        }
    }

    /// Use `config` for sublevel naming.
    pub fn with_config(mut self, config: &'a MapConfig) -> Self {
        self.config = Cow::Borrowed(config);
        self
    }

    /// Find the building that encloses a location.
    ///
    /// Walks up the parent chain until a [`LocationType::Building`] is found.
    /// A location whose parent is its own root counts as its own building,
    /// and numbered sublevels resolve to their canonical name. If the chain
    /// loops, the location where the loop closes is returned.
    pub fn building(&self, id: &str) -> Option<LocationId> {
        let prefix = self.config.sublevel_prefix.as_str();
        let mut seen = HashSet::new();
        let mut current = id;
        loop {
            if !seen.insert(current) {
                return Some(LocationId::new(current));
            }
            if !prefix.is_empty() && current.starts_with(prefix) {
                return self.mines_location_name(current).map(LocationId::new);
            }

            let ctx = self.store.get(current)?;
            if ctx.kind == LocationType::Building {
                return Some(LocationId::new(current));
            }
            let parent = ctx.parent.as_ref()?;
            if ctx.root.as_ref() == Some(parent) {
                return Some(LocationId::new(current));
            }
            current = parent.as_str();
        }
    }

    /// Return `true` if the location is mapped as outdoors.
    pub fn is_outdoors(&self, id: &str) -> bool {
        !id.is_empty() && self.store.get(id).is_some_and(LocationContext::is_outdoors)
    }

    /// Canonical name of a numbered sublevel such as `UndergroundMine42`.
    ///
    /// Returns `None` if `id` lacks the sublevel prefix or the level is not
    /// a number.
    pub fn mines_location_name(&self, id: &str) -> Option<&str> {
        let level: i64 = id
            .strip_prefix(self.config.sublevel_prefix.as_str())?
            .parse()
            .ok()?;
        let name = if level > self.config.deep_sublevel_threshold {
            self.config.deep_sublevel_name.as_str()
        } else {
            self.config.sublevel_name.as_str()
        };
        Some(name)
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// The stored context of a location.
    pub fn context(&self, id: &str) -> Option<&'a LocationContext> {
        self.store.get(id)
    }

    /// The outdoor root a location belongs to.
    pub fn root_of(&self, id: &str) -> Option<&'a LocationId> {
        self.store.get(id)?.root.as_ref()
    }

    /// Classification of a location; `Unknown` if it is not mapped.
    pub fn kind_of(&self, id: &str) -> LocationType {
        self.store.get(id).map(|ctx| ctx.kind).unwrap_or_default()
    }

    /// Ancestors of a location, nearest first, stopping if the chain loops.
    pub fn parent_chain(&self, id: &str) -> Vec<&'a LocationId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        seen.insert(id);
        let mut parent = self.store.get(id).and_then(|ctx| ctx.parent.as_ref());
        while let Some(next) = parent {
            if !seen.insert(next.as_str()) {
                break;
            }
            chain.push(next);
            parent = self.store.get(next.as_str()).and_then(|ctx| ctx.parent.as_ref());
        }
        chain
    }

    /// Outdoor areas directly reachable from an outdoor location.
    pub fn outdoor_neighbors(&self, id: &str) -> Vec<(&'a LocationId, TileCoord)> {
        self.store
            .get(id)
            .map(|ctx| ctx.neighbors.iter().map(|(n, at)| (n, *at)).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_all;
    use wm_core::{Location, WorldGraph};

    fn valley() -> ContextStore {
        let world = WorldGraph::new()
            .with_location(
                Location::outdoors("Farm")
                    .warp_to("FarmHouse", (64, 15), (3, 11))
                    .warp_to("Forest", (40, 64), (68, 1)),
            )
            .unwrap()
            .with_location(Location::outdoors("Forest").warp_to("Farm", (68, 0), (40, 63)))
            .unwrap()
            .with_location(
                Location::indoors("FarmHouse")
                    .warp_to("Farm", (3, 12), (64, 16))
                    .warp_to("Bedroom", (10, 5), (2, 8)),
            )
            .unwrap()
            .with_location(
                Location::indoors("Bedroom")
                    .warp_to("FarmHouse", (2, 9), (10, 6))
                    .warp_to("Closet", (6, 2), (1, 3)),
            )
            .unwrap()
            .with_location(Location::indoors("Closet").warp_to("Bedroom", (1, 4), (6, 3)))
            .unwrap()
            .with_location(Location::outdoors("Mountain"))
            .unwrap()
            .with_location(Location::indoors("UndergroundMine100").warp_to("Mountain", (1, 1), (54, 6)))
            .unwrap()
            .with_location(Location::indoors("Sewer"))
            .unwrap();
        build_all(&world)
    }

    #[test]
    fn building_of_room_is_enclosing_building() {
        let store = valley();
        let query = LocationQuery::new(&store);
        assert_eq!(query.building("Bedroom"), Some(LocationId::new("FarmHouse")));
        assert_eq!(query.building("Closet"), Some(LocationId::new("FarmHouse")));
        assert_eq!(query.building("FarmHouse"), Some(LocationId::new("FarmHouse")));
    }

    #[test]
    fn building_of_outdoor_or_unknown_is_none() {
        let store = valley();
        let query = LocationQuery::new(&store);
        assert_eq!(query.building("Farm"), None);
        assert_eq!(query.building("Atlantis"), None);
        assert_eq!(query.building("Sewer"), None);
    }

    #[test]
    fn building_of_sublevel_is_canonical_name() {
        let store = valley();
        let query = LocationQuery::new(&store);
        assert_eq!(query.building("UndergroundMine100"), Some(LocationId::new("Mine")));
        assert_eq!(query.building("UndergroundMine121"), Some(LocationId::new("SkullCave")));
        assert_eq!(query.building("UndergroundMineX"), None);
    }

    #[test]
    fn building_of_room_under_root_is_itself() {
        let mut store = ContextStore::new();
        let lake = LocationId::new("Lake");
        store.insert(lake.clone(), LocationContext::outdoors(&lake));
        let hut = store.ensure(&LocationId::new("Hut"));
        hut.kind = LocationType::Room;
        hut.root = Some(lake.clone());
        hut.parent = Some(lake);

        let query = LocationQuery::new(&store);
        assert_eq!(query.building("Hut"), Some(LocationId::new("Hut")));
    }

    #[test]
    fn building_breaks_parent_cycles() {
        let mut store = ContextStore::new();
        let (x, y) = (LocationId::new("X"), LocationId::new("Y"));
        for (id, parent) in [(&x, &y), (&y, &x)] {
            let ctx = store.ensure(id);
            ctx.kind = LocationType::Room;
            ctx.root = Some(LocationId::new("Out"));
            ctx.parent = Some(parent.clone());
        }

        let query = LocationQuery::new(&store);
        assert_eq!(query.building("X"), Some(x));
        assert_eq!(query.parent_chain("Y"), [&LocationId::new("X")]);
    }

    #[test]
    fn is_outdoors_is_total() {
        let store = valley();
        let query = LocationQuery::new(&store);
        assert!(query.is_outdoors("Farm"));
        assert!(!query.is_outdoors("FarmHouse"));
        assert!(!query.is_outdoors("Atlantis"));
        assert!(!query.is_outdoors(""));
    }

    #[test]
    fn mines_location_name_by_level() {
        let store = ContextStore::new();
        let query = LocationQuery::new(&store);
        assert_eq!(query.mines_location_name("UndergroundMine100"), Some("Mine"));
        assert_eq!(query.mines_location_name("UndergroundMine120"), Some("Mine"));
        assert_eq!(query.mines_location_name("UndergroundMine121"), Some("SkullCave"));
        assert_eq!(query.mines_location_name("UndergroundMineX"), None);
        assert_eq!(query.mines_location_name("UndergroundMine"), None);
        assert_eq!(query.mines_location_name("Town"), None);
    }

    #[test]
    fn mines_location_name_follows_config() {
        let store = ContextStore::new();
        let config = MapConfig::default()
            .with_sublevel_prefix("Tower")
            .with_deep_sublevel_threshold(9)
            .with_sublevel_names("WizardTower", "Spire");
        let query = LocationQuery::new(&store).with_config(&config);
        assert_eq!(query.mines_location_name("Tower3"), Some("WizardTower"));
        assert_eq!(query.mines_location_name("Tower10"), Some("Spire"));
        assert_eq!(query.mines_location_name("UndergroundMine5"), None);
    }

    #[test]
    fn lookups() {
        let store = valley();
        let query = LocationQuery::new(&store);
        assert_eq!(query.root_of("Closet"), Some(&LocationId::new("Farm")));
        assert_eq!(query.kind_of("Closet"), LocationType::Room);
        assert_eq!(query.kind_of("Atlantis"), LocationType::Unknown);
        assert!(query.context("Sewer").is_some_and(|ctx| !ctx.is_resolved()));

        let chain: Vec<&str> = query
            .parent_chain("Closet")
            .into_iter()
            .map(LocationId::as_str)
            .collect();
        assert_eq!(chain, ["Bedroom", "FarmHouse", "Farm"]);

        assert_eq!(
            query.outdoor_neighbors("Farm"),
            [(&LocationId::new("Forest"), TileCoord::new(40, 64))]
        );
        assert!(query.outdoor_neighbors("Closet").is_empty());
    }
}
