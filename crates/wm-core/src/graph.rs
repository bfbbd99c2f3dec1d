use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{WmError, WmResult};
use crate::location::{Location, LocationId};

/// Read access to a world's navigation graph.
///
/// This is the seam between the mapper and whatever owns the live world
/// data. Implementations must enumerate locations in a stable order,
/// because the mapper's tie-breaks follow enumeration and warp order.
pub trait WorldSource {
    /// The primary location list, in enumeration order.
    fn locations(&self) -> Vec<&Location>;

    /// Building interiors that the primary list does not contain.
    fn building_interiors(&self) -> Vec<&Location>;

    /// Look up a location by name across both lists.
    ///
    /// `None` marks a dangling warp target.
    fn resolve(&self, id: &str) -> Option<&Location>;
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Primary(usize),
    Interior(usize),
}

/// Serialized form of a [`WorldGraph`].
#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    locations: Vec<Location>,
    #[serde(default)]
    interiors: Vec<Location>,
}

/// An owned snapshot of a world's navigation graph.
#[derive(Debug, Clone, Default)]
pub struct WorldGraph {
    locations: Vec<Location>,
    interiors: Vec<Location>,

    // Index
    by_id: HashMap<LocationId, Slot>,
}

impl WorldGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Assembly
    // -----------------------------------------------------------------------

    /// Add a location to the primary list.
    pub fn add_location(&mut self, location: Location) -> WmResult<()> {
        self.check_new(&location.id)?;
        self.by_id
            .insert(location.id.clone(), Slot::Primary(self.locations.len()));
        self.locations.push(location);
        Ok(())
    }

    /// Add a building interior that is not part of the primary list.
    pub fn add_interior(&mut self, location: Location) -> WmResult<()> {
        self.check_new(&location.id)?;
        self.by_id
            .insert(location.id.clone(), Slot::Interior(self.interiors.len()));
        self.interiors.push(location);
        Ok(())
    }

    /// Chain form of [`WorldGraph::add_location`].
    pub fn with_location(mut self, location: Location) -> WmResult<Self> {
        self.add_location(location)?;
        Ok(self)
    }

    /// Chain form of [`WorldGraph::add_interior`].
    pub fn with_interior(mut self, location: Location) -> WmResult<Self> {
        self.add_interior(location)?;
        Ok(self)
    }

    fn check_new(&self, id: &LocationId) -> WmResult<()> {
        if id.is_empty() {
            return Err(WmError::EmptyId);
        }
        if self.by_id.contains_key(id) {
            return Err(WmError::DuplicateLocation(id.clone()));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    /// Parse a graph from a JSON document of the form
    /// `{ "locations": [...], "interiors": [...] }`.
    ///
    /// Identifiers are validated the same way as [`WorldGraph::add_location`].
    pub fn from_json(json: &str) -> WmResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        let mut graph = Self::new();
        for location in snapshot.locations {
            graph.add_location(location)?;
        }
        for location in snapshot.interiors {
            graph.add_interior(location)?;
        }
        Ok(graph)
    }

    /// Serialize the graph to pretty-printed JSON.
    pub fn to_json(&self) -> WmResult<String> {
        #[derive(Serialize)]
        struct SnapshotRef<'a> {
            locations: &'a [Location],
            interiors: &'a [Location],
        }

        let json = serde_json::to_string_pretty(&SnapshotRef {
            locations: &self.locations,
            interiors: &self.interiors,
        })?;
        Ok(json)
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of locations in the primary list.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of supplementary building interiors.
    pub fn interior_count(&self) -> usize {
        self.interiors.len()
    }
}

impl WorldSource for WorldGraph {
    fn locations(&self) -> Vec<&Location> {
        self.locations.iter().collect()
    }

    fn building_interiors(&self) -> Vec<&Location> {
        self.interiors.iter().collect()
    }

    fn resolve(&self, id: &str) -> Option<&Location> {
        match self.by_id.get(id)? {
            Slot::Primary(i) => self.locations.get(*i),
            Slot::Interior(i) => self.interiors.get(*i),
        }
    }
}
