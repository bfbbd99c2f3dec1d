use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use wm_core::{LocationId, TileCoord};

/// Structural classification of a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// An outdoor area; the root of its own hierarchy.
    Outdoors,
    /// An indoor location with a direct exit to an outdoor area.
    Building,
    /// An indoor location nested inside other indoor locations.
    Room,
    /// Not (yet) classified, e.g. no exit was found.
    #[default]
    Unknown,
}

/// Everything the mapper derived about one location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationContext {
    /// Structural classification.
    #[serde(rename = "type")]
    pub kind: LocationType,
    /// The outdoor location this one ultimately belongs to.
    pub root: Option<LocationId>,
    /// The immediately enclosing location.
    pub parent: Option<LocationId>,
    /// Locations whose parent is this one.
    pub children: BTreeSet<LocationId>,
    /// Outdoor locations only: adjacent outdoor areas and the tile of the
    /// warp leading there.
    pub neighbors: BTreeMap<LocationId, TileCoord>,
    /// Doorstep in the parent through which this location is entered:
    /// the tile where the mapped exit from this location lands.
    pub warp: Option<TileCoord>,
}

impl LocationContext {
    /// A fresh context for an outdoor area rooted at itself.
    pub fn outdoors(id: &LocationId) -> Self {
        Self {
            kind: LocationType::Outdoors,
            root: Some(id.clone()),
            ..Self::default()
        }
    }

    /// Return `true` if this context is classified as outdoors.
    pub fn is_outdoors(&self) -> bool {
        self.kind == LocationType::Outdoors
    }

    /// Return `true` if a root outdoor area was found for this location.
    pub fn is_resolved(&self) -> bool {
        self.root.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_unresolved() {
        let ctx = LocationContext::default();
        assert_eq!(ctx.kind, LocationType::Unknown);
        assert!(!ctx.is_resolved());
        assert!(!ctx.is_outdoors());
        assert!(ctx.warp.is_none());
    }

    #[test]
    fn outdoors_context_roots_itself() {
        let id = LocationId::new("Beach");
        let ctx = LocationContext::outdoors(&id);
        assert!(ctx.is_outdoors());
        assert_eq!(ctx.root, Some(id));
        assert!(ctx.parent.is_none());
    }

    #[test]
    fn type_serializes_under_type_key() {
        let ctx = LocationContext::outdoors(&LocationId::new("Beach"));
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["type"], "outdoors");
        assert_eq!(json["root"], "Beach");
    }
}
