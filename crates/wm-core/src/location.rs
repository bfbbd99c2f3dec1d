use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique name of a location in the world graph.
///
/// Identifiers are case-sensitive and compare as plain strings, so a
/// `BTreeMap<LocationId, _>` can be looked up with a `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    /// Create an identifier from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return `true` if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for LocationId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for LocationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LocationId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocationId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A tile position inside a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    /// Horizontal tile index.
    pub x: i32,
    /// Vertical tile index.
    pub y: i32,
}

impl TileCoord {
    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A directed transition from one location into another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warp {
    /// Name of the location this warp leads to.
    pub target: LocationId,
    /// Where the warp sits inside the owning location.
    pub source: TileCoord,
    /// Where the warp lands inside the target location.
    pub destination: TileCoord,
}

impl Warp {
    /// Create a warp to `target`, sitting at `source` and landing at `destination`.
    pub fn new(
        target: impl Into<LocationId>,
        source: impl Into<TileCoord>,
        destination: impl Into<TileCoord>,
    ) -> Self {
        Self {
            target: target.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// A discrete area of the world together with its outgoing warps.
///
/// Warps keep the order they were added in; the mapper relies on that
/// order when a location has more than one exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The location's unique name.
    pub id: LocationId,
    /// Whether the location is an outdoor area.
    #[serde(default)]
    pub outdoors: bool,
    /// Outgoing warps in source order.
    #[serde(default)]
    pub warps: Vec<Warp>,
}

impl Location {
    /// Create an outdoor location with no warps.
    pub fn outdoors(id: impl Into<LocationId>) -> Self {
        Self {
            id: id.into(),
            outdoors: true,
            warps: Vec::new(),
        }
    }

    /// Create an indoor location with no warps.
    pub fn indoors(id: impl Into<LocationId>) -> Self {
        Self {
            id: id.into(),
            outdoors: false,
            warps: Vec::new(),
        }
    }

    /// Append a warp to this location.
    pub fn with_warp(mut self, warp: Warp) -> Self {
        self.warps.push(warp);
        self
    }

    /// Append a warp to `target` sitting at `source` and landing at `destination`.
    pub fn warp_to(
        self,
        target: impl Into<LocationId>,
        source: impl Into<TileCoord>,
        destination: impl Into<TileCoord>,
    ) -> Self {
        self.with_warp(Warp::new(target, source, destination))
    }
}
