//! World-graph input model for Warpmap: locations, warps, and snapshots.
//!
//! This crate describes the navigation graph the mapper consumes. It is
//! independent of the mapping algorithm: any type implementing
//! [`WorldSource`] can be mapped, and [`WorldGraph`] is an owned snapshot
//! you can assemble programmatically or deserialize from JSON.

/// Error types used throughout the crate.
pub mod error;
/// The world-graph snapshot and the source trait the mapper reads from.
pub mod graph;
/// Location identifiers, tile coordinates, and warps.
pub mod location;

/// Re-export error types.
pub use error::{WmError, WmResult};
/// Re-export graph types.
pub use graph::{WorldGraph, WorldSource};
/// Re-export location types.
pub use location::{Location, LocationId, TileCoord, Warp};
