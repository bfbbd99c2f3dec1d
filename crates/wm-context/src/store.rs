use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wm_core::{LocationId, WmResult};

use crate::context::{LocationContext, LocationType};

/// The computed context of every mapped location, keyed by identifier.
///
/// A store is filled by [`ContextBuilder`](crate::ContextBuilder) and is
/// read-only afterwards. Iteration is ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextStore {
    contexts: BTreeMap<LocationId, LocationContext>,
}

impl ContextStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get the context of a location.
    pub fn get(&self, id: &str) -> Option<&LocationContext> {
        self.contexts.get(id)
    }

    /// Return `true` if the location has a context.
    pub fn contains(&self, id: &str) -> bool {
        self.contexts.contains_key(id)
    }

    /// Iterate all contexts in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&LocationId, &LocationContext)> {
        self.contexts.iter()
    }

    /// Iterate all mapped identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &LocationId> {
        self.contexts.keys()
    }

    /// Identifiers of all outdoor roots.
    pub fn roots(&self) -> Vec<&LocationId> {
        self.of_type(LocationType::Outdoors)
    }

    /// Identifiers of all locations with the given classification.
    pub fn of_type(&self, kind: LocationType) -> Vec<&LocationId> {
        self.contexts
            .iter()
            .filter(|(_, ctx)| ctx.kind == kind)
            .map(|(id, _)| id)
            .collect()
    }

    /// Identifiers of locations for which no root was found.
    pub fn unresolved(&self) -> Vec<&LocationId> {
        self.contexts
            .iter()
            .filter(|(_, ctx)| !ctx.is_resolved())
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of mapped locations.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Return `true` if nothing has been mapped.
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Export the store as pretty-printed JSON, for inspection.
    pub fn to_json(&self) -> WmResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // -----------------------------------------------------------------------
    // Construction (builder only)
    // -----------------------------------------------------------------------

    pub(crate) fn insert(&mut self, id: LocationId, ctx: LocationContext) {
        self.contexts.insert(id, ctx);
    }

    /// Get the context of `id`, creating an empty one if absent.
    pub(crate) fn ensure(&mut self, id: &LocationId) -> &mut LocationContext {
        self.contexts.entry(id.clone()).or_default()
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut LocationContext> {
        self.contexts.get_mut(id)
    }
}
