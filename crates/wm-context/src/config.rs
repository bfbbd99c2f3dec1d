use serde::{Deserialize, Serialize};

/// Configuration for building and querying a location map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Name prefix of numbered sublevels, followed directly by the level.
    pub sublevel_prefix: String,
    /// Levels above this value resolve to the deep sublevel name.
    pub deep_sublevel_threshold: i64,
    /// Canonical name for sublevels at or below the threshold.
    pub sublevel_name: String,
    /// Canonical name for sublevels above the threshold.
    pub deep_sublevel_name: String,
    /// Whether supplementary building interiors are mapped as well.
    pub seed_building_interiors: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            sublevel_prefix: "UndergroundMine".to_string(),
            deep_sublevel_threshold: 120,
            sublevel_name: "Mine".to_string(),
            deep_sublevel_name: "SkullCave".to_string(),
            seed_building_interiors: true,
        }
    }
}

impl MapConfig {
    /// Set the name prefix of numbered sublevels.
    pub fn with_sublevel_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.sublevel_prefix = prefix.into();
        self
    }

    /// Set the level above which the deep sublevel name is used.
    pub fn with_deep_sublevel_threshold(mut self, level: i64) -> Self {
        self.deep_sublevel_threshold = level;
        self
    }

    /// Set the canonical names for regular and deep sublevels.
    pub fn with_sublevel_names(
        mut self,
        regular: impl Into<String>,
        deep: impl Into<String>,
    ) -> Self {
        self.sublevel_name = regular.into();
        self.deep_sublevel_name = deep.into();
        self
    }

    /// Enable or disable mapping of supplementary building interiors.
    pub fn with_building_interiors(mut self, seed: bool) -> Self {
        self.seed_building_interiors = seed;
        self
    }
}
