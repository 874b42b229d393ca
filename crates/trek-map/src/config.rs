/// Path-finding settings for a [`GridMap`](crate::GridMap).
///
/// The metric is kept by name and only parsed when a heuristic is
/// requested, so an unknown name is reported by
/// [`GridMap::heuristic`](crate::GridMap::heuristic) and
/// [`GridMap::find_path`](crate::GridMap::find_path) rather than here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    /// Whether paths and range queries may step diagonally.
    pub allow_diagonal_movement: bool,
    /// One of `euclidean`, `manhattan` or `specialmanhattan`.
    pub distance_metric: String,
    /// Maximum path cost before search stops expanding. 0 = no limit.
    pub depth_constraint: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            allow_diagonal_movement: false,
            distance_metric: "manhattan".into(),
            depth_constraint: 0,
        }
    }
}

impl MapConfig {
    pub fn with_diagonal_movement(mut self, allow: bool) -> Self {
        self.allow_diagonal_movement = allow;
        self
    }

    pub fn with_distance_metric(mut self, name: impl Into<String>) -> Self {
        self.distance_metric = name.into();
        self
    }

    pub fn with_depth_constraint(mut self, depth: u32) -> Self {
        self.depth_constraint = depth;
        self
    }
}
