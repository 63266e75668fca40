//! Graph configuration options.

use serde::{Deserialize, Serialize};

/// Fixed at construction time.
///
/// - `coordinates`: every vertex carries an `(x, y)` position and positions are unique.
/// - `explicit_weight`: edges take the caller-supplied weight. Otherwise, when `coordinates` is
///   set, the weight is the Euclidean distance between the endpoints (and `1.0` without
///   coordinates).
/// - `aggregate_weight`: inserting an existing edge adds the new weight to the stored one
///   instead of being a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    pub directed: bool,
    pub coordinates: bool,
    pub explicit_weight: bool,
    pub aggregate_weight: bool,
}
