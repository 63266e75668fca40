//! CRAFT objective: `Σ distance(i, j) · unit_cost(i, j) · flow(i, j)` over department pairs.

use floorplan_core::FacilityState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-pair cost of moving one unit over one unit of distance.
///
/// Lookups are symmetric: `(a, b)` falls back to `(b, a)` and then to `default_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitCostTable {
    pub default_cost: f64,
    pub costs: IndexMap<String, IndexMap<String, f64>>,
}

impl Default for UnitCostTable {
    fn default() -> Self {
        Self::with_default(1.0)
    }
}

impl UnitCostTable {
    pub fn with_default(default_cost: f64) -> Self {
        Self {
            default_cost,
            costs: IndexMap::new(),
        }
    }

    pub fn set(&mut self, a: impl Into<String>, b: impl Into<String>, cost: f64) {
        self.costs.entry(a.into()).or_default().insert(b.into(), cost);
    }

    pub fn get(&self, a: &str, b: &str) -> f64 {
        let lookup = |x: &str, y: &str| self.costs.get(x).and_then(|row| row.get(y)).copied();
        lookup(a, b).or_else(|| lookup(b, a)).unwrap_or(self.default_cost)
    }
}

/// Layout cost of `state`, summed over unordered department pairs.
///
/// Fails with [`Error::NonFiniteCost`] when the total is not finite.
pub fn craft_cost(state: &FacilityState, unit_costs: &UnitCostTable) -> Result<f64> {
    let distance = state.distance_matrix()?;
    let flow = state.flow_matrix()?;
    let labels = distance.index.labels();

    let mut total = 0.0;
    for i in 0..labels.len() {
        for j in i..labels.len() {
            let f = flow.matrix[(i, j)];
            if f == 0.0 {
                continue;
            }
            total += distance.matrix[(i, j)] * unit_costs.get(&labels[i], &labels[j]) * f;
        }
    }

    if !total.is_finite() {
        return Err(Error::NonFiniteCost { cost: total });
    }
    Ok(total)
}
