#![forbid(unsafe_code)]

//! CRAFT facility layout optimization.
//!
//! Departments of a [`FacilityState`] trade positions under a simulated annealing schedule; the
//! objective is the flow-distance-cost sum computed by [`craft_cost`].

pub mod anneal;
pub mod cost;
pub mod error;
pub mod options;

pub use anneal::{Craft, CraftOutcome, acceptance_probability};
pub use cost::{UnitCostTable, craft_cost};
pub use error::{Error, Result};
pub use options::CraftOptions;

use floorplan_core::FacilityState;

/// Optimizes a copy of `state` with unit costs of `1` and returns the best layout and its cost.
pub fn optimize(state: &FacilityState, options: CraftOptions) -> Result<(FacilityState, f64)> {
    Craft::new(state.clone(), options)
        .optimize()
        .map(CraftOutcome::into_parts)
}
