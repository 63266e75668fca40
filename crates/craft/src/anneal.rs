//! Simulated annealing over department swaps.
//!
//! Each iteration swaps two uniformly chosen departments of the current layout, rebuilds the
//! transport edges, and accepts the candidate with the Metropolis probability. The best layout
//! ever accepted is kept apart from the walk and is what the run returns.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use floorplan_core::FacilityState;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use crate::cost::{UnitCostTable, craft_cost};
use crate::error::{Error, Result};
use crate::options::CraftOptions;

/// Probability of moving from a layout costing `current` to one costing `candidate`.
///
/// Strictly cheaper candidates are always accepted. Otherwise the probability is
/// `exp((current - candidate) / temperature)`, which tends to `0` for worse candidates as the
/// temperature approaches zero. A non-positive temperature accepts only strict improvements.
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate < current {
        return 1.0;
    }
    if temperature <= 0.0 {
        return 0.0;
    }
    ((current - candidate) / temperature).exp()
}

#[derive(Debug, Clone)]
pub struct CraftOutcome {
    pub state: FacilityState,
    pub cost: f64,
    /// Best cost before the first iteration and after each one; never increases.
    pub history: Vec<f64>,
    pub iterations: usize,
    pub accepted: usize,
}

impl CraftOutcome {
    pub fn into_parts(self) -> (FacilityState, f64) {
        (self.state, self.cost)
    }
}

#[derive(Debug, Clone)]
pub struct Craft {
    state: FacilityState,
    options: CraftOptions,
    unit_costs: UnitCostTable,
    cancel: Option<Arc<AtomicBool>>,
}

impl Craft {
    pub fn new(state: FacilityState, options: CraftOptions) -> Self {
        Self {
            state,
            options,
            unit_costs: UnitCostTable::default(),
            cancel: None,
        }
    }

    pub fn with_unit_costs(mut self, unit_costs: UnitCostTable) -> Self {
        self.unit_costs = unit_costs;
        self
    }

    /// Stops the run at the next iteration boundary once the flag is set.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn options(&self) -> &CraftOptions {
        &self.options
    }

    pub fn cost(&self, state: &FacilityState) -> Result<f64> {
        craft_cost(state, &self.unit_costs)
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn exhausted(&self, iterations: usize) -> bool {
        self.options.max_iterations.is_some_and(|max| iterations >= max)
    }

    /// Runs the annealing schedule on a copy of the initial state.
    pub fn optimize(&self) -> Result<CraftOutcome> {
        self.options.validate()?;
        let labels = self.state.department_labels();
        if labels.len() < 2 {
            return Err(Error::NotEnoughDepartments {
                count: labels.len(),
            });
        }

        let mut rng = StdRng::seed_from_u64(self.options.random_seed);
        let mut current = self.state.clone();
        let mut current_cost = self.cost(&current)?;
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut history = vec![best_cost];

        tracing::info!(
            departments = labels.len(),
            initial_cost = current_cost,
            initial_temperature = self.options.initial_temperature,
            cooling_factor = self.options.cooling_factor,
            "starting CRAFT optimization"
        );

        let mut temperature = self.options.initial_temperature;
        let mut iterations = 0;
        let mut accepted = 0;
        while temperature > 1.0 && !self.cancelled() && !self.exhausted(iterations) {
            let pair = sample(&mut rng, labels.len(), 2);
            let (a, b) = (&labels[pair.index(0)], &labels[pair.index(1)]);

            let mut candidate = current.clone();
            candidate.swap_departments(a, b)?;
            let candidate_cost = self.cost(&candidate)?;

            let p = acceptance_probability(current_cost, candidate_cost, temperature);
            let draw: f64 = rng.r#gen();
            let accept = draw < p;
            tracing::trace!(
                iteration = iterations,
                temperature,
                swap_a = %a,
                swap_b = %b,
                candidate_cost,
                accept,
                "annealing step"
            );

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted += 1;
                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }
            history.push(best_cost);
            temperature *= 1.0 - self.options.cooling_factor;
            iterations += 1;
        }

        tracing::info!(
            final_cost = best_cost,
            iterations,
            accepted,
            cancelled = self.cancelled(),
            "finished CRAFT optimization"
        );
        Ok(CraftOutcome {
            state: best,
            cost: best_cost,
            history,
            iterations,
            accepted,
        })
    }
}
