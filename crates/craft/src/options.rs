use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Annealing schedule.
///
/// The temperature starts at `initial_temperature` and is multiplied by `1 - cooling_factor`
/// after every iteration; the run ends once it drops to `1` or below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftOptions {
    pub initial_temperature: f64,
    pub cooling_factor: f64,
    /// Seed for the move selection and acceptance draws. A fixed seed gives a fixed trajectory.
    pub random_seed: u64,
    /// Optional hard cap on the number of iterations.
    pub max_iterations: Option<usize>,
}

impl Default for CraftOptions {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_factor: 0.03,
            random_seed: 0,
            max_iterations: None,
        }
    }
}

impl CraftOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 1.0) {
            return Err(Error::InvalidOptions {
                message: format!(
                    "initial_temperature must be finite and greater than 1, got {}",
                    self.initial_temperature
                ),
            });
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(Error::InvalidOptions {
                message: format!(
                    "cooling_factor must lie strictly between 0 and 1, got {}",
                    self.cooling_factor
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(CraftOptions::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_schedules_that_never_cool() {
        for cooling_factor in [0.0, 1.0, -0.5, f64::NAN] {
            let opts = CraftOptions {
                cooling_factor,
                ..Default::default()
            };
            assert!(opts.validate().is_err());
        }
        let opts = CraftOptions {
            initial_temperature: 1.0,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }
}
