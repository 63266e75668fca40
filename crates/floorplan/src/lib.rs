#![forbid(unsafe_code)]

//! `floorplan` models a factory floor as polygon departments linked by transport flows, and
//! improves the department arrangement with the CRAFT heuristic.
//!
//! # Features
//!
//! - `optimize` (default): CRAFT simulated annealing (`floorplan::optimize`)

pub use floorgraph as graph;
pub use floorplan_core::*;

/// Builds a facility from a department source and a batch of raw transport rows.
///
/// Department errors abort the build; bad transport rows are skipped and counted in the
/// returned report.
pub fn load_facility<I>(
    bounds: FacilityBounds,
    departments: &[DepartmentSnapshot],
    rows: I,
    range: Option<&DateRange>,
) -> Result<(FacilityState, IngestReport)>
where
    I: IntoIterator<Item = RawTransportRecord>,
{
    let mut state = FacilityState::with_bounds(FacilityBounds::new(bounds.max_x, bounds.max_y)?);
    for d in departments {
        let dept = Department::with_points(
            d.label.clone(),
            d.boundary.clone(),
            d.points.iter().map(|(name, p)| (name.clone(), *p)),
        )?;
        state.add_department(dept)?;
    }
    let report = state.ingest(rows, range);
    Ok((state, report))
}

#[cfg(feature = "optimize")]
pub mod optimize {
    pub use craft::{
        Craft, CraftOptions, CraftOutcome, UnitCostTable, acceptance_probability, craft_cost,
    };

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Facility(#[from] floorplan_core::Error),
        #[error(transparent)]
        Optimize(#[from] craft::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Loads a facility and runs one CRAFT optimization on it.
    pub fn optimize_layout<I>(
        bounds: floorplan_core::FacilityBounds,
        departments: &[floorplan_core::DepartmentSnapshot],
        rows: I,
        range: Option<&floorplan_core::DateRange>,
        options: CraftOptions,
        unit_costs: UnitCostTable,
    ) -> Result<CraftOutcome>
    where
        I: IntoIterator<Item = floorplan_core::RawTransportRecord>,
    {
        let (state, _report) = crate::load_facility(bounds, departments, rows, range)?;
        Ok(Craft::new(state, options)
            .with_unit_costs(unit_costs)
            .optimize()?)
    }
}
