//! Serializable copy of a [`FacilityState`], for external caching.
//!
//! The graph is not stored: it is fully determined by the departments and the transport
//! history, and is rebuilt on load.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::department::{CENTROID, Department};
use crate::error::Result;
use crate::facility::{FacilityBounds, FacilityState};
use crate::geom::Point;
use crate::transport::TransportRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSnapshot {
    pub label: String,
    pub boundary: Vec<Point>,
    /// Registered points other than the centroid, in registration order.
    #[serde(default)]
    pub points: IndexMap<String, Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilitySnapshot {
    pub bounds: FacilityBounds,
    pub departments: Vec<DepartmentSnapshot>,
    #[serde(default)]
    pub records: Vec<TransportRecord>,
}

impl FacilityState {
    pub fn snapshot(&self) -> FacilitySnapshot {
        FacilitySnapshot {
            bounds: self.bounds(),
            departments: self
                .departments()
                .map(|d| DepartmentSnapshot {
                    label: d.label().to_string(),
                    boundary: d.boundary().to_vec(),
                    points: d
                        .points()
                        .iter()
                        .filter(|(name, _)| name.as_str() != CENTROID)
                        .map(|(name, p)| (name.clone(), *p))
                        .collect(),
                })
                .collect(),
            records: self.records().to_vec(),
        }
    }

    /// Rebuilds a facility, revalidating every department and replaying the transport history.
    pub fn from_snapshot(snapshot: &FacilitySnapshot) -> Result<Self> {
        let bounds = FacilityBounds::new(snapshot.bounds.max_x, snapshot.bounds.max_y)?;
        let mut state = FacilityState::with_bounds(bounds);
        for d in &snapshot.departments {
            let dept = Department::with_points(
                d.label.clone(),
                d.boundary.clone(),
                d.points.iter().map(|(name, p)| (name.clone(), *p)),
            )?;
            state.add_department(dept)?;
        }
        for record in &snapshot.records {
            state.add_transport_record(record.clone())?;
        }
        Ok(state)
    }
}
