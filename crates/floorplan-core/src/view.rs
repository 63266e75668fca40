//! Visualization projection of a facility.
//!
//! The JSON shape is
//! `{"facility": {<label>: {"boundaries": [[x, y], ..], "points": {<name>: [x, y]}}}, "edges": [[source, target, weight], ..]}`
//! with departments in registration order and each undirected edge listed once.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::facility::FacilityState;
use crate::geom::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentView {
    pub boundaries: Vec<[f64; 2]>,
    pub points: IndexMap<String, [f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationData {
    pub facility: IndexMap<String, DepartmentView>,
    pub edges: Vec<(String, String, f64)>,
}

impl VisualizationData {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

impl FacilityState {
    pub fn visualization(&self) -> VisualizationData {
        let facility = self
            .departments()
            .map(|d| {
                let view = DepartmentView {
                    boundaries: d.boundary().iter().copied().map(xy).collect(),
                    points: d.points().iter().map(|(name, p)| (name.clone(), xy(*p))).collect(),
                };
                (d.label().to_string(), view)
            })
            .collect();
        let edges = self
            .graph()
            .edges()
            .into_iter()
            .map(|e| (e.source.to_string(), e.target.to_string(), e.weight))
            .collect();
        VisualizationData { facility, edges }
    }
}
