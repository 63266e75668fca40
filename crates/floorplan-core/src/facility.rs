//! The facility: a bounding rectangle, its departments and the transport graph between them.

use floorgraph::{LabelIndex, LabeledMatrix};
use indexmap::IndexMap;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::department::{CENTROID, Department, vertex_label};
use crate::error::{Error, Result};
use crate::geom::Point;
use crate::transport::{
    TransportGraph, TransportOutcome, TransportRecord, record_edge, transport_graph_options,
};

/// Facility extent. Departments must lie within `[0, max_x] × [0, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacilityBounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl FacilityBounds {
    pub fn new(max_x: f64, max_y: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(max_x) && valid(max_y)) {
            return Err(Error::NonPositiveBounds { max_x, max_y });
        }
        Ok(Self { max_x, max_y })
    }

    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.max_x).contains(&p.x) && (0.0..=self.max_y).contains(&p.y)
    }
}

#[derive(Debug, Clone)]
pub struct FacilityState {
    bounds: FacilityBounds,
    departments: IndexMap<String, Department>,
    graph: TransportGraph,
    records: Vec<TransportRecord>,
    self_loop_quantity: i64,
}

impl FacilityState {
    pub fn new(max_x: f64, max_y: f64) -> Result<Self> {
        Ok(Self::with_bounds(FacilityBounds::new(max_x, max_y)?))
    }

    pub fn with_bounds(bounds: FacilityBounds) -> Self {
        Self {
            bounds,
            departments: IndexMap::new(),
            graph: TransportGraph::new(transport_graph_options()),
            records: Vec::new(),
            self_loop_quantity: 0,
        }
    }

    pub fn bounds(&self) -> FacilityBounds {
        self.bounds
    }

    /// Registers a department and adds one graph vertex `<department>.<point>` per named point.
    ///
    /// Nothing changes if the department is out of bounds, its label is taken, or one of its
    /// points coincides with a vertex already in the graph.
    pub fn add_department(&mut self, department: Department) -> Result<()> {
        let label = department.label().to_string();
        if self.departments.contains_key(&label) {
            return Err(Error::DuplicateDepartment { label });
        }
        if !department.boundary().iter().all(|p| self.bounds.contains(*p)) {
            return Err(Error::OutOfBounds {
                label,
                max_x: self.bounds.max_x,
                max_y: self.bounds.max_y,
            });
        }
        for p in department.points().values() {
            self.ensure_free_position(*p)?;
        }

        for (name, p) in department.points() {
            self.graph.add_vertex(vertex_label(&label, name), Some(*p))?;
        }
        tracing::debug!(
            department = %label,
            area = department.area(),
            points = department.points().len(),
            "registered department"
        );
        self.departments.insert(label, department);
        Ok(())
    }

    /// Registers a named interior point on an already added department.
    pub fn register_point(&mut self, department: &str, name: impl Into<String>, p: Point) -> Result<()> {
        let name = name.into();
        let Some(dept) = self.departments.get_mut(department) else {
            return Err(Error::UnknownDepartment {
                label: department.to_string(),
            });
        };
        dept.register_point(name.clone(), p)?;
        if let Err(err) = self.graph.add_vertex(vertex_label(department, &name), Some(p)) {
            dept.remove_point(&name);
            return Err(err.into());
        }
        Ok(())
    }

    fn ensure_free_position(&self, p: Point) -> Result<()> {
        if self.graph.vertex_by_coordinates(p)?.is_some() {
            return Err(floorgraph::Error::DuplicateCoordinates { x: p.x, y: p.y }.into());
        }
        Ok(())
    }

    pub fn department(&self, label: &str) -> Option<&Department> {
        self.departments.get(label)
    }

    /// Departments in registration order.
    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.values()
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    /// Department labels in ascending order; the row/column order of the cost matrices.
    pub fn department_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.departments.keys().cloned().collect();
        labels.sort_unstable();
        labels
    }

    pub fn graph(&self) -> &TransportGraph {
        &self.graph
    }

    pub(crate) fn graph_mut(&mut self) -> &mut TransportGraph {
        &mut self.graph
    }

    /// Every accepted transport record, self loops included, in ingestion order.
    pub fn records(&self) -> &[TransportRecord] {
        &self.records
    }

    pub(crate) fn push_record(&mut self, record: TransportRecord) {
        self.records.push(record);
    }

    /// Total quantity of records whose source and destination are the same department.
    pub fn self_loop_quantity(&self) -> i64 {
        self.self_loop_quantity
    }

    pub(crate) fn tally_self_loop(&mut self, quantity: i64) {
        self.self_loop_quantity += quantity;
    }

    /// Euclidean distance between department centroids, rows and columns in label order.
    pub fn distance_matrix(&self) -> Result<LabeledMatrix<f64>> {
        let index = LabelIndex::new(self.department_labels());
        let n = index.len();
        let mut m = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&index.labels()[i], &index.labels()[j]);
                let d = self
                    .graph
                    .euclidean_distance(&vertex_label(a, CENTROID), &vertex_label(b, CENTROID))?;
                m[(i, j)] = d;
                m[(j, i)] = d;
            }
        }
        Ok(LabeledMatrix { index, matrix: m })
    }

    /// Aggregated transported quantity between department centroids; `0` without an edge.
    ///
    /// A missing centroid vertex is an error, not an absent flow.
    pub fn flow_matrix(&self) -> Result<LabeledMatrix<f64>> {
        let index = LabelIndex::new(self.department_labels());
        let n = index.len();
        let mut m = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (a, b) = (&index.labels()[i], &index.labels()[j]);
                m[(i, j)] = match self
                    .graph
                    .edge_weight(&vertex_label(a, CENTROID), &vertex_label(b, CENTROID))
                {
                    Ok(w) => w,
                    Err(floorgraph::Error::EdgeNotFound { .. }) => 0.0,
                    Err(err) => return Err(err.into()),
                };
            }
        }
        Ok(LabeledMatrix { index, matrix: m })
    }

    /// Exchanges the positions of two departments.
    ///
    /// The department records (shape, named points) stay where they are and trade labels; graph
    /// vertices `<a>.x` and `<b>.y` are renamed in one batch and the edge set is rebuilt from the
    /// recorded transport history, since flow follows the department identity and not the spot.
    pub fn swap_departments(&mut self, a: &str, b: &str) -> Result<()> {
        for label in [a, b] {
            if !self.departments.contains_key(label) {
                return Err(Error::UnknownDepartment {
                    label: label.to_string(),
                });
            }
        }
        if a == b {
            return Ok(());
        }

        let mut renames = Vec::new();
        for (from, to) in [(a, b), (b, a)] {
            let Some(dept) = self.departments.get(from) else {
                continue;
            };
            for name in dept.points().keys() {
                let old = vertex_label(from, name);
                let id = self
                    .graph
                    .vertex_id(&old)
                    .ok_or(floorgraph::Error::VertexNotFound { label: old })?;
                renames.push((id, vertex_label(to, name)));
            }
        }
        self.graph.rename_vertices(&renames)?;

        let (Some(mut slot_a), Some(mut slot_b)) =
            (self.departments.get(a).cloned(), self.departments.get(b).cloned())
        else {
            return Ok(());
        };
        slot_a.set_label(b.to_string());
        slot_b.set_label(a.to_string());
        self.departments.insert(a.to_string(), slot_b);
        self.departments.insert(b.to_string(), slot_a);

        self.rebuild_edges()
    }

    /// Drops every edge and replays the recorded transport history against the current labels.
    pub fn rebuild_edges(&mut self) -> Result<()> {
        self.graph.clear_edges();
        self.self_loop_quantity = 0;
        let records = std::mem::take(&mut self.records);
        let mut replayed = Ok(());
        for record in &records {
            match record_edge(&mut self.graph, record) {
                Ok(TransportOutcome::SelfLoop { quantity }) => {
                    self.self_loop_quantity += quantity;
                }
                Ok(_) => {}
                Err(err) => {
                    replayed = Err(err);
                    break;
                }
            }
        }
        self.records = records;
        replayed
    }
}
