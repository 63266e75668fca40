//! Graph container.
//!
//! Vertices are stored in an arena and addressed by [`VertexId`]. The display label of a vertex
//! can be changed after insertion (see [`Graph::rename_vertices`]); every internal structure keys
//! on the id, and the label index is the only place labels are hashed.

use rustc_hash::FxBuildHasher;
use std::fmt;

pub mod alg;
mod entries;
mod options;

pub(crate) use entries::EdgeEntry;
pub use entries::{EdgeData, EdgeRef, EdgeView, Vertex};
pub use options::GraphOptions;

use crate::error::{Error, Result};
use crate::Point;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Result of [`Graph::add_edge`] when the endpoints are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    /// A new edge (both halves for undirected graphs) was created.
    Inserted,
    /// The edge already existed and its weight was incremented.
    Aggregated,
    /// The edge already existed and aggregation is disabled; nothing changed.
    AlreadyExists,
}

/// Coordinates hashed by bit pattern; `-0.0` is folded into `0.0` so equal points collide.
type CoordKey = (u64, u64);

fn coord_key(p: Point) -> CoordKey {
    fn bits(v: f64) -> u64 {
        if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
    }
    (bits(p.x), bits(p.y))
}

#[derive(Debug, Clone)]
pub struct Graph<E: EdgeData = ()> {
    options: GraphOptions,

    vertices: Vec<Vertex>,
    label_index: HashMap<String, VertexId>,
    coord_index: HashMap<CoordKey, VertexId>,

    // One adjacency list per vertex. Undirected edges are stored as two entries that are kept
    // weight-consistent by every mutation.
    adjacency: Vec<Vec<EdgeEntry<E>>>,
    edge_index: HashMap<(VertexId, VertexId), usize>,
}

impl<E: EdgeData> Default for Graph<E> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<E: EdgeData> Graph<E> {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            vertices: Vec::new(),
            label_index: HashMap::default(),
            coord_index: HashMap::default(),
            adjacency: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn has_coordinates(&self) -> bool {
        self.options.coordinates
    }

    /// Adds a vertex and returns its stable id.
    ///
    /// Coordinates are required (and must be finite) when the graph stores coordinates, and are
    /// ignored otherwise. Fails if the label or the exact coordinates are already taken.
    pub fn add_vertex(&mut self, label: impl Into<String>, coordinates: Option<Point>) -> Result<VertexId> {
        let label = label.into();
        let coordinates = if self.options.coordinates {
            let Some(p) = coordinates else {
                return Err(Error::MissingCoordinates { label });
            };
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(Error::NonFiniteCoordinates { label });
            }
            Some(p)
        } else {
            None
        };

        if self.label_index.contains_key(label.as_str()) {
            return Err(Error::DuplicateLabel { label });
        }
        if let Some(p) = coordinates {
            if self.coord_index.contains_key(&coord_key(p)) {
                return Err(Error::DuplicateCoordinates { x: p.x, y: p.y });
            }
        }

        let id = VertexId(self.vertices.len());
        if let Some(p) = coordinates {
            self.coord_index.insert(coord_key(p), id);
        }
        self.label_index.insert(label.clone(), id);
        self.vertices.push(Vertex { label, coordinates });
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    pub fn has_vertex(&self, label: &str) -> bool {
        self.label_index.contains_key(label)
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.label_index.get(label).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    pub fn vertex_by_label(&self, label: &str) -> Option<&Vertex> {
        self.vertex_id(label).map(|id| &self.vertices[id.0])
    }

    /// Looks a vertex up by exact coordinates.
    pub fn vertex_by_coordinates(&self, p: Point) -> Result<Option<VertexId>> {
        if !self.options.coordinates {
            return Err(Error::GraphHasNoCoordinates);
        }
        Ok(self.coord_index.get(&coord_key(p)).copied())
    }

    pub fn coordinates(&self, label: &str) -> Result<Option<Point>> {
        let id = self.require(label)?;
        Ok(self.vertices[id.0].coordinates)
    }

    pub fn label(&self, id: VertexId) -> &str {
        &self.vertices[id.0].label
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of logical edges; the two halves of an undirected edge count once.
    pub fn edge_count(&self) -> usize {
        let halves: usize = self.adjacency.iter().map(Vec::len).sum();
        if self.options.directed { halves } else { halves / 2 }
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter().enumerate().map(|(i, v)| (VertexId(i), v))
    }

    pub fn labels_sorted(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.vertices.iter().map(|v| v.label.as_str()).collect();
        labels.sort_unstable();
        labels
    }

    pub fn add_edge(&mut self, source: &str, target: &str, weight: Option<f64>) -> Result<EdgeInsert> {
        self.add_edge_with(source, target, weight, E::default())
    }

    /// Adds an edge carrying `data`.
    ///
    /// Self loops are always rejected; callers that need to account for them must tally the
    /// weight themselves. When the edge (or, for undirected graphs, either half) exists, the
    /// insertion aggregates into it or is a no-op depending on [`GraphOptions::aggregate_weight`].
    pub fn add_edge_with(
        &mut self,
        source: &str,
        target: &str,
        weight: Option<f64>,
        data: E,
    ) -> Result<EdgeInsert> {
        let s = self.require(source)?;
        let t = self.require(target)?;
        if s == t {
            return Err(Error::SelfLoopNotSupported {
                label: source.to_string(),
            });
        }

        let forward = self.edge_index.get(&(s, t)).copied();
        let backward = if self.options.directed {
            None
        } else {
            self.edge_index.get(&(t, s)).copied()
        };

        if forward.is_some() || backward.is_some() {
            if !self.options.aggregate_weight {
                return Ok(EdgeInsert::AlreadyExists);
            }
            let weight = self.resolve_weight(s, t, weight)?;
            if let Some(slot) = forward {
                let e = &mut self.adjacency[s.0][slot];
                e.weight += weight;
                e.data.absorb(&data);
            }
            if let Some(slot) = backward {
                let e = &mut self.adjacency[t.0][slot];
                e.weight += weight;
                e.data.absorb(&data);
            }
            tracing::debug!(source, target, weight, "aggregated edge weight");
            return Ok(EdgeInsert::Aggregated);
        }

        let weight = self.resolve_weight(s, t, weight)?;
        if !self.options.directed {
            self.push_half(t, s, weight, data.clone());
        }
        self.push_half(s, t, weight, data);
        Ok(EdgeInsert::Inserted)
    }

    fn push_half(&mut self, s: VertexId, t: VertexId, weight: f64, data: E) {
        let slot = self.adjacency[s.0].len();
        self.adjacency[s.0].push(EdgeEntry {
            target: t,
            weight,
            data,
        });
        self.edge_index.insert((s, t), slot);
    }

    fn resolve_weight(&self, s: VertexId, t: VertexId, weight: Option<f64>) -> Result<f64> {
        if self.options.explicit_weight {
            return match weight {
                Some(w) if w.is_finite() => Ok(w),
                other => Err(Error::InvalidWeight { weight: other }),
            };
        }
        if self.options.coordinates {
            if let Some(d) = self.distance_between(s, t) {
                return Ok(d);
            }
        }
        Ok(1.0)
    }

    pub(crate) fn distance_between(&self, a: VertexId, b: VertexId) -> Option<f64> {
        let pa = self.vertices[a.0].coordinates?;
        let pb = self.vertices[b.0].coordinates?;
        Some(pa.distance_to(pb))
    }

    /// Euclidean distance between two vertices of a coordinate-bearing graph.
    pub fn euclidean_distance(&self, a: &str, b: &str) -> Result<f64> {
        if !self.options.coordinates {
            return Err(Error::GraphHasNoCoordinates);
        }
        let a = self.require(a)?;
        let b = self.require(b)?;
        self.distance_between(a, b).ok_or(Error::GraphHasNoCoordinates)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.vertex_id(source), self.vertex_id(target)) {
            (Some(s), Some(t)) => self.edge_index.contains_key(&(s, t)),
            _ => false,
        }
    }

    pub fn edge(&self, source: &str, target: &str) -> Result<EdgeRef<'_, E>> {
        let s = self.require(source)?;
        let t = self.require(target)?;
        let Some(&slot) = self.edge_index.get(&(s, t)) else {
            return Err(Error::EdgeNotFound {
                from: source.to_string(),
                to: target.to_string(),
            });
        };
        let e = &self.adjacency[s.0][slot];
        Ok(EdgeRef {
            target: &self.vertices[e.target.0].label,
            weight: e.weight,
            data: &e.data,
        })
    }

    pub fn edge_weight(&self, source: &str, target: &str) -> Result<f64> {
        self.edge(source, target).map(|e| e.weight)
    }

    /// Labels of the vertices reachable over one outgoing edge, in insertion order.
    pub fn neighbors(&self, label: &str) -> Result<Vec<&str>> {
        let id = self.require(label)?;
        Ok(self.adjacency[id.0]
            .iter()
            .map(|e| self.vertices[e.target.0].label.as_str())
            .collect())
    }

    pub fn out_edges(&self, label: &str) -> Result<Vec<EdgeRef<'_, E>>> {
        let id = self.require(label)?;
        Ok(self.adjacency[id.0]
            .iter()
            .map(|e| EdgeRef {
                target: &self.vertices[e.target.0].label,
                weight: e.weight,
                data: &e.data,
            })
            .collect())
    }

    pub(crate) fn out_entries(&self, id: VertexId) -> &[EdgeEntry<E>] {
        &self.adjacency[id.0]
    }

    /// All edges; for undirected graphs each mirrored pair is reported once.
    pub fn edges(&self) -> Vec<EdgeView<'_, E>> {
        let mut out = Vec::new();
        for (s, list) in self.adjacency.iter().enumerate() {
            for e in list {
                if !self.options.directed && e.target.0 < s {
                    continue;
                }
                out.push(EdgeView {
                    source: &self.vertices[s].label,
                    target: &self.vertices[e.target.0].label,
                    weight: e.weight,
                    data: &e.data,
                });
            }
        }
        out
    }

    pub fn clear_edges(&mut self) {
        for list in &mut self.adjacency {
            list.clear();
        }
        self.edge_index.clear();
    }

    /// Relabels a batch of vertices at once. Ids, coordinates and edges are untouched.
    ///
    /// The batch is validated before anything changes: a new label must not be used by a vertex
    /// outside the batch, nor twice within it.
    pub fn rename_vertices(&mut self, renames: &[(VertexId, String)]) -> Result<()> {
        let renamed: HashSet<VertexId> = renames.iter().map(|(id, _)| *id).collect();
        let mut incoming: HashSet<&str> = HashSet::default();
        for (id, label) in renames {
            if id.0 >= self.vertices.len() {
                return Err(Error::VertexNotFound {
                    label: format!("#{}", id.0),
                });
            }
            if !incoming.insert(label.as_str()) {
                return Err(Error::LabelCollision {
                    label: label.clone(),
                });
            }
            if let Some(owner) = self.label_index.get(label.as_str()) {
                if !renamed.contains(owner) {
                    return Err(Error::LabelCollision {
                        label: label.clone(),
                    });
                }
            }
        }

        for (id, _) in renames {
            let old = &self.vertices[id.0].label;
            self.label_index.remove(old.as_str());
        }
        for (id, label) in renames {
            self.label_index.insert(label.clone(), *id);
            self.vertices[id.0].label = label.clone();
        }
        Ok(())
    }

    /// Exchanges the labels of two vertices.
    pub fn swap_labels(&mut self, a: &str, b: &str) -> Result<()> {
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        self.rename_vertices(&[(ia, b.to_string()), (ib, a.to_string())])
    }

    pub(crate) fn require(&self, label: &str) -> Result<VertexId> {
        self.vertex_id(label).ok_or_else(|| Error::VertexNotFound {
            label: label.to_string(),
        })
    }
}

impl<E: EdgeData> fmt::Display for Graph<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# vertices")?;
        for v in &self.vertices {
            match v.coordinates {
                Some(p) => writeln!(f, "{}\t({}, {})", v.label, p.x, p.y)?,
                None => writeln!(f, "{}\t-", v.label)?,
            }
        }
        writeln!(f)?;
        writeln!(f, "# edges")?;
        for (s, list) in self.adjacency.iter().enumerate() {
            for e in list {
                writeln!(
                    f,
                    "{}\t{}\t{}",
                    self.vertices[s].label, self.vertices[e.target.0].label, e.weight
                )?;
            }
        }
        writeln!(f)?;
        writeln!(f, "# stats")?;
        writeln!(f, "vertices: {}", self.vertex_count())?;
        writeln!(f, "edges: {}", self.edge_count())
    }
}
