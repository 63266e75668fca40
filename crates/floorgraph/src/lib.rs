#![forbid(unsafe_code)]

//! Weighted graph container used by `floorplan-core`.
//!
//! Vertices live in an arena addressed by [`VertexId`]; display labels are mutable and only
//! consulted through a hash index, so relabelling never disturbs edges. Edges are stored per
//! source vertex, and an undirected graph keeps two independent directional halves that are
//! updated together.
//!
//! Analysis helpers (matrices, Floyd-Warshall, A*, betweenness) are available under [`alg`].

pub mod error;
pub mod graph;
pub mod matrix;

pub use error::{Error, Result};
pub use graph::alg;
pub use graph::{EdgeData, EdgeInsert, EdgeRef, EdgeView, Graph, GraphOptions, Vertex, VertexId};
pub use matrix::{LabelIndex, LabeledMatrix, matrix_to_string};

pub type Point = euclid::default::Point2D<f64>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}
