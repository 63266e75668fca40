//! Storage entries for [`Graph`](super::Graph).

use super::VertexId;
use crate::Point;

/// Extra per-edge payload carried next to the weight.
///
/// When a graph aggregates weights, the payload of the repeated insertion is folded into the
/// stored one through [`EdgeData::absorb`].
pub trait EdgeData: Clone + Default {
    fn absorb(&mut self, _other: &Self) {}
}

impl EdgeData for () {}

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub(in crate::graph) label: String,
    pub(in crate::graph) coordinates: Option<Point>,
}

impl Vertex {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn coordinates(&self) -> Option<Point> {
        self.coordinates
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeEntry<E> {
    pub(crate) target: VertexId,
    pub(crate) weight: f64,
    pub(crate) data: E,
}

/// Borrowed view of one directional edge half.
#[derive(Debug, Clone, Copy)]
pub struct EdgeRef<'a, E> {
    pub target: &'a str,
    pub weight: f64,
    pub data: &'a E,
}

/// Edge as exposed to visualization: mirror halves of undirected graphs are reported once.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a, E> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: f64,
    pub data: &'a E,
}
