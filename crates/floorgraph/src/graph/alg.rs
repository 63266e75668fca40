//! Graph analysis: adjacency powers, hop-count shortest paths, A*, betweenness and
//! transitive closure.
//!
//! Matrix rows and columns follow ascending label order (see [`LabelIndex`]).

use nalgebra::DMatrix;
use std::collections::BTreeMap;

use super::{EdgeData, Graph, HashMap, HashSet, VertexId};
use crate::error::Result;
use crate::matrix::{LabelIndex, LabeledMatrix};

/// Sorted label index plus the matrix position of every arena vertex.
fn sorted_positions<E: EdgeData>(g: &Graph<E>) -> (LabelIndex, Vec<usize>) {
    let index = LabelIndex::new(g.vertices().map(|(_, v)| v.label().to_string()).collect());
    let mut pos = vec![0; g.vertex_count()];
    for (id, v) in g.vertices() {
        // Labels are unique, so every lookup succeeds.
        pos[id.index()] = index.index_of(v.label()).unwrap_or_default();
    }
    (index, pos)
}

pub fn adjacency_matrix<E: EdgeData>(g: &Graph<E>) -> LabeledMatrix<u32> {
    let (index, pos) = sorted_positions(g);
    let n = index.len();
    let mut m = DMatrix::<u32>::zeros(n, n);
    for (id, _) in g.vertices() {
        for e in g.out_entries(id) {
            m[(pos[id.index()], pos[e.target.index()])] = 1;
        }
    }
    LabeledMatrix { index, matrix: m }
}

/// Number of walks of length two between every pair of vertices.
pub fn two_hop_matrix<E: EdgeData>(g: &Graph<E>) -> LabeledMatrix<u32> {
    let adj = adjacency_matrix(g);
    let squared = &adj.matrix * &adj.matrix;
    LabeledMatrix {
        index: adj.index,
        matrix: squared,
    }
}

/// Warshall closure of the adjacency relation.
pub fn transitive_closure<E: EdgeData>(g: &Graph<E>) -> LabeledMatrix<bool> {
    let adj = adjacency_matrix(g);
    let n = adj.index.len();
    let mut reach = adj.matrix.map(|v| v != 0);
    for k in 0..n {
        for s in 0..n {
            if !reach[(s, k)] {
                continue;
            }
            for t in 0..n {
                if reach[(k, t)] {
                    reach[(s, t)] = true;
                }
            }
        }
    }
    LabeledMatrix {
        index: adj.index,
        matrix: reach,
    }
}

/// All-pairs hop-count distances and the successor table for path reconstruction.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    index: LabelIndex,
    dist: DMatrix<f64>,
    next: DMatrix<Option<usize>>,
}

impl ShortestPaths {
    pub fn index(&self) -> &LabelIndex {
        &self.index
    }

    /// Hop counts; `f64::INFINITY` where no path exists.
    pub fn distances(&self) -> &DMatrix<f64> {
        &self.dist
    }

    pub fn distance(&self, source: &str, target: &str) -> Option<f64> {
        let i = self.index.index_of(source)?;
        let j = self.index.index_of(target)?;
        Some(self.dist[(i, j)])
    }

    /// Label of the first hop on a shortest `source -> target` path.
    pub fn next_hop(&self, source: &str, target: &str) -> Option<&str> {
        let i = self.index.index_of(source)?;
        let j = self.index.index_of(target)?;
        self.next[(i, j)].and_then(|k| self.index.label(k))
    }

    /// Successor table rendered with full labels.
    pub fn next_hop_matrix(&self) -> DMatrix<Option<String>> {
        self.next
            .map(|k| k.and_then(|k| self.index.label(k)).map(str::to_string))
    }

    /// Vertex labels along a shortest path, endpoints included. Empty when unreachable.
    pub fn path(&self, source: &str, target: &str) -> Vec<String> {
        let (Some(i), Some(j)) = (self.index.index_of(source), self.index.index_of(target)) else {
            return Vec::new();
        };
        self.path_by_index(i, j)
    }

    fn path_by_index(&self, i: usize, j: usize) -> Vec<String> {
        if self.next[(i, j)].is_none() {
            return Vec::new();
        }
        let mut out = vec![self.index.labels()[i].clone()];
        let mut cur = i;
        while cur != j {
            let Some(k) = self.next[(cur, j)] else {
                return Vec::new();
            };
            cur = k;
            out.push(self.index.labels()[cur].clone());
            if out.len() > self.index.len() {
                return Vec::new();
            }
        }
        out
    }
}

/// Floyd-Warshall over hop counts: every present edge has length 1 regardless of its weight.
pub fn shortest_paths<E: EdgeData>(g: &Graph<E>) -> ShortestPaths {
    let (index, pos) = sorted_positions(g);
    let n = index.len();
    let mut dist = DMatrix::<f64>::from_element(n, n, f64::INFINITY);
    let mut next = DMatrix::<Option<usize>>::from_element(n, n, None);

    for i in 0..n {
        dist[(i, i)] = 0.0;
        next[(i, i)] = Some(i);
    }
    for (id, _) in g.vertices() {
        let i = pos[id.index()];
        for e in g.out_entries(id) {
            let j = pos[e.target.index()];
            dist[(i, j)] = 1.0;
            next[(i, j)] = Some(j);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = dist[(i, k)];
            if d_ik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let through = d_ik + dist[(k, j)];
                if through < dist[(i, j)] {
                    dist[(i, j)] = through;
                    next[(i, j)] = next[(i, k)];
                }
            }
        }
    }

    ShortestPaths { index, dist, next }
}

/// Number of reconstructed shortest paths (over ordered pairs of distinct vertices) each vertex
/// lies on, endpoints included. Undirected graphs count every path once per direction, so the
/// totals are halved. The halving is exact, so a vertex can score `x.5` when tie-broken paths
/// differ between the two directions of a pair.
pub fn betweenness<E: EdgeData>(g: &Graph<E>) -> BTreeMap<String, f64> {
    let paths = shortest_paths(g);
    let n = paths.index.len();
    let mut counts = vec![0u64; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            for label in paths.path_by_index(i, j) {
                if let Some(k) = paths.index.index_of(&label) {
                    counts[k] += 1;
                }
            }
        }
    }

    let scale = if g.is_directed() { 1.0 } else { 0.5 };
    paths
        .index
        .labels()
        .iter()
        .zip(counts)
        .map(|(label, c)| (label.clone(), c as f64 * scale))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AStarPath {
    pub path: Vec<String>,
    /// Distinct vertices touched by the search (expanded or seen as a neighbour).
    pub visited: usize,
}

/// A* from `start` to `goal`.
///
/// Step cost is the Euclidean distance between the endpoints when the graph stores coordinates
/// (whatever the stored weight means) and the stored edge weight otherwise. The heuristic is the
/// Euclidean distance to the goal, or zero without coordinates. Among open vertices with equal
/// f-score the one that entered the open set first is expanded. Returns `Ok(None)` when the goal
/// is unreachable.
pub fn astar<E: EdgeData>(g: &Graph<E>, start: &str, goal: &str) -> Result<Option<AStarPath>> {
    let start = g.require(start)?;
    let goal = g.require(goal)?;

    let n = g.vertex_count();
    let heuristic = |v: VertexId| g.distance_between(v, goal).unwrap_or(0.0);

    let mut open: Vec<VertexId> = vec![start];
    let mut closed: HashSet<VertexId> = HashSet::default();
    let mut came_from: HashMap<VertexId, VertexId> = HashMap::default();
    let mut g_score = vec![f64::INFINITY; n];
    let mut f_score = vec![f64::INFINITY; n];
    let mut touched: HashSet<VertexId> = HashSet::default();

    g_score[start.index()] = 0.0;
    f_score[start.index()] = heuristic(start);

    while !open.is_empty() {
        let mut best = 0;
        for (slot, v) in open.iter().enumerate() {
            if f_score[v.index()] < f_score[open[best].index()] {
                best = slot;
            }
        }
        let current = open[best];
        touched.insert(current);

        if current == goal {
            let mut path = vec![g.label(current).to_string()];
            let mut cur = current;
            while let Some(&prev) = came_from.get(&cur) {
                cur = prev;
                path.push(g.label(cur).to_string());
            }
            path.reverse();
            return Ok(Some(AStarPath {
                path,
                visited: touched.len(),
            }));
        }

        open.remove(best);
        closed.insert(current);

        for e in g.out_entries(current) {
            let neighbour = e.target;
            touched.insert(neighbour);
            if closed.contains(&neighbour) {
                continue;
            }
            let step = g.distance_between(current, neighbour).unwrap_or(e.weight);
            let tentative = g_score[current.index()] + step;
            if !open.contains(&neighbour) {
                open.push(neighbour);
            } else if tentative >= g_score[neighbour.index()] {
                continue;
            }
            came_from.insert(neighbour, current);
            g_score[neighbour.index()] = tentative;
            f_score[neighbour.index()] = tentative + heuristic(neighbour);
        }
    }

    Ok(None)
}

impl<E: EdgeData> Graph<E> {
    pub fn adjacency_matrix(&self) -> LabeledMatrix<u32> {
        adjacency_matrix(self)
    }

    pub fn two_hop_matrix(&self) -> LabeledMatrix<u32> {
        two_hop_matrix(self)
    }

    pub fn transitive_closure(&self) -> LabeledMatrix<bool> {
        transitive_closure(self)
    }

    pub fn shortest_paths(&self) -> ShortestPaths {
        shortest_paths(self)
    }

    pub fn betweenness(&self) -> BTreeMap<String, f64> {
        betweenness(self)
    }

    pub fn astar(&self, start: &str, goal: &str) -> Result<Option<AStarPath>> {
        astar(self, start, goal)
    }
}
