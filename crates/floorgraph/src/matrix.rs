//! Label-indexed matrices.
//!
//! Every matrix produced by this crate orders its rows and columns by ascending vertex label.
//! [`LabelIndex`] carries that ordering so callers never have to rebuild it.

use nalgebra::{DMatrix, Scalar};
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelIndex {
    labels: Vec<String>,
}

impl LabelIndex {
    pub fn new(mut labels: Vec<String>) -> Self {
        labels.sort_unstable();
        labels.dedup();
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.binary_search_by(|l| l.as_str().cmp(label)).ok()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix<T: Scalar> {
    pub index: LabelIndex,
    pub matrix: DMatrix<T>,
}

impl<T: Scalar> LabeledMatrix<T> {
    pub fn get(&self, row: &str, col: &str) -> Option<&T> {
        let i = self.index.index_of(row)?;
        let j = self.index.index_of(col)?;
        self.matrix.get((i, j))
    }
}

/// Renders a matrix with a label header row and column.
///
/// Non-finite entries print as `-`; finite entries are truncated to integers.
pub fn matrix_to_string<T>(labels: &[String], matrix: &DMatrix<T>) -> String
where
    T: Scalar + Copy + Into<f64>,
{
    let mut out = String::from("  ");
    for label in labels {
        let _ = write!(out, "{label} ");
    }
    out.push('\n');
    for (i, label) in labels.iter().enumerate() {
        let _ = write!(out, "{label} ");
        for j in 0..matrix.ncols() {
            let v: f64 = matrix[(i, j)].into();
            if v.is_finite() {
                let _ = write!(out, "{} ", v.trunc() as i64);
            } else {
                out.push_str("- ");
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_index_sorts_and_finds_labels() {
        let idx = LabelIndex::new(vec!["c".into(), "a".into(), "b".into()]);
        assert_eq!(idx.labels(), &["a", "b", "c"]);
        assert_eq!(idx.index_of("c"), Some(2));
        assert_eq!(idx.index_of("z"), None);
    }

    #[test]
    fn matrix_to_string_marks_unreachable_entries() {
        let labels = vec!["a".to_string(), "b".to_string()];
        let m = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, f64::INFINITY, 0.0]);
        assert_eq!(matrix_to_string(&labels, &m), "  a b \na 0 1 \nb - 0 \n");
    }
}
