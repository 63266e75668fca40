//! Factory departments: labelled simple polygons with named interior points.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::geom::{self, Point};

/// Separator between a department label and a point name in graph vertex labels.
pub const VERTEX_DELIMITER: char = '.';

/// Name of the point every department is seeded with.
pub const CENTROID: &str = "centroid";

/// Graph vertex label for a named point of a department: `<department>.<point>`.
pub fn vertex_label(department: &str, point_name: &str) -> String {
    format!("{department}{VERTEX_DELIMITER}{point_name}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    label: String,
    boundary: Vec<Point>,
    area: f64,
    centroid: Point,
    points: IndexMap<String, Point>,
}

impl Department {
    /// Builds a department from a counter-clockwise boundary of at least three points.
    ///
    /// Area and centroid are computed once here. The named-point map starts with the centroid.
    pub fn new(label: impl Into<String>, boundary: Vec<Point>) -> Result<Self> {
        let label = label.into();
        if label.is_empty() || label.contains(VERTEX_DELIMITER) {
            return Err(Error::BadLabel { label });
        }
        if boundary.len() < 3 {
            return Err(Error::InsufficientPoints {
                count: boundary.len(),
                label,
            });
        }
        if boundary.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(Error::NonFiniteCoordinates { label });
        }
        let Some(centroid) = geom::centroid(&boundary) else {
            return Err(Error::DegeneratePolygon { label });
        };

        let area = geom::area(&boundary);
        let mut points = IndexMap::new();
        points.insert(CENTROID.to_string(), centroid);
        Ok(Self {
            label,
            boundary,
            area,
            centroid,
            points,
        })
    }

    /// Like [`Department::new`], then registers each pre-supplied interior point in order.
    pub fn with_points<I, S>(
        label: impl Into<String>,
        boundary: Vec<Point>,
        points: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Point)>,
        S: Into<String>,
    {
        let mut dept = Self::new(label, boundary)?;
        for (name, p) in points {
            dept.register_point(name, p)?;
        }
        Ok(dept)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn boundary(&self) -> &[Point] {
        &self.boundary
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Named points in registration order, starting with `"centroid"`.
    pub fn points(&self) -> &IndexMap<String, Point> {
        &self.points
    }

    pub fn point(&self, name: &str) -> Option<Point> {
        self.points.get(name).copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        geom::contains(&self.boundary, p)
    }

    /// Registers a named interior point.
    ///
    /// The name and the exact coordinates must both be new, and the point must lie strictly
    /// inside the boundary.
    pub fn register_point(&mut self, name: impl Into<String>, p: Point) -> Result<()> {
        let name = name.into();
        if self.points.contains_key(&name) || self.points.values().any(|q| *q == p) {
            return Err(Error::NameCollision {
                label: self.label.clone(),
                name,
            });
        }
        if !self.contains(p) {
            return Err(Error::PointOutsidePolygon {
                label: self.label.clone(),
                name,
                x: p.x,
                y: p.y,
            });
        }
        self.points.insert(name, p);
        Ok(())
    }

    pub(crate) fn remove_point(&mut self, name: &str) {
        if name != CENTROID {
            self.points.shift_remove(name);
        }
    }

    /// Moves the label of this department; used when two departments exchange positions.
    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }
}
