//! Polygon geometry on the facility plane.
//!
//! Polygons are closed implicitly (the last vertex connects back to the first) and are expected
//! in counter-clockwise order. Area is always reported as an absolute value; the centroid divides
//! by the *signed* shoelace sum, which only agrees with the area when the winding is
//! counter-clockwise.

pub use floorgraph::{Point, point};

/// `Σ (x_i·y_{i+1} − x_{i+1}·y_i)`, i.e. twice the signed area.
pub fn shoelace_sum(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum
}

pub fn area(polygon: &[Point]) -> f64 {
    shoelace_sum(polygon).abs() / 2.0
}

/// Polygon centroid. Returns `None` for degenerate (zero-area) polygons.
pub fn centroid(polygon: &[Point]) -> Option<Point> {
    let n = polygon.len();
    let signed = shoelace_sum(polygon);
    if n < 3 || signed == 0.0 || !signed.is_finite() {
        return None;
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    // 6·A with A the signed area (= signed / 2).
    let denom = 3.0 * signed;
    Some(point(cx / denom, cy / denom))
}

fn on_segment(p: Point, a: Point, b: Point) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    let scale = (b.x - a.x).abs().max((b.y - a.y).abs()).max(1.0);
    if cross.abs() > f64::EPSILON * scale * scale {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Strict point-in-polygon test.
///
/// Points on the boundary are outside. Otherwise a horizontal ray is cast and crossings are
/// counted over segments with `lower.y <= p.y < upper.y`; a test point sharing its `y` with a
/// segment endpoint is nudged upwards by an epsilon so the ray never passes through a vertex.
/// An odd crossing count means inside.
pub fn contains(polygon: &[Point], p: Point) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        if on_segment(p, polygon[i], polygon[(i + 1) % n]) {
            return false;
        }
    }

    let mut inside = false;
    for i in 0..n {
        let (mut lo, mut hi) = (polygon[i], polygon[(i + 1) % n]);
        if lo.y > hi.y {
            std::mem::swap(&mut lo, &mut hi);
        }
        let mut py = p.y;
        if py == lo.y || py == hi.y {
            py += f64::EPSILON * py.abs().max(1.0);
        }
        if !(lo.y <= py && py < hi.y) {
            continue;
        }
        let x_cross = lo.x + (py - lo.y) * (hi.x - lo.x) / (hi.y - lo.y);
        if p.x < x_cross {
            inside = !inside;
        }
    }
    inside
}
