/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Proper rotation in 3D space.
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Computes the normal of a closed polygon using Newell's method.
///
/// Returns `None` when the polygon is degenerate (collinear or fewer
/// than three distinct points).
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Option<Vector3> {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(normal / len)
}

/// Returns a unit vector perpendicular to `v`.
///
/// Picks the first non-zero component `i`, swaps it into the next slot
/// `(i + 1) % 3` and negates, so the result is stable for a given input.
#[must_use]
pub fn perpendicular(v: &Vector3) -> Option<Vector3> {
    for i in 0..3 {
        if v[i].abs() > TOLERANCE {
            let j = (i + 1) % 3;
            let mut p = Vector3::zeros();
            p[j] = v[i];
            p[i] = -v[j];
            return Some(p.normalize());
        }
    }
    None
}
