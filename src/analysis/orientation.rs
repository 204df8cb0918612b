use crate::math::{Matrix3, Rotation3, Vector3, TOLERANCE};

/// Builds the rotation that lays a face flat and squares its edge.
///
/// The rotation maps the face normal `N` to `+Z` and the edge direction
/// `E` to `+X`; `+Y` completes the right-handed frame. `E` is first made
/// orthogonal to `N`.
pub struct AlignFrame {
    normal: Vector3,
    direction: Vector3,
}

impl AlignFrame {
    /// Creates a new `AlignFrame` solver.
    #[must_use]
    pub fn new(normal: Vector3, direction: Vector3) -> Self {
        Self { normal, direction }
    }

    /// Executes the solver, returning `None` when `E` is (nearly) parallel
    /// to `N` or either vector is zero.
    #[must_use]
    pub fn execute(&self) -> Option<Rotation3> {
        let n_len = self.normal.norm();
        if n_len < TOLERANCE {
            return None;
        }
        let z = self.normal / n_len;

        let projected = self.direction - z * z.dot(&self.direction);
        let e_len = projected.norm();
        if e_len < TOLERANCE {
            return None;
        }
        let x = projected / e_len;
        let y = z.cross(&x);

        // Rows are the source-frame images of the target axes, so R * x = +X etc.
        let matrix = Matrix3::from_rows(&[x.transpose(), y.transpose(), z.transpose()]);
        Some(Rotation3::from_matrix_unchecked(matrix))
    }
}
