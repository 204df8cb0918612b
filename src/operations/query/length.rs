use crate::error::Result;
use crate::geometry::curve::Arc;
use crate::topology::{EdgeCurve, EdgeId, TopologyStore};

/// True length of one edge along its curve.
///
/// Edge-orientation ranking uses endpoint chords instead; this is what body
/// samples report as the edge's own length.
pub struct Length {
    edge: EdgeId,
}

impl Length {
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// # Errors
    ///
    /// [`TopologyError::EntityNotFound`](crate::error::TopologyError) for an unknown edge.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let edge = store.edge(self.edge)?;
        match &edge.curve {
            // lines are arc-length parameterized
            EdgeCurve::Line(_) => Ok((edge.t_end - edge.t_start).abs()),
            EdgeCurve::Arc(arc) => Ok(arc.radius() * Arc::sweep(edge.t_start, edge.t_end)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakeCylinder, MakeWire};

    #[test]
    fn line_length_3_4_5() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)],
            false,
        )
        .execute(&mut store)
        .unwrap();
        let edge_id = store.wire(wire).unwrap().edges[0].edge;

        let len = Length::new(edge_id).execute(&store).unwrap();
        assert!((len - 5.0).abs() < 1e-10);
    }

    #[test]
    fn circle_length_is_circumference() {
        let mut store = TopologyStore::new();
        let solid = MakeCylinder::new(Point3::origin(), 2.0, Vector3::z())
            .execute(&mut store)
            .unwrap();
        let bottom = store.solid_faces(solid).unwrap()[0];
        let wire = store.face(bottom).unwrap().outer_wire;
        let edge_id = store.wire(wire).unwrap().edges[0].edge;

        let len = Length::new(edge_id).execute(&store).unwrap();
        assert!((len - 4.0 * PI).abs() < 1e-10);
    }
}
