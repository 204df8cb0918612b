use crate::error::{OperationError, Result};
use crate::geometry::curve::Line;
use crate::math::Point3;
use crate::topology::{EdgeCurve, EdgeData, TopologyStore, VertexData, WireData, WireEdge, WireId};

/// Creates a polyline wire of straight edges through a sequence of points.
pub struct MakeWire {
    points: Vec<Point3>,
    close: bool,
}

impl MakeWire {
    /// Creates a new `MakeWire` operation.
    ///
    /// When `close` is set, an extra edge joins the last point back to the first.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if there are fewer than two
    /// points (three for a closed wire), or an error if two consecutive
    /// points coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let min_points = if self.close { 3 } else { 2 };
        if self.points.len() < min_points {
            return Err(OperationError::InvalidInput(format!(
                "wire needs at least {min_points} points, got {}",
                self.points.len()
            ))
            .into());
        }

        let vertices: Vec<_> = self
            .points
            .iter()
            .map(|&p| store.add_vertex(VertexData::new(p)))
            .collect();

        let n = self.points.len();
        let segments = if self.close { n } else { n - 1 };
        let mut edges = Vec::with_capacity(segments);
        for i in 0..segments {
            let j = (i + 1) % n;
            let (line, t_end) = Line::through(self.points[i], self.points[j])?;
            let edge = store.add_edge(EdgeData {
                start: vertices[i],
                end: vertices[j],
                curve: EdgeCurve::Line(line),
                t_start: 0.0,
                t_end,
            });
            edges.push(WireEdge::new(edge, true));
        }

        Ok(store.add_wire(WireData {
            edges,
            is_closed: self.close,
        }))
    }
}
