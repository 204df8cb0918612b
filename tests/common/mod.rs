//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::sync::Once;

use cutlist::body::{BodyGeometry, EdgeSample, FaceSample};
use cutlist::error::{OperationError, Result};
use cutlist::math::{Point3, Rotation3, Vector3};
use cutlist::operations::query::Aabb;

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once. Set `RUST_LOG=cutlist=debug`
/// to see per-body decisions.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

/// An axis-aligned cuboid served through [`BodyGeometry`], counting how
/// often analysis asks for faces and rotated boxes.
pub struct MockBody {
    name: String,
    material: Option<String>,
    size: Vector3,
    visible: bool,
    solid: bool,
    available: bool,
    face_calls: Cell<usize>,
    rotated_calls: Cell<usize>,
}

impl MockBody {
    pub fn cuboid(name: &str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.to_string(),
            material: None,
            size: Vector3::new(x, y, z),
            visible: true,
            solid: true,
            available: true,
            face_calls: Cell::new(0),
            rotated_calls: Cell::new(0),
        }
    }

    pub fn with_material(mut self, material: &str) -> Self {
        self.material = Some(material.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn non_solid(mut self) -> Self {
        self.solid = false;
        self
    }

    pub fn without_geometry(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn face_calls(&self) -> usize {
        self.face_calls.get()
    }

    pub fn rotated_calls(&self) -> usize {
        self.rotated_calls.get()
    }

    fn corners(&self) -> impl Iterator<Item = Point3> + '_ {
        (0..8).map(move |i| {
            Point3::new(
                if i & 1 == 0 { 0.0 } else { self.size.x },
                if i & 2 == 0 { 0.0 } else { self.size.y },
                if i & 4 == 0 { 0.0 } else { self.size.z },
            )
        })
    }

    fn check(&self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(OperationError::Failed(format!("{} has no geometry", self.name)).into())
        }
    }
}

fn rectangle(origin: Point3, u: Vector3, v: Vector3) -> Vec<EdgeSample> {
    let pts = [origin, origin + u, origin + u + v, origin + v];
    (0..4)
        .map(|i| {
            let (start, end) = (pts[i], pts[(i + 1) % 4]);
            EdgeSample {
                start,
                end,
                length: (end - start).norm(),
                is_linear: true,
            }
        })
        .collect()
}

impl BodyGeometry for MockBody {
    fn name(&self) -> &str {
        &self.name
    }

    fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_solid(&self) -> bool {
        self.solid
    }

    fn faces(&self) -> Result<Vec<FaceSample>> {
        self.face_calls.set(self.face_calls.get() + 1);
        self.check()?;

        let s = self.size;
        let axes = [
            Vector3::new(s.x, 0.0, 0.0),
            Vector3::new(0.0, s.y, 0.0),
            Vector3::new(0.0, 0.0, s.z),
        ];
        let mut faces = Vec::with_capacity(6);
        for k in 0..3 {
            let (u, v) = (axes[(k + 1) % 3], axes[(k + 2) % 3]);
            let mut normal = Vector3::zeros();
            normal[k] = 1.0;
            for (origin, n) in [(Point3::origin(), -normal), (Point3::origin() + axes[k], normal)] {
                faces.push(FaceSample {
                    normal: Some(n),
                    origin,
                    outer_edges: rectangle(origin, u, v),
                });
            }
        }
        Ok(faces)
    }

    fn bounding_box(&self) -> Result<Aabb> {
        self.check()?;
        Ok(Aabb::new(Point3::origin(), Point3::from(self.size)))
    }

    fn bounding_box_in(&self, rotation: &Rotation3) -> Result<Aabb> {
        self.rotated_calls.set(self.rotated_calls.get() + 1);
        self.check()?;
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for corner in self.corners() {
            let q = rotation * corner;
            min = min.inf(&q);
            max = max.sup(&q);
        }
        Ok(Aabb::new(min, max))
    }
}
