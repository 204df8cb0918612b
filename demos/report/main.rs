//! Builds a small bookcase from kernel solids and prints its cut list.
//!
//! ```text
//! cargo run --example report
//! RUST_LOG=cutlist=debug cargo run --example report   # per-body decisions
//! ```

use std::rc::Rc;

use cutlist::assembly::{CollectParts, Component, Occurrence, Selection};
use cutlist::body::SolidBody;
use cutlist::cutlist::{CutlistConfig, ExtractCutlist, LengthUnit};
use cutlist::math::{Point3, Rotation3, Vector3};
use cutlist::operations::creation::{MakeBox, MakeCylinder};
use cutlist::operations::transform::Rotate;
use cutlist::topology::TopologyStore;
use cutlist::CutlistError;

fn main() -> Result<(), CutlistError> {
    // Default: WARN for everything, INFO for cutlist.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("cutlist=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = TopologyStore::new();
    let side = MakeBox::new(Point3::origin(), Point3::new(1.8, 30.0, 90.0)).execute(&mut store)?;
    let shelf = MakeBox::new(Point3::origin(), Point3::new(76.4, 30.0, 1.8)).execute(&mut store)?;
    let back = MakeBox::new(Point3::origin(), Point3::new(80.0, 0.6, 90.0)).execute(&mut store)?;
    let pin = MakeCylinder::new(Point3::origin(), 0.4, Vector3::new(0.0, 0.0, 3.0)).execute(&mut store)?;

    // A shelf leaning against the wall, as it would sit in a real model.
    let leaning = MakeBox::new(Point3::origin(), Point3::new(76.4, 30.0, 1.8)).execute(&mut store)?;
    Rotate::new(leaning, Point3::origin(), Rotation3::new(Vector3::new(0.35, 0.1, 0.0)))
        .execute(&mut store)?;

    let shelf_component = Rc::new(
        Component::new("Shelf").with_body(SolidBody::new(&store, shelf, "Board").with_material("Pine")),
    );
    let case = Component::new("Bookcase")
        .with_body(SolidBody::new(&store, side, "Left").with_material("Pine"))
        .with_body(SolidBody::new(&store, side, "Right").with_material("Pine"))
        .with_body(SolidBody::new(&store, back, "Back").with_material("Plywood"))
        .with_body(SolidBody::new(&store, leaning, "Spare").with_material("Pine"))
        .with_body(SolidBody::new(&store, pin, "Pin").with_material("Beech"))
        .with_occurrence(Occurrence::new(Rc::clone(&shelf_component)))
        .with_occurrence(Occurrence::new(Rc::clone(&shelf_component)))
        .with_occurrence(Occurrence::new(Rc::clone(&shelf_component)));

    let config = CutlistConfig::new().with_unit(LengthUnit::Centimeter);
    let selections = [Selection::Component(&case)];
    let parts = CollectParts::new(&selections, &config).execute();
    let cutlist = ExtractCutlist::new(config)?.execute(&parts);

    println!("{:>5}  {:<10}  {:<28}  names", "count", "material", "dimensions");
    for entry in cutlist.sorted_entries() {
        println!(
            "{:>5}  {:<10}  {:<28}  {}",
            entry.count(),
            entry.material().unwrap_or("-"),
            format!("{:.1}", entry.dimensions()),
            entry.names().join(", ")
        );
    }
    for warning in cutlist.warnings() {
        println!("skipped {warning}");
    }
    Ok(())
}
