//! Cut lists built from component trees.

#![allow(clippy::unwrap_used)]

mod common;

use std::rc::Rc;

use cutlist::assembly::{CollectParts, Component, Occurrence, Selection};
use cutlist::cutlist::{CutlistConfig, ExtractCutlist};

use common::MockBody;

#[test]
fn shared_component_counts_every_occurrence() {
    common::init_tracing();
    let leg = Rc::new(
        Component::new("Leg").with_body(MockBody::cuboid("Body1", 4.0, 4.0, 70.0).with_material("Oak")),
    );
    let table = Component::new("Table")
        .with_body(MockBody::cuboid("Top", 120.0, 80.0, 3.0).with_material("Oak"))
        .with_occurrence(Occurrence::new(Rc::clone(&leg)))
        .with_occurrence(Occurrence::new(Rc::clone(&leg)))
        .with_occurrence(Occurrence::new(Rc::clone(&leg)))
        .with_occurrence(Occurrence::new(Rc::clone(&leg)).external());

    let selections = [Selection::Component(&table)];
    let config = CutlistConfig::default();
    let parts = CollectParts::new(&selections, &config).execute();
    assert_eq!(parts.len(), 5);

    let cutlist = ExtractCutlist::new(config).unwrap().execute(&parts);
    assert_eq!(cutlist.entries().len(), 2);
    assert_eq!(cutlist.entries()[0].names(), ["Table/Top"]);
    assert_eq!(cutlist.entries()[1].count(), 4);
    assert!(cutlist.entries()[1]
        .names()
        .iter()
        .all(|n| n == "Table/Leg/Body1"));

    let config = CutlistConfig::new().with_ignore_external(true);
    let parts = CollectParts::new(&selections, &config).execute();
    let cutlist = ExtractCutlist::new(config).unwrap().execute(&parts);
    assert_eq!(cutlist.entries()[1].count(), 3);

    let sorted = cutlist.sorted_entries();
    assert_eq!(sorted[0].names()[0], "Table/Leg/Body1");
}
