//! Design-tree traversal: turns a selection of bodies, components and
//! occurrences into named parts.

use std::rc::Rc;

use tracing::debug;

use crate::body::BodyGeometry;
use crate::cutlist::{CutlistConfig, Part};

/// A named container of bodies and child occurrences.
#[derive(Debug, Clone)]
pub struct Component<B> {
    pub name: String,
    pub bodies: Vec<B>,
    pub occurrences: Vec<Occurrence<B>>,
}

impl<B> Component<B> {
    /// Creates an empty component.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bodies: Vec::new(),
            occurrences: Vec::new(),
        }
    }

    /// Adds a body.
    #[must_use]
    pub fn with_body(mut self, body: B) -> Self {
        self.bodies.push(body);
        self
    }

    /// Adds a child occurrence.
    #[must_use]
    pub fn with_occurrence(mut self, occurrence: Occurrence<B>) -> Self {
        self.occurrences.push(occurrence);
        self
    }
}

/// One placement of a (possibly shared) component.
#[derive(Debug, Clone)]
pub struct Occurrence<B> {
    pub component: Rc<Component<B>>,
    /// Set when the component is referenced from another design.
    pub is_external: bool,
}

impl<B> Occurrence<B> {
    /// Creates a local occurrence of `component`.
    #[must_use]
    pub fn new(component: Rc<Component<B>>) -> Self {
        Self {
            component,
            is_external: false,
        }
    }

    /// Marks the occurrence as external.
    #[must_use]
    pub fn external(mut self) -> Self {
        self.is_external = true;
        self
    }
}

/// One selected item.
#[derive(Debug)]
pub enum Selection<'a, B> {
    Body(&'a B),
    Component(&'a Component<B>),
    Occurrence(&'a Occurrence<B>),
}

impl<B> Clone for Selection<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for Selection<'_, B> {}

/// Flattens a selection into parts, in selection order, depth first.
///
/// A bare body is named after itself. A component's bodies are named
/// `component/body`; an occurrence's bodies are `parent/component/body`
/// and its children extend the prefix with the component name. Empty name
/// parts are left out.
pub struct CollectParts<'a, 'c, B> {
    selections: &'c [Selection<'a, B>],
    config: &'c CutlistConfig,
}

impl<'a, 'c, B: BodyGeometry + 'a> CollectParts<'a, 'c, B> {
    /// Creates a new `CollectParts` traversal.
    #[must_use]
    pub fn new(selections: &'c [Selection<'a, B>], config: &'c CutlistConfig) -> Self {
        Self { selections, config }
    }

    /// Executes the traversal.
    #[must_use]
    pub fn execute(&self) -> Vec<Part<'a>> {
        let mut parts = Vec::new();
        for &selection in self.selections {
            self.visit(selection, "", &mut parts);
        }
        parts
    }

    fn visit(&self, selection: Selection<'a, B>, prefix: &str, parts: &mut Vec<Part<'a>>) {
        match selection {
            Selection::Body(body) => {
                parts.push(Part::new(self.join(&[prefix, body.name()]), body));
            }
            Selection::Component(component) => {
                self.visit_component(component, prefix, parts);
            }
            Selection::Occurrence(occurrence) => {
                if occurrence.is_external && self.config.ignore_external {
                    debug!(component = %occurrence.component.name, "skipping external occurrence");
                    return;
                }
                self.visit_component(&occurrence.component, prefix, parts);
            }
        }
    }

    fn visit_component(&self, component: &'a Component<B>, prefix: &str, parts: &mut Vec<Part<'a>>) {
        for body in &component.bodies {
            let name = self.join(&[prefix, &component.name, body.name()]);
            parts.push(Part::new(name, body));
        }
        let nested = self.join(&[prefix, &component.name]);
        for occurrence in &component.occurrences {
            self.visit(Selection::Occurrence(occurrence), &nested, parts);
        }
    }

    fn join(&self, names: &[&str]) -> String {
        names
            .iter()
            .filter(|n| !n.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(&self.config.name_separator)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::body::SolidBody;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::topology::TopologyStore;

    fn names(parts: &[Part<'_>]) -> Vec<String> {
        parts.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn qualified_names_follow_the_tree() {
        let mut store = TopologyStore::new();
        let id = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let body = |name: &str| SolidBody::new(&store, id, name);

        let drawer = Rc::new(Component::new("Drawer").with_body(body("Front")));
        let cabinet = Rc::new(
            Component::new("Cabinet")
                .with_body(body("Side"))
                .with_occurrence(Occurrence::new(Rc::clone(&drawer)))
                .with_occurrence(Occurrence::new(Rc::clone(&drawer)).external()),
        );
        let root = Component::new("")
            .with_body(body("Top"))
            .with_occurrence(Occurrence::new(Rc::clone(&cabinet)));
        let loose = body("Shelf");

        let selections = [Selection::Component(&root), Selection::Body(&loose)];
        let config = CutlistConfig::default();
        let parts = CollectParts::new(&selections, &config).execute();
        assert_eq!(
            names(&parts),
            [
                "Top",
                "Cabinet/Side",
                "Cabinet/Drawer/Front",
                "Cabinet/Drawer/Front",
                "Shelf"
            ]
        );

        let config = CutlistConfig::new()
            .with_ignore_external(true)
            .with_name_separator(" > ");
        let parts = CollectParts::new(&selections, &config).execute();
        assert_eq!(
            names(&parts),
            ["Top", "Cabinet > Side", "Cabinet > Drawer > Front", "Shelf"]
        );
    }

    #[test]
    fn occurrence_selection_uses_component_name() {
        let mut store = TopologyStore::new();
        let id = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let leg = Rc::new(Component::new("Leg").with_body(SolidBody::new(&store, id, "Body1")));
        let occurrence = Occurrence::new(leg);
        let selections = [Selection::Occurrence(&occurrence)];
        let config = CutlistConfig::default();
        let parts = CollectParts::new(&selections, &config).execute();
        assert_eq!(names(&parts), ["Leg/Body1"]);
    }
}
