use crate::error::{Result, TopologyError};
use crate::topology::{ShellId, SolidData, SolidId, TopologyStore};

/// Creates a solid from closed shells.
pub struct MakeSolid {
    outer_shell: ShellId,
    inner_shells: Vec<ShellId>,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(outer_shell: ShellId, inner_shells: Vec<ShellId>) -> Self {
        Self {
            outer_shell,
            inner_shells,
        }
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the shells is missing from the store, or
    /// [`TopologyError::InvalidTopology`] if one of them is open.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        for &shell in std::iter::once(&self.outer_shell).chain(&self.inner_shells) {
            if !store.shell(shell)?.is_closed {
                return Err(TopologyError::InvalidTopology("solid shell is open".into()).into());
            }
        }
        Ok(store.add_solid(SolidData {
            outer_shell: self.outer_shell,
            inner_shells: self.inner_shells.clone(),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CutlistError;
    use crate::math::Point3;
    use crate::operations::creation::{MakeBox, MakeFace, MakeWire};
    use crate::topology::ShellData;

    #[test]
    fn open_shell_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();
        let sheet = store.add_shell(ShellData {
            faces: vec![face],
            is_closed: false,
        });
        assert!(matches!(
            MakeSolid::new(sheet, vec![]).execute(&mut store),
            Err(CutlistError::Topology(TopologyError::InvalidTopology(_)))
        ));
    }

    #[test]
    fn closed_shell_accepted() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let shell = store.solid(solid).unwrap().outer_shell;
        assert!(MakeSolid::new(shell, vec![]).execute(&mut store).is_ok());
    }
}
