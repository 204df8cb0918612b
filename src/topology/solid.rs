use super::shell::ShellId;

slotmap::new_key_type! {
    pub struct SolidId;
}

/// A closed body: one outer shell plus any void shells.
#[derive(Debug, Clone)]
pub struct SolidData {
    pub outer_shell: ShellId,
    /// Cavities. Their faces follow the outer shell's in enumeration.
    pub inner_shells: Vec<ShellId>,
}
