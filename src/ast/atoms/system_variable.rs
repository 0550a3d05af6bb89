use crate::ast::{compat::compat80_replacement, escape::write_id, Restore, RestoreError, RestoreFlag};
use crate::visitor::Visitor;

/// `@name`, `@@name` or `@@GLOBAL.name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SystemVariableAtom {
    pub name: String,
    pub system: bool,
    pub global: bool,
}

impl SystemVariableAtom {
    pub fn new(name: impl Into<String>, system: bool, global: bool) -> Self {
        Self { name: name.into(), system, global }
    }

    pub fn user(name: impl Into<String>) -> Self {
        Self::new(name, false, false)
    }

    pub fn system(name: impl Into<String>) -> Self {
        Self::new(name, true, false)
    }

    pub fn global(name: impl Into<String>) -> Self {
        Self::new(name, true, true)
    }

    pub fn is_compat80(&self) -> bool {
        compat80_replacement(&self.name).is_some()
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_atom_system_variable(self)
    }
}

impl Restore for SystemVariableAtom {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, _: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        if flag.has(RestoreFlag::COMPAT_80) {
            if let Some(replacement) = compat80_replacement(&self.name) {
                tracing::debug!(name = %self.name, replacement, "rewriting legacy system variable");
                sb.push_str(replacement);
                return Ok(());
            }
        }

        sb.push('@');
        if self.system {
            sb.push('@');
        }
        if self.global {
            sb.push_str("GLOBAL.");
        }
        write_id(sb, &self.name, flag);

        Ok(())
    }
}
