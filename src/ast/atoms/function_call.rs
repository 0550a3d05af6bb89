use crate::ast::{restore::restore_child, FunctionCall, Restore, RestoreError, RestoreFlag};
use crate::visitor::Visitor;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionCallAtom(FunctionCall);

impl FunctionCallAtom {
    pub fn new(call: impl Into<FunctionCall>) -> Self {
        Self(call.into())
    }

    pub fn call(&self) -> &FunctionCall {
        &self.0
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_atom_function(self)
    }
}

impl Restore for FunctionCallAtom {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        restore_child(&self.0, "FunctionCallAtom", flag, sb, args)
    }
}
