use crate::ast::{restore::restore_child, ExpressionNode, Restore, RestoreError, RestoreFlag};
use crate::visitor::Visitor;

/// A parenthesized sub-expression. Parentheses are only ever written here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NestedAtom {
    pub inner: Box<ExpressionNode>,
}

impl NestedAtom {
    pub fn new(inner: impl Into<ExpressionNode>) -> Self {
        Self { inner: Box::new(inner.into()) }
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_atom_nested(self)
    }
}

impl Restore for NestedAtom {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        sb.push('(');
        restore_child(self.inner.as_ref(), "NestedAtom.inner", flag, sb, args)?;
        sb.push(')');
        Ok(())
    }
}
