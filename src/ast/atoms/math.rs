use crate::ast::{restore::restore_child, ExpressionAtom, MathOperator, Restore, RestoreError, RestoreFlag};
use crate::visitor::Visitor;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MathAtom {
    pub left: Box<ExpressionAtom>,
    pub operator: MathOperator,
    pub right: Box<ExpressionAtom>,
}

impl MathAtom {
    pub fn new(left: impl Into<ExpressionAtom>, operator: MathOperator, right: impl Into<ExpressionAtom>) -> Self {
        Self {
            left: Box::new(left.into()),
            operator,
            right: Box::new(right.into()),
        }
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_atom_math(self)
    }
}

impl Restore for MathAtom {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, mut args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        restore_child(self.left.as_ref(), "MathAtom.left", flag, sb, args.as_deref_mut())?;

        // `a DIV b` must keep its spaces, `aDIVb` would lex as one word
        match self.operator {
            MathOperator::IntDiv => {
                sb.push(' ');
                sb.push_str(self.operator.literal());
                sb.push(' ');
            }
            _ => sb.push_str(self.operator.literal()),
        }

        restore_child(self.right.as_ref(), "MathAtom.right", flag, sb, args)
    }
}
