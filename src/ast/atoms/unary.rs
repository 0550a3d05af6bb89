use crate::ast::{
    restore::restore_child, BinaryComparisonPredicate, ExpressionAtom, Restore, RestoreError, RestoreFlag, UnaryOperator,
};
use crate::visitor::Visitor;

/// Operand of a unary atom: a plain atom, or a comparison as in `NOT a = b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnaryInner {
    Atom(Box<ExpressionAtom>),
    Comparison(Box<BinaryComparisonPredicate>),
}

impl From<ExpressionAtom> for UnaryInner {
    fn from(atom: ExpressionAtom) -> Self {
        UnaryInner::Atom(Box::new(atom))
    }
}

impl From<BinaryComparisonPredicate> for UnaryInner {
    fn from(predicate: BinaryComparisonPredicate) -> Self {
        UnaryInner::Comparison(Box::new(predicate))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnaryAtom {
    pub operator: UnaryOperator,
    pub inner: UnaryInner,
}

impl UnaryAtom {
    pub fn new(operator: UnaryOperator, inner: impl Into<UnaryInner>) -> Self {
        Self { operator, inner: inner.into() }
    }

    /// True for the logical negations `!` and `NOT`.
    pub fn is_negation(&self) -> bool {
        self.operator.is_negation()
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_atom_unary(self)
    }
}

impl Restore for UnaryAtom {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        sb.push_str(self.operator.literal());
        match &self.inner {
            UnaryInner::Atom(atom) => restore_child(atom.as_ref(), "UnaryAtom.inner", flag, sb, args),
            UnaryInner::Comparison(predicate) => restore_child(predicate.as_ref(), "UnaryAtom.inner", flag, sb, args),
        }
    }
}
