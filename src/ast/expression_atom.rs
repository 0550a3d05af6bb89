use crate::ast::{
    ColumnNameAtom, ConstantAtom, ExpressionNode, FunctionCallAtom, IntervalAtom, MathAtom, MathOperator, NestedAtom,
    PredicateNode, Restore, RestoreError, RestoreFlag, SystemVariableAtom, UnaryAtom, UnaryInner, UnaryOperator, Value,
    VariableAtom,
};
use crate::visitor::Visitor;

/// The smallest self-contained pieces of a SQL expression.
///
/// The variant set is closed: rendering and visiting match on it exhaustively
/// and nothing outside this crate can add a kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionAtom {
    ColumnName(ColumnNameAtom),
    Math(MathAtom),
    Variable(VariableAtom),
    Constant(ConstantAtom),
    Nested(NestedAtom),
    FunctionCall(FunctionCallAtom),
    Unary(UnaryAtom),
    SystemVariable(SystemVariableAtom),
    Interval(IntervalAtom),
}

impl ExpressionAtom {
    pub fn column<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExpressionAtom::ColumnName(ColumnNameAtom::new(parts))
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        ExpressionAtom::Constant(ConstantAtom::new(value))
    }

    pub fn variable(n: usize) -> Self {
        ExpressionAtom::Variable(VariableAtom::new(n))
    }

    pub fn math(left: impl Into<ExpressionAtom>, operator: MathOperator, right: impl Into<ExpressionAtom>) -> Self {
        ExpressionAtom::Math(MathAtom::new(left, operator, right))
    }

    pub fn nested(inner: impl Into<ExpressionNode>) -> Self {
        ExpressionAtom::Nested(NestedAtom::new(inner))
    }

    pub fn unary(operator: UnaryOperator, inner: impl Into<UnaryInner>) -> Self {
        ExpressionAtom::Unary(UnaryAtom::new(operator, inner))
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            ExpressionAtom::ColumnName(node) => visitor.visit_atom_column(node),
            ExpressionAtom::Math(node) => visitor.visit_atom_math(node),
            ExpressionAtom::Variable(node) => visitor.visit_atom_variable(*node),
            ExpressionAtom::Constant(node) => visitor.visit_atom_constant(node),
            ExpressionAtom::Nested(node) => visitor.visit_atom_nested(node),
            ExpressionAtom::FunctionCall(node) => visitor.visit_atom_function(node),
            ExpressionAtom::Unary(node) => visitor.visit_atom_unary(node),
            ExpressionAtom::SystemVariable(node) => visitor.visit_atom_system_variable(node),
            ExpressionAtom::Interval(node) => visitor.visit_atom_interval(node),
        }
    }
}

impl Restore for ExpressionAtom {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        match self {
            ExpressionAtom::ColumnName(node) => node.restore(flag, sb, args),
            ExpressionAtom::Math(node) => node.restore(flag, sb, args),
            ExpressionAtom::Variable(node) => node.restore(flag, sb, args),
            ExpressionAtom::Constant(node) => node.restore(flag, sb, args),
            ExpressionAtom::Nested(node) => node.restore(flag, sb, args),
            ExpressionAtom::FunctionCall(node) => node.restore(flag, sb, args),
            ExpressionAtom::Unary(node) => node.restore(flag, sb, args),
            ExpressionAtom::SystemVariable(node) => node.restore(flag, sb, args),
            ExpressionAtom::Interval(node) => node.restore(flag, sb, args),
        }
    }
}

macro_rules! atom_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ExpressionAtom {
                fn from(node: $ty) -> Self {
                    ExpressionAtom::$variant(node)
                }
            }

            impl From<$ty> for PredicateNode {
                fn from(node: $ty) -> Self {
                    PredicateNode::Atom(ExpressionAtom::$variant(node))
                }
            }

            impl From<$ty> for ExpressionNode {
                fn from(node: $ty) -> Self {
                    ExpressionNode::Predicate(PredicateNode::Atom(ExpressionAtom::$variant(node)))
                }
            }
        )*
    };
}

atom_from! {
    ColumnNameAtom => ColumnName,
    MathAtom => Math,
    VariableAtom => Variable,
    ConstantAtom => Constant,
    NestedAtom => Nested,
    FunctionCallAtom => FunctionCall,
    UnaryAtom => Unary,
    SystemVariableAtom => SystemVariable,
    IntervalAtom => Interval,
}

impl From<ExpressionAtom> for PredicateNode {
    fn from(atom: ExpressionAtom) -> Self {
        PredicateNode::Atom(atom)
    }
}

impl From<ExpressionAtom> for ExpressionNode {
    fn from(atom: ExpressionAtom) -> Self {
        ExpressionNode::Predicate(PredicateNode::Atom(atom))
    }
}
