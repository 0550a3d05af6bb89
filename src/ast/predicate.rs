use crate::ast::{
    restore::restore_child, ComparisonOperator, ExpressionAtom, ExpressionNode, Restore, RestoreError, RestoreFlag,
};
use crate::visitor::Visitor;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PredicateNode {
    Atom(ExpressionAtom),
    BinaryComparison(BinaryComparisonPredicate),
    Between(BetweenPredicate),
    In(InPredicate),
    Like(LikePredicate),
    IsNull(IsNullPredicate),
}

/// `left <op> right`, e.g. `uid = ?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryComparisonPredicate {
    pub left: Box<PredicateNode>,
    pub op: ComparisonOperator,
    pub right: Box<PredicateNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BetweenPredicate {
    pub key: Box<PredicateNode>,
    pub low: Box<PredicateNode>,
    pub high: Box<PredicateNode>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InPredicate {
    pub key: Box<PredicateNode>,
    pub list: Vec<ExpressionNode>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LikePredicate {
    pub key: Box<PredicateNode>,
    pub pattern: Box<PredicateNode>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsNullPredicate {
    pub key: Box<PredicateNode>,
    pub negated: bool,
}

impl BinaryComparisonPredicate {
    pub fn new(left: impl Into<PredicateNode>, op: ComparisonOperator, right: impl Into<PredicateNode>) -> Self {
        Self {
            left: Box::new(left.into()),
            op,
            right: Box::new(right.into()),
        }
    }
}

impl BetweenPredicate {
    pub fn new(key: impl Into<PredicateNode>, low: impl Into<PredicateNode>, high: impl Into<PredicateNode>, negated: bool) -> Self {
        Self {
            key: Box::new(key.into()),
            low: Box::new(low.into()),
            high: Box::new(high.into()),
            negated,
        }
    }
}

impl InPredicate {
    pub fn new(key: impl Into<PredicateNode>, list: Vec<ExpressionNode>, negated: bool) -> Self {
        Self { key: Box::new(key.into()), list, negated }
    }
}

impl LikePredicate {
    pub fn new(key: impl Into<PredicateNode>, pattern: impl Into<PredicateNode>, negated: bool) -> Self {
        Self {
            key: Box::new(key.into()),
            pattern: Box::new(pattern.into()),
            negated,
        }
    }
}

impl IsNullPredicate {
    pub fn new(key: impl Into<PredicateNode>, negated: bool) -> Self {
        Self { key: Box::new(key.into()), negated }
    }
}

impl PredicateNode {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            PredicateNode::Atom(node) => node.accept(visitor),
            PredicateNode::BinaryComparison(node) => visitor.visit_predicate_binary_comparison(node),
            PredicateNode::Between(node) => visitor.visit_predicate_between(node),
            PredicateNode::In(node) => visitor.visit_predicate_in(node),
            PredicateNode::Like(node) => visitor.visit_predicate_like(node),
            PredicateNode::IsNull(node) => visitor.visit_predicate_is_null(node),
        }
    }
}

impl Restore for PredicateNode {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        match self {
            PredicateNode::Atom(node) => node.restore(flag, sb, args),
            PredicateNode::BinaryComparison(node) => node.restore(flag, sb, args),
            PredicateNode::Between(node) => node.restore(flag, sb, args),
            PredicateNode::In(node) => node.restore(flag, sb, args),
            PredicateNode::Like(node) => node.restore(flag, sb, args),
            PredicateNode::IsNull(node) => node.restore(flag, sb, args),
        }
    }
}

impl Restore for BinaryComparisonPredicate {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, mut args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        restore_child(self.left.as_ref(), "BinaryComparisonPredicate.left", flag, sb, args.as_deref_mut())?;
        sb.push(' ');
        sb.push_str(self.op.literal());
        sb.push(' ');
        restore_child(self.right.as_ref(), "BinaryComparisonPredicate.right", flag, sb, args)
    }
}

impl Restore for BetweenPredicate {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, mut args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        restore_child(self.key.as_ref(), "BetweenPredicate.key", flag, sb, args.as_deref_mut())?;
        sb.push_str(if self.negated { " NOT BETWEEN " } else { " BETWEEN " });
        restore_child(self.low.as_ref(), "BetweenPredicate.low", flag, sb, args.as_deref_mut())?;
        sb.push_str(" AND ");
        restore_child(self.high.as_ref(), "BetweenPredicate.high", flag, sb, args)
    }
}

impl Restore for InPredicate {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, mut args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        if self.list.is_empty() {
            return RestoreError::EmptyInList.err();
        }

        restore_child(self.key.as_ref(), "InPredicate.key", flag, sb, args.as_deref_mut())?;
        sb.push_str(if self.negated { " NOT IN (" } else { " IN (" });
        for (i, item) in self.list.iter().enumerate() {
            if i > 0 {
                sb.push_str(", ");
            }
            restore_child(item, "InPredicate.list", flag, sb, args.as_deref_mut())?;
        }
        sb.push(')');
        Ok(())
    }
}

impl Restore for LikePredicate {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, mut args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        restore_child(self.key.as_ref(), "LikePredicate.key", flag, sb, args.as_deref_mut())?;
        sb.push_str(if self.negated { " NOT LIKE " } else { " LIKE " });
        restore_child(self.pattern.as_ref(), "LikePredicate.pattern", flag, sb, args)
    }
}

impl Restore for IsNullPredicate {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        restore_child(self.key.as_ref(), "IsNullPredicate.key", flag, sb, args)?;
        sb.push_str(if self.negated { " IS NOT NULL" } else { " IS NULL" });
        Ok(())
    }
}

macro_rules! predicate_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for PredicateNode {
                fn from(node: $ty) -> Self {
                    PredicateNode::$variant(node)
                }
            }

            impl From<$ty> for ExpressionNode {
                fn from(node: $ty) -> Self {
                    ExpressionNode::Predicate(PredicateNode::$variant(node))
                }
            }
        )*
    };
}

predicate_from! {
    BinaryComparisonPredicate => BinaryComparison,
    BetweenPredicate => Between,
    InPredicate => In,
    LikePredicate => Like,
    IsNullPredicate => IsNull,
}
