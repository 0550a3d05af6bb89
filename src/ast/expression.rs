use crate::ast::{restore::restore_child, LogicalOperator, PredicateNode, Restore, RestoreError, RestoreFlag};
use crate::visitor::Visitor;

/// A full boolean/value expression, as owned by nested atoms and function
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionNode {
    Logical(LogicalExpression),
    Not(NotExpression),
    Predicate(PredicateNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalExpression {
    pub op: LogicalOperator,
    pub left: Box<ExpressionNode>,
    pub right: Box<ExpressionNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotExpression {
    pub inner: Box<ExpressionNode>,
}

impl ExpressionNode {
    pub fn logical(left: impl Into<ExpressionNode>, op: LogicalOperator, right: impl Into<ExpressionNode>) -> Self {
        ExpressionNode::Logical(LogicalExpression {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        })
    }

    pub fn not(inner: impl Into<ExpressionNode>) -> Self {
        ExpressionNode::Not(NotExpression { inner: Box::new(inner.into()) })
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            ExpressionNode::Logical(node) => visitor.visit_expression_logical(node),
            ExpressionNode::Not(node) => visitor.visit_expression_not(node),
            ExpressionNode::Predicate(node) => node.accept(visitor),
        }
    }
}

impl From<PredicateNode> for ExpressionNode {
    fn from(predicate: PredicateNode) -> Self {
        ExpressionNode::Predicate(predicate)
    }
}

impl Restore for LogicalExpression {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, mut args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        restore_child(self.left.as_ref(), "LogicalExpression.left", flag, sb, args.as_deref_mut())?;
        sb.push(' ');
        sb.push_str(self.op.literal());
        sb.push(' ');
        restore_child(self.right.as_ref(), "LogicalExpression.right", flag, sb, args)
    }
}

impl Restore for NotExpression {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        sb.push_str("NOT ");
        restore_child(self.inner.as_ref(), "NotExpression.inner", flag, sb, args)
    }
}

impl Restore for ExpressionNode {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        match self {
            ExpressionNode::Logical(node) => node.restore(flag, sb, args),
            ExpressionNode::Not(node) => node.restore(flag, sb, args),
            ExpressionNode::Predicate(node) => node.restore(flag, sb, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        must_restore_to_string, BinaryComparisonPredicate, ColumnNameAtom, ComparisonOperator, ConstantAtom,
        ExpressionNode, LogicalOperator, NestedAtom, RestoreFlag,
    };

    fn eq(column: &str, value: i64) -> BinaryComparisonPredicate {
        BinaryComparisonPredicate::new(ColumnNameAtom::single(column), ComparisonOperator::Eq, ConstantAtom::new(value))
    }

    #[test]
    pub fn test_logical_and() {
        let expr = ExpressionNode::logical(eq("a", 1), LogicalOperator::And, eq("b", 2));

        assert_eq!(must_restore_to_string(RestoreFlag::DEFAULT, &expr), "a = 1 AND b = 2");
    }

    #[test]
    pub fn test_not_with_nested() {
        let or = ExpressionNode::logical(eq("a", 1), LogicalOperator::Or, eq("b", 2));
        let expr = ExpressionNode::not(NestedAtom::new(or));

        assert_eq!(must_restore_to_string(RestoreFlag::DEFAULT, &expr), "NOT (a = 1 OR b = 2)");
    }

    #[test]
    pub fn test_xor() {
        let expr = ExpressionNode::logical(ColumnNameAtom::single("x"), LogicalOperator::Xor, ColumnNameAtom::single("y"));

        assert_eq!(must_restore_to_string(RestoreFlag::DEFAULT, &expr), "x XOR y");
    }
}
