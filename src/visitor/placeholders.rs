use crate::ast::{ExpressionNode, VariableAtom};
use crate::visitor::Walker;

/// Lists placeholder indices in the order `restore` would emit them, without
/// rendering any text.
#[derive(Debug, Default)]
pub struct PlaceholderCollector {
    indices: Vec<usize>,
}

impl PlaceholderCollector {
    pub fn collect(expr: &ExpressionNode) -> Vec<usize> {
        let mut collector = Self::default();
        let Ok(()) = expr.accept(&mut collector);
        collector.indices
    }
}

impl Walker for PlaceholderCollector {
    fn variable(&mut self, node: VariableAtom) {
        self.indices.push(node.n());
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        restore_to_string, BetweenPredicate, CaseWhenBranch, CaseWhenElseFunction, CastFunction, ColumnNameAtom,
        ExpressionAtom, ExpressionNode, FunctionCallAtom, IntervalAtom, LikePredicate, LogicalOperator, MathOperator,
        RestoreFlag, TimeUnit, VariableAtom,
    };
    use crate::visitor::PlaceholderCollector;

    #[test]
    pub fn test_matches_restore_order() {
        let between = BetweenPredicate::new(ColumnNameAtom::single("ts"), VariableAtom::new(0), ExpressionAtom::math(
            VariableAtom::new(1),
            MathOperator::Add,
            IntervalAtom::new(VariableAtom::new(2), TimeUnit::Day),
        ), false);
        let case = CaseWhenElseFunction::new(
            Some(VariableAtom::new(3).into()),
            vec![CaseWhenBranch::new(VariableAtom::new(4), FunctionCallAtom::new(CastFunction::cast(VariableAtom::new(5), "CHAR")))],
            Some(VariableAtom::new(6).into()),
        );
        let like = LikePredicate::new(FunctionCallAtom::new(case), VariableAtom::new(7), true);
        let expr = ExpressionNode::logical(between, LogicalOperator::And, like);

        let (_, restored) = restore_to_string(RestoreFlag::DEFAULT, &expr).unwrap();
        let visited = PlaceholderCollector::collect(&expr);

        assert_eq!(visited, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(visited, restored);
    }
}
