//! Structural passes over expression trees.
//!
//! A pass implements [`Visitor`]; each node's `accept` routes to the single
//! method matching its kind. Passes that only accumulate state (output `()`)
//! can hand the nodes they don't care about to the [`walk`] functions, which
//! visit the children in the same left-to-right order `restore` writes them.
//! Passes that only look at leaves implement [`Walker`] instead and get the
//! whole traversal for free.

use std::convert::Infallible;

use crate::ast::{
    AggrFunction, BetweenPredicate, BinaryComparisonPredicate, CaseWhenElseFunction, CastFunction, ColumnNameAtom,
    ConstantAtom, Function, FunctionCallAtom, InPredicate, IntervalAtom, IsNullPredicate, LikePredicate,
    LogicalExpression, MathAtom, NestedAtom, NotExpression, SystemVariableAtom, UnaryAtom, VariableAtom,
};

pub mod columns;
pub use columns::*;

pub mod placeholders;
pub use placeholders::*;

pub trait Visitor {
    type Output;
    type Error;

    fn visit_atom_column(&mut self, node: &ColumnNameAtom) -> Result<Self::Output, Self::Error>;
    fn visit_atom_math(&mut self, node: &MathAtom) -> Result<Self::Output, Self::Error>;
    fn visit_atom_variable(&mut self, node: VariableAtom) -> Result<Self::Output, Self::Error>;
    fn visit_atom_constant(&mut self, node: &ConstantAtom) -> Result<Self::Output, Self::Error>;
    fn visit_atom_nested(&mut self, node: &NestedAtom) -> Result<Self::Output, Self::Error>;
    fn visit_atom_function(&mut self, node: &FunctionCallAtom) -> Result<Self::Output, Self::Error>;
    fn visit_atom_unary(&mut self, node: &UnaryAtom) -> Result<Self::Output, Self::Error>;
    fn visit_atom_system_variable(&mut self, node: &SystemVariableAtom) -> Result<Self::Output, Self::Error>;
    fn visit_atom_interval(&mut self, node: &IntervalAtom) -> Result<Self::Output, Self::Error>;

    fn visit_expression_logical(&mut self, node: &LogicalExpression) -> Result<Self::Output, Self::Error>;
    fn visit_expression_not(&mut self, node: &NotExpression) -> Result<Self::Output, Self::Error>;

    fn visit_predicate_binary_comparison(&mut self, node: &BinaryComparisonPredicate) -> Result<Self::Output, Self::Error>;
    fn visit_predicate_between(&mut self, node: &BetweenPredicate) -> Result<Self::Output, Self::Error>;
    fn visit_predicate_in(&mut self, node: &InPredicate) -> Result<Self::Output, Self::Error>;
    fn visit_predicate_like(&mut self, node: &LikePredicate) -> Result<Self::Output, Self::Error>;
    fn visit_predicate_is_null(&mut self, node: &IsNullPredicate) -> Result<Self::Output, Self::Error>;

    fn visit_function(&mut self, node: &Function) -> Result<Self::Output, Self::Error>;
    fn visit_aggregate_function(&mut self, node: &AggrFunction) -> Result<Self::Output, Self::Error>;
    fn visit_case_when_function(&mut self, node: &CaseWhenElseFunction) -> Result<Self::Output, Self::Error>;
    fn visit_cast_function(&mut self, node: &CastFunction) -> Result<Self::Output, Self::Error>;
}

/// A pass interested only in leaves. Every interior node is walked in restore
/// order and each leaf lands on its hook.
pub trait Walker {
    fn column(&mut self, _node: &ColumnNameAtom) {}
    fn variable(&mut self, _node: VariableAtom) {}
    fn constant(&mut self, _node: &ConstantAtom) {}
    fn system_variable(&mut self, _node: &SystemVariableAtom) {}
}

impl<W: Walker> Visitor for W {
    type Output = ();
    type Error = Infallible;

    fn visit_atom_column(&mut self, node: &ColumnNameAtom) -> Result<(), Infallible> {
        self.column(node);
        Ok(())
    }

    fn visit_atom_math(&mut self, node: &MathAtom) -> Result<(), Infallible> {
        walk::atom_math(self, node)
    }

    fn visit_atom_variable(&mut self, node: VariableAtom) -> Result<(), Infallible> {
        self.variable(node);
        Ok(())
    }

    fn visit_atom_constant(&mut self, node: &ConstantAtom) -> Result<(), Infallible> {
        self.constant(node);
        Ok(())
    }

    fn visit_atom_nested(&mut self, node: &NestedAtom) -> Result<(), Infallible> {
        walk::atom_nested(self, node)
    }

    fn visit_atom_function(&mut self, node: &FunctionCallAtom) -> Result<(), Infallible> {
        walk::atom_function(self, node)
    }

    fn visit_atom_unary(&mut self, node: &UnaryAtom) -> Result<(), Infallible> {
        walk::atom_unary(self, node)
    }

    fn visit_atom_system_variable(&mut self, node: &SystemVariableAtom) -> Result<(), Infallible> {
        self.system_variable(node);
        Ok(())
    }

    fn visit_atom_interval(&mut self, node: &IntervalAtom) -> Result<(), Infallible> {
        walk::atom_interval(self, node)
    }

    fn visit_expression_logical(&mut self, node: &LogicalExpression) -> Result<(), Infallible> {
        walk::expression_logical(self, node)
    }

    fn visit_expression_not(&mut self, node: &NotExpression) -> Result<(), Infallible> {
        walk::expression_not(self, node)
    }

    fn visit_predicate_binary_comparison(&mut self, node: &BinaryComparisonPredicate) -> Result<(), Infallible> {
        walk::predicate_binary_comparison(self, node)
    }

    fn visit_predicate_between(&mut self, node: &BetweenPredicate) -> Result<(), Infallible> {
        walk::predicate_between(self, node)
    }

    fn visit_predicate_in(&mut self, node: &InPredicate) -> Result<(), Infallible> {
        walk::predicate_in(self, node)
    }

    fn visit_predicate_like(&mut self, node: &LikePredicate) -> Result<(), Infallible> {
        walk::predicate_like(self, node)
    }

    fn visit_predicate_is_null(&mut self, node: &IsNullPredicate) -> Result<(), Infallible> {
        walk::predicate_is_null(self, node)
    }

    fn visit_function(&mut self, node: &Function) -> Result<(), Infallible> {
        walk::function(self, node)
    }

    fn visit_aggregate_function(&mut self, node: &AggrFunction) -> Result<(), Infallible> {
        walk::aggregate_function(self, node)
    }

    fn visit_case_when_function(&mut self, node: &CaseWhenElseFunction) -> Result<(), Infallible> {
        walk::case_when_function(self, node)
    }

    fn visit_cast_function(&mut self, node: &CastFunction) -> Result<(), Infallible> {
        walk::cast_function(self, node)
    }
}

/// Child traversal for visitors whose output is `()`.
pub mod walk {
    use crate::ast::{
        AggrArg, AggrFunction, BetweenPredicate, BinaryComparisonPredicate, CaseWhenElseFunction, CastFunction,
        Function, FunctionCallAtom, InPredicate, IntervalAtom, IsNullPredicate, LikePredicate, LogicalExpression,
        MathAtom, NestedAtom, NotExpression, UnaryAtom, UnaryInner,
    };
    use crate::visitor::Visitor;

    pub fn atom_math<V: Visitor<Output = ()>>(v: &mut V, node: &MathAtom) -> Result<(), V::Error> {
        node.left.accept(v)?;
        node.right.accept(v)
    }

    pub fn atom_nested<V: Visitor<Output = ()>>(v: &mut V, node: &NestedAtom) -> Result<(), V::Error> {
        node.inner.accept(v)
    }

    pub fn atom_function<V: Visitor<Output = ()>>(v: &mut V, node: &FunctionCallAtom) -> Result<(), V::Error> {
        node.call().accept(v)
    }

    pub fn atom_unary<V: Visitor<Output = ()>>(v: &mut V, node: &UnaryAtom) -> Result<(), V::Error> {
        match &node.inner {
            UnaryInner::Atom(atom) => atom.accept(v),
            UnaryInner::Comparison(predicate) => v.visit_predicate_binary_comparison(predicate),
        }
    }

    pub fn atom_interval<V: Visitor<Output = ()>>(v: &mut V, node: &IntervalAtom) -> Result<(), V::Error> {
        node.value.accept(v)
    }

    pub fn expression_logical<V: Visitor<Output = ()>>(v: &mut V, node: &LogicalExpression) -> Result<(), V::Error> {
        node.left.accept(v)?;
        node.right.accept(v)
    }

    pub fn expression_not<V: Visitor<Output = ()>>(v: &mut V, node: &NotExpression) -> Result<(), V::Error> {
        node.inner.accept(v)
    }

    pub fn predicate_binary_comparison<V: Visitor<Output = ()>>(v: &mut V, node: &BinaryComparisonPredicate) -> Result<(), V::Error> {
        node.left.accept(v)?;
        node.right.accept(v)
    }

    pub fn predicate_between<V: Visitor<Output = ()>>(v: &mut V, node: &BetweenPredicate) -> Result<(), V::Error> {
        node.key.accept(v)?;
        node.low.accept(v)?;
        node.high.accept(v)
    }

    pub fn predicate_in<V: Visitor<Output = ()>>(v: &mut V, node: &InPredicate) -> Result<(), V::Error> {
        node.key.accept(v)?;
        node.list.iter().try_for_each(|item| item.accept(v))
    }

    pub fn predicate_like<V: Visitor<Output = ()>>(v: &mut V, node: &LikePredicate) -> Result<(), V::Error> {
        node.key.accept(v)?;
        node.pattern.accept(v)
    }

    pub fn predicate_is_null<V: Visitor<Output = ()>>(v: &mut V, node: &IsNullPredicate) -> Result<(), V::Error> {
        node.key.accept(v)
    }

    pub fn function<V: Visitor<Output = ()>>(v: &mut V, node: &Function) -> Result<(), V::Error> {
        node.args.iter().try_for_each(|arg| arg.accept(v))
    }

    pub fn aggregate_function<V: Visitor<Output = ()>>(v: &mut V, node: &AggrFunction) -> Result<(), V::Error> {
        node.args.iter().try_for_each(|arg| match arg {
            AggrArg::Star => Ok(()),
            AggrArg::Expression(expr) => expr.accept(v),
        })
    }

    pub fn case_when_function<V: Visitor<Output = ()>>(v: &mut V, node: &CaseWhenElseFunction) -> Result<(), V::Error> {
        if let Some(case) = &node.case {
            case.accept(v)?;
        }
        for branch in &node.branches {
            branch.when.accept(v)?;
            branch.then.accept(v)?;
        }
        match &node.otherwise {
            Some(otherwise) => otherwise.accept(v),
            None => Ok(()),
        }
    }

    pub fn cast_function<V: Visitor<Output = ()>>(v: &mut V, node: &CastFunction) -> Result<(), V::Error> {
        node.source.accept(v)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use crate::ast::{
        AggrFunction, BetweenPredicate, BinaryComparisonPredicate, CaseWhenElseFunction, CastFunction, ColumnNameAtom,
        ConstantAtom, ExpressionAtom, Function, FunctionCallAtom, InPredicate, IntervalAtom, IsNullPredicate,
        LikePredicate, LogicalExpression, MathAtom, MathOperator, NestedAtom, NotExpression, SystemVariableAtom,
        TimeUnit, UnaryAtom, UnaryOperator, VariableAtom,
    };
    use crate::visitor::{Visitor, Walker};

    /// Reports which method the dispatch landed on.
    struct KindOf;

    impl Visitor for KindOf {
        type Output = &'static str;
        type Error = Infallible;

        fn visit_atom_column(&mut self, _: &ColumnNameAtom) -> Result<&'static str, Infallible> { Ok("column") }
        fn visit_atom_math(&mut self, _: &MathAtom) -> Result<&'static str, Infallible> { Ok("math") }
        fn visit_atom_variable(&mut self, _: VariableAtom) -> Result<&'static str, Infallible> { Ok("variable") }
        fn visit_atom_constant(&mut self, _: &ConstantAtom) -> Result<&'static str, Infallible> { Ok("constant") }
        fn visit_atom_nested(&mut self, _: &NestedAtom) -> Result<&'static str, Infallible> { Ok("nested") }
        fn visit_atom_function(&mut self, _: &FunctionCallAtom) -> Result<&'static str, Infallible> { Ok("function") }
        fn visit_atom_unary(&mut self, _: &UnaryAtom) -> Result<&'static str, Infallible> { Ok("unary") }
        fn visit_atom_system_variable(&mut self, _: &SystemVariableAtom) -> Result<&'static str, Infallible> { Ok("system_variable") }
        fn visit_atom_interval(&mut self, _: &IntervalAtom) -> Result<&'static str, Infallible> { Ok("interval") }
        fn visit_expression_logical(&mut self, _: &LogicalExpression) -> Result<&'static str, Infallible> { Ok("logical") }
        fn visit_expression_not(&mut self, _: &NotExpression) -> Result<&'static str, Infallible> { Ok("not") }
        fn visit_predicate_binary_comparison(&mut self, _: &BinaryComparisonPredicate) -> Result<&'static str, Infallible> { Ok("comparison") }
        fn visit_predicate_between(&mut self, _: &BetweenPredicate) -> Result<&'static str, Infallible> { Ok("between") }
        fn visit_predicate_in(&mut self, _: &InPredicate) -> Result<&'static str, Infallible> { Ok("in") }
        fn visit_predicate_like(&mut self, _: &LikePredicate) -> Result<&'static str, Infallible> { Ok("like") }
        fn visit_predicate_is_null(&mut self, _: &IsNullPredicate) -> Result<&'static str, Infallible> { Ok("is_null") }
        fn visit_function(&mut self, _: &Function) -> Result<&'static str, Infallible> { Ok("plain") }
        fn visit_aggregate_function(&mut self, _: &AggrFunction) -> Result<&'static str, Infallible> { Ok("aggregate") }
        fn visit_case_when_function(&mut self, _: &CaseWhenElseFunction) -> Result<&'static str, Infallible> { Ok("case_when") }
        fn visit_cast_function(&mut self, _: &CastFunction) -> Result<&'static str, Infallible> { Ok("cast") }
    }

    #[test]
    pub fn test_dispatch_per_atom_variant() {
        let cases = vec![
            (ExpressionAtom::column(["a"]), "column"),
            (ExpressionAtom::math(ExpressionAtom::variable(0), MathOperator::Add, ExpressionAtom::variable(1)), "math"),
            (ExpressionAtom::variable(0), "variable"),
            (ExpressionAtom::constant(1i64), "constant"),
            (ExpressionAtom::nested(ExpressionAtom::variable(0)), "nested"),
            (ExpressionAtom::from(FunctionCallAtom::new(AggrFunction::count_star())), "function"),
            (ExpressionAtom::unary(UnaryOperator::Minus, ExpressionAtom::variable(0)), "unary"),
            (ExpressionAtom::from(SystemVariableAtom::system("version")), "system_variable"),
            (ExpressionAtom::from(IntervalAtom::new(ExpressionAtom::constant(1i64), TimeUnit::Day)), "interval"),
        ];

        for (atom, expected) in cases {
            assert_eq!(atom.accept(&mut KindOf).unwrap(), expected);
        }
    }

    #[test]
    pub fn test_function_call_dispatches_to_inner_kind() {
        let atom = FunctionCallAtom::new(CastFunction::cast(ExpressionAtom::variable(0), "SIGNED"));

        assert_eq!(atom.accept(&mut KindOf).unwrap(), "function");
        assert_eq!(atom.call().accept(&mut KindOf).unwrap(), "cast");
    }

    #[test]
    pub fn test_predicate_atom_dispatches_to_atom() {
        let predicate = crate::ast::PredicateNode::from(ExpressionAtom::constant(1i64));

        assert_eq!(predicate.accept(&mut KindOf).unwrap(), "constant");
    }

    /// Counts leaves by kind through the default traversal.
    #[derive(Default)]
    struct LeafCount {
        constants: usize,
        system_variables: usize,
    }

    impl Walker for LeafCount {
        fn constant(&mut self, _: &ConstantAtom) {
            self.constants += 1;
        }

        fn system_variable(&mut self, _: &SystemVariableAtom) {
            self.system_variables += 1;
        }
    }

    #[test]
    pub fn test_walker_reaches_every_leaf() {
        let expr = crate::ast::ExpressionNode::logical(
            BetweenPredicate::new(
                ExpressionAtom::nested(ExpressionAtom::constant(1i64)),
                SystemVariableAtom::system("max_connections"),
                FunctionCallAtom::new(Function::new("ABS", vec![ExpressionAtom::constant(-2i64).into()])),
                false,
            ),
            crate::ast::LogicalOperator::Or,
            IsNullPredicate::new(ExpressionAtom::unary(UnaryOperator::Minus, ExpressionAtom::constant(3i64)), true),
        );
        let mut count = LeafCount::default();

        let Ok(()) = expr.accept(&mut count);
        assert_eq!(count.constants, 3);
        assert_eq!(count.system_variables, 1);
    }
}
