use crate::ast::{restore::restore_child, ExpressionNode, Restore, RestoreError, RestoreFlag};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseWhenBranch {
    pub when: ExpressionNode,
    pub then: ExpressionNode,
}

impl CaseWhenBranch {
    pub fn new(when: impl Into<ExpressionNode>, then: impl Into<ExpressionNode>) -> Self {
        Self { when: when.into(), then: then.into() }
    }
}

/// `CASE [operand] WHEN .. THEN .. [ELSE ..] END`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseWhenElseFunction {
    pub case: Option<Box<ExpressionNode>>,
    pub branches: Vec<CaseWhenBranch>,
    pub otherwise: Option<Box<ExpressionNode>>,
}

impl CaseWhenElseFunction {
    pub fn new(case: Option<ExpressionNode>, branches: Vec<CaseWhenBranch>, otherwise: Option<ExpressionNode>) -> Self {
        Self {
            case: case.map(Box::new),
            branches,
            otherwise: otherwise.map(Box::new),
        }
    }
}

impl Restore for CaseWhenElseFunction {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, mut args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        if self.branches.is_empty() {
            return RestoreError::MissingCaseBranch.err();
        }

        sb.push_str("CASE ");
        if let Some(case) = &self.case {
            restore_child(case.as_ref(), "CaseWhenElseFunction.case", flag, sb, args.as_deref_mut())?;
            sb.push(' ');
        }
        for branch in &self.branches {
            sb.push_str("WHEN ");
            restore_child(&branch.when, "CaseWhenBranch.when", flag, sb, args.as_deref_mut())?;
            sb.push_str(" THEN ");
            restore_child(&branch.then, "CaseWhenBranch.then", flag, sb, args.as_deref_mut())?;
            sb.push(' ');
        }
        if let Some(otherwise) = &self.otherwise {
            sb.push_str("ELSE ");
            restore_child(otherwise.as_ref(), "CaseWhenElseFunction.otherwise", flag, sb, args)?;
            sb.push(' ');
        }
        sb.push_str("END");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        must_restore_to_string, restore_to_string, BinaryComparisonPredicate, CaseWhenBranch, CaseWhenElseFunction,
        ColumnNameAtom, ComparisonOperator, ConstantAtom, RestoreError, RestoreFlag, VariableAtom,
    };

    #[test]
    pub fn test_simple_case() {
        let case = CaseWhenElseFunction::new(
            Some(ColumnNameAtom::single("level").into()),
            vec![
                CaseWhenBranch::new(ConstantAtom::new(1i64), ConstantAtom::new("low")),
                CaseWhenBranch::new(ConstantAtom::new(2i64), ConstantAtom::new("high")),
            ],
            Some(ConstantAtom::new("unknown").into()),
        );

        assert_eq!(
            must_restore_to_string(RestoreFlag::DEFAULT, &case),
            "CASE level WHEN 1 THEN 'low' WHEN 2 THEN 'high' ELSE 'unknown' END"
        );
    }

    #[test]
    pub fn test_searched_case_collects_placeholders() {
        let when = BinaryComparisonPredicate::new(ColumnNameAtom::single("age"), ComparisonOperator::Gt, VariableAtom::new(0));
        let case = CaseWhenElseFunction::new(None, vec![CaseWhenBranch::new(when, VariableAtom::new(1))], None);

        let (sql, args) = restore_to_string(RestoreFlag::DEFAULT, &case).unwrap();
        assert_eq!(sql, "CASE WHEN age > ? THEN ? END");
        assert_eq!(args, vec![0, 1]);
    }

    #[test]
    pub fn test_without_branches() {
        let case = CaseWhenElseFunction::new(None, vec![], Some(ConstantAtom::new(1i64).into()));

        assert_eq!(restore_to_string(RestoreFlag::DEFAULT, &case).unwrap_err(), RestoreError::MissingCaseBranch);
    }
}
