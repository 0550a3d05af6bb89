use crate::ast::{functions::check_function_name, restore::restore_child, ExpressionNode, Restore, RestoreError, RestoreFlag};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AggrArg {
    Star,
    Expression(ExpressionNode),
}

impl AggrArg {
    pub fn expr(expr: impl Into<ExpressionNode>) -> Self {
        AggrArg::Expression(expr.into())
    }
}

/// An aggregate such as `COUNT(*)` or `SUM(DISTINCT amount)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggrFunction {
    pub name: String,
    pub distinct: bool,
    pub args: Vec<AggrArg>,
}

impl AggrFunction {
    pub fn new(name: impl Into<String>, distinct: bool, args: Vec<AggrArg>) -> Self {
        Self { name: name.into(), distinct, args }
    }

    pub fn count_star() -> Self {
        Self::new("COUNT", false, vec![AggrArg::Star])
    }
}

impl Restore for AggrFunction {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, mut args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        check_function_name(&self.name)?;

        sb.push_str(&self.name);
        sb.push('(');
        if self.distinct {
            sb.push_str("DISTINCT ");
        }
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                sb.push_str(", ");
            }
            match arg {
                AggrArg::Star => sb.push('*'),
                AggrArg::Expression(expr) => restore_child(expr, "AggrFunction.args", flag, sb, args.as_deref_mut())?,
            }
        }
        sb.push(')');
        Ok(())
    }
}
