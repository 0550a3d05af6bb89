use crate::ast::{functions::check_function_name, restore::restore_child, ExpressionNode, Restore, RestoreError, RestoreFlag};

/// A scalar function call such as `IFNULL(a, 0)` or `NOW()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    pub name: String,
    pub args: Vec<ExpressionNode>,
}

impl Function {
    pub fn new(name: impl Into<String>, args: Vec<ExpressionNode>) -> Self {
        Self { name: name.into(), args }
    }
}

impl Restore for Function {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, mut args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        check_function_name(&self.name)?;

        sb.push_str(&self.name);
        sb.push('(');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                sb.push_str(", ");
            }
            restore_child(arg, "Function.args", flag, sb, args.as_deref_mut())?;
        }
        sb.push(')');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        must_restore_to_string, restore_to_string, ColumnNameAtom, ConstantAtom, Function, RestoreError, RestoreFlag,
    };

    #[test]
    pub fn test_no_args() {
        assert_eq!(must_restore_to_string(RestoreFlag::DEFAULT, &Function::new("NOW", vec![])), "NOW()");
    }

    #[test]
    pub fn test_args_and_schema_name() {
        let function = Function::new("employees.hash_uid", vec![ColumnNameAtom::single("uid").into(), ConstantAtom::new(16i64).into()]);

        assert_eq!(must_restore_to_string(RestoreFlag::DEFAULT, &function), "employees.hash_uid(uid, 16)");
    }

    #[test]
    pub fn test_nested_function_argument() {
        let inner = Function::new("LOWER", vec![ColumnNameAtom::single("name").into()]);
        let outer = Function::new("CONCAT", vec![crate::ast::FunctionCallAtom::new(inner).into(), ConstantAtom::new("!").into()]);

        assert_eq!(must_restore_to_string(RestoreFlag::DEFAULT, &outer), "CONCAT(LOWER(name), '!')");
    }

    #[test]
    pub fn test_invalid_name() {
        for name in ["", "drop table;", ".x", "x."] {
            let err = restore_to_string(RestoreFlag::DEFAULT, &Function::new(name, vec![])).unwrap_err();
            assert_eq!(err, RestoreError::InvalidFunctionName(name.to_string()));
        }
    }

    #[test]
    pub fn test_argument_failure_is_wrapped() {
        let bad = Function::new("", vec![]);
        let outer = Function::new("ABS", vec![crate::ast::FunctionCallAtom::new(bad).into()]);

        let err = restore_to_string(RestoreFlag::DEFAULT, &outer).unwrap_err();
        assert_eq!(err.path(), vec!["Function.args", "FunctionCallAtom"]);
    }
}
