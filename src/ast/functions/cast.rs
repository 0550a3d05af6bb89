use crate::ast::{restore::restore_child, ExpressionNode, Restore, RestoreError, RestoreFlag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastStyle {
    /// `CAST(x AS type)`
    Cast,
    /// `CONVERT(x, type)`
    Convert,
    /// `CONVERT(x USING charset)`
    ConvertUsing,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CastFunction {
    pub source: Box<ExpressionNode>,
    pub target: String,
    pub style: CastStyle,
}

impl CastFunction {
    pub fn new(source: impl Into<ExpressionNode>, target: impl Into<String>, style: CastStyle) -> Self {
        Self {
            source: Box::new(source.into()),
            target: target.into(),
            style,
        }
    }

    pub fn cast(source: impl Into<ExpressionNode>, target: impl Into<String>) -> Self {
        Self::new(source, target, CastStyle::Cast)
    }

    pub fn convert(source: impl Into<ExpressionNode>, target: impl Into<String>) -> Self {
        Self::new(source, target, CastStyle::Convert)
    }

    pub fn convert_using(source: impl Into<ExpressionNode>, charset: impl Into<String>) -> Self {
        Self::new(source, charset, CastStyle::ConvertUsing)
    }

    // type names like `DECIMAL(10,2)` or `CHAR(8) CHARSET utf8mb4` are written
    // verbatim, so reject anything that could end the call early
    fn check_target(&self) -> Result<(), RestoreError> {
        let target = self.target.trim();
        let mut depth = 0i32;
        for c in target.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                ';' | '\'' | '"' | '`' => depth = -1,
                _ => {}
            }
            if depth < 0 {
                break;
            }
        }

        if target.is_empty() || depth != 0 {
            return RestoreError::InvalidCastType(self.target.clone()).err();
        }
        Ok(())
    }
}

impl Restore for CastFunction {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        self.check_target()?;

        let target = self.target.trim();
        match self.style {
            CastStyle::Cast => {
                sb.push_str("CAST(");
                restore_child(self.source.as_ref(), "CastFunction.source", flag, sb, args)?;
                sb.push_str(" AS ");
            }
            CastStyle::Convert => {
                sb.push_str("CONVERT(");
                restore_child(self.source.as_ref(), "CastFunction.source", flag, sb, args)?;
                sb.push_str(", ");
            }
            CastStyle::ConvertUsing => {
                sb.push_str("CONVERT(");
                restore_child(self.source.as_ref(), "CastFunction.source", flag, sb, args)?;
                sb.push_str(" USING ");
            }
        }
        sb.push_str(target);
        sb.push(')');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        must_restore_to_string, restore_to_string, CastFunction, ColumnNameAtom, RestoreError, RestoreFlag, VariableAtom,
    };

    #[test]
    pub fn test_cast() {
        let cast = CastFunction::cast(ColumnNameAtom::single("price"), "DECIMAL(10,2)");

        assert_eq!(must_restore_to_string(RestoreFlag::DEFAULT, &cast), "CAST(price AS DECIMAL(10,2))");
    }

    #[test]
    pub fn test_convert() {
        let convert = CastFunction::convert(VariableAtom::new(0), " SIGNED ");

        let (sql, args) = restore_to_string(RestoreFlag::DEFAULT, &convert).unwrap();
        assert_eq!(sql, "CONVERT(?, SIGNED)");
        assert_eq!(args, vec![0]);
    }

    #[test]
    pub fn test_convert_using() {
        let convert = CastFunction::convert_using(ColumnNameAtom::single("title"), "utf8mb4");

        assert_eq!(must_restore_to_string(RestoreFlag::DEFAULT, &convert), "CONVERT(title USING utf8mb4)");
    }

    #[test]
    pub fn test_invalid_targets() {
        for target in ["", "   ", "CHAR(8", "SIGNED); DROP TABLE t", "CHAR)("] {
            let cast = CastFunction::cast(ColumnNameAtom::single("a"), target);
            let err = restore_to_string(RestoreFlag::DEFAULT, &cast).unwrap_err();
            assert_eq!(err, RestoreError::InvalidCastType(target.to_string()));
        }
    }
}
