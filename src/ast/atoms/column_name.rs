use std::fmt;

use crate::ast::{escape::write_id, Restore, RestoreError, RestoreFlag};

/// A possibly qualified column reference such as `schema.table.column`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnNameAtom(Vec<String>);

impl ColumnNameAtom {
    /// Panics when `parts` is empty: a column always has a name.
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        assert!(!parts.is_empty(), "column name atom requires at least one part");
        Self(parts)
    }

    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// First part of a qualified name, empty for a bare column.
    pub fn prefix(&self) -> &str {
        if self.0.len() > 1 { &self.0[0] } else { "" }
    }

    pub fn suffix(&self) -> &str {
        &self.0[self.0.len() - 1]
    }
}

impl Restore for ColumnNameAtom {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, _: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        write_id(sb, &self.0[0], flag);
        for part in &self.0[1..] {
            sb.push('.');
            write_id(sb, part, flag);
        }
        Ok(())
    }
}

impl fmt::Display for ColumnNameAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sb = String::new();
        self.restore(RestoreFlag::DEFAULT, &mut sb, None).map_err(|_| fmt::Error)?;
        f.write_str(&sb)
    }
}
