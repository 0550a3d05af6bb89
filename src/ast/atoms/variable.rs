use std::fmt;

use crate::ast::{Restore, RestoreError, RestoreFlag};

/// A `?` placeholder; the index is its position among the statement's
/// placeholders, counted left to right by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableAtom(usize);

impl VariableAtom {
    pub fn new(n: usize) -> Self {
        Self(n)
    }

    pub fn n(&self) -> usize {
        self.0
    }
}

impl Restore for VariableAtom {
    fn restore(&self, _: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        sb.push('?');
        if let Some(args) = args {
            args.push(self.0);
        }
        Ok(())
    }
}

impl fmt::Display for VariableAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("?")
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Restore, RestoreFlag, VariableAtom};

    #[test]
    pub fn test_collects_index() {
        let variable = VariableAtom::new(3);

        let mut sb = String::new();
        let mut args = vec![];
        variable.restore(RestoreFlag::DEFAULT, &mut sb, Some(&mut args)).unwrap();

        assert_eq!(sb, "?");
        assert_eq!(args, vec![3]);
    }

    #[test]
    pub fn test_repeatable_with_fresh_accumulators() {
        let variable = VariableAtom::new(1);

        for _ in 0..3 {
            let mut sb = String::new();
            let mut args = vec![];
            variable.restore(RestoreFlag::COMPAT_80, &mut sb, Some(&mut args)).unwrap();

            assert_eq!(sb, "?");
            assert_eq!(args, vec![1]);
        }
    }

    #[test]
    pub fn test_without_accumulator() {
        let mut sb = String::new();
        VariableAtom::new(0).restore(RestoreFlag::DEFAULT, &mut sb, None).unwrap();

        assert_eq!(sb, "?");
    }
}
