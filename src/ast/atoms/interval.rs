use std::time::Duration;

use crate::ast::{restore::restore_child, PredicateNode, Restore, RestoreError, RestoreFlag, TimeUnit};
use crate::visitor::Visitor;

/// `INTERVAL <value> <unit>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalAtom {
    pub unit: TimeUnit,
    pub value: Box<PredicateNode>,
}

impl IntervalAtom {
    pub fn new(value: impl Into<PredicateNode>, unit: TimeUnit) -> Self {
        Self { unit, value: Box::new(value.into()) }
    }

    /// Length of one unit of this interval.
    ///
    /// Only MICROSECOND, SECOND, MINUTE, HOUR and DAY have a fixed length;
    /// any other unit panics.
    pub fn duration(&self) -> Duration {
        match self.unit.fixed_duration() {
            Some(duration) => duration,
            None => panic!("unsupported interval unit {}!", self.unit),
        }
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_atom_interval(self)
    }
}

impl Restore for IntervalAtom {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        sb.push_str("INTERVAL ");
        restore_child(self.value.as_ref(), "IntervalAtom.value", flag, sb, args)?;
        sb.push(' ');
        sb.push_str(self.unit.keyword());
        Ok(())
    }
}
