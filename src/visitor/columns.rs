use indexmap::IndexSet;

use crate::ast::{ColumnNameAtom, ExpressionNode};
use crate::visitor::Walker;

/// Collects every column an expression references, first occurrence first.
#[derive(Debug, Default)]
pub struct ColumnCollector {
    columns: IndexSet<ColumnNameAtom>,
}

impl ColumnCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(expr: &ExpressionNode) -> IndexSet<ColumnNameAtom> {
        let mut collector = Self::new();
        let Ok(()) = expr.accept(&mut collector);
        collector.columns
    }

    pub fn columns(&self) -> &IndexSet<ColumnNameAtom> {
        &self.columns
    }

    pub fn into_columns(self) -> IndexSet<ColumnNameAtom> {
        self.columns
    }
}

impl Walker for ColumnCollector {
    fn column(&mut self, node: &ColumnNameAtom) {
        self.columns.insert(node.clone());
    }
}
