//! Expression atoms of a MySQL-dialect SQL AST, and their canonical
//! reconstruction back to SQL text.
//!
//! Trees are built by a parser outside this crate and are immutable once
//! built. [`Restore`](ast::Restore) renders a tree into a buffer, optionally
//! recording placeholder positions for parameter rebinding;
//! [`Visitor`](visitor::Visitor) drives structural passes.

pub mod ast;
pub use ast::{must_restore_to_string, restore_to_string, ExpressionAtom, Restore, RestoreError, RestoreFlag};

pub mod visitor;
pub use visitor::Visitor;

pub mod config;
pub use config::{ConfigError, RestoreConfig};
