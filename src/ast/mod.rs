pub mod restore_error;
pub use restore_error::*;

pub mod restore;
pub use restore::{must_restore_to_string, restore_to_string, Restore, RestoreFlag};

pub mod escape;
pub mod compat;

pub mod literals;
pub use literals::*;

pub mod operators;
pub use operators::*;

pub mod time_unit;
pub use time_unit::*;

pub mod atoms;
pub use atoms::*;

pub mod expression_atom;
pub use expression_atom::*;

pub mod expression;
pub use expression::*;

pub mod predicate;
pub use predicate::*;

pub mod functions;
pub use functions::*;
