use crate::ast::{Restore, RestoreError, RestoreFlag};
use crate::visitor::Visitor;

pub mod function;
pub use function::*;

pub mod aggr_function;
pub use aggr_function::*;

pub mod case_when;
pub use case_when::*;

pub mod cast;
pub use cast::*;

/// The function node owned by a function-call atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionCall {
    Function(Function),
    Aggregate(AggrFunction),
    CaseWhen(CaseWhenElseFunction),
    Cast(CastFunction),
}

impl FunctionCall {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            FunctionCall::Function(node) => visitor.visit_function(node),
            FunctionCall::Aggregate(node) => visitor.visit_aggregate_function(node),
            FunctionCall::CaseWhen(node) => visitor.visit_case_when_function(node),
            FunctionCall::Cast(node) => visitor.visit_cast_function(node),
        }
    }
}

impl Restore for FunctionCall {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        match self {
            FunctionCall::Function(node) => node.restore(flag, sb, args),
            FunctionCall::Aggregate(node) => node.restore(flag, sb, args),
            FunctionCall::CaseWhen(node) => node.restore(flag, sb, args),
            FunctionCall::Cast(node) => node.restore(flag, sb, args),
        }
    }
}

impl From<Function> for FunctionCall {
    fn from(node: Function) -> Self {
        FunctionCall::Function(node)
    }
}

impl From<AggrFunction> for FunctionCall {
    fn from(node: AggrFunction) -> Self {
        FunctionCall::Aggregate(node)
    }
}

impl From<CaseWhenElseFunction> for FunctionCall {
    fn from(node: CaseWhenElseFunction) -> Self {
        FunctionCall::CaseWhen(node)
    }
}

impl From<CastFunction> for FunctionCall {
    fn from(node: CastFunction) -> Self {
        FunctionCall::Cast(node)
    }
}

/// Function names are written verbatim, so only word characters and the
/// schema separator are let through.
pub(crate) fn check_function_name(name: &str) -> Result<(), RestoreError> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && !name.ends_with('.')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.');

    if valid { Ok(()) } else { RestoreError::InvalidFunctionName(name.to_string()).err() }
}
