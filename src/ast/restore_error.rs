use std::fmt::{self, Display};

/// Recoverable failure raised while rendering a node back to SQL text.
///
/// Parent nodes wrap child failures in [`RestoreError::Context`], recording
/// which slot failed and how many bytes had been written when it did. The
/// output buffer is not rolled back, so a caller that sees an error must
/// discard whatever was written.
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreError {
    InvalidFunctionName(String),
    MissingCaseBranch,
    EmptyInList,
    InvalidCastType(String),
    Format(fmt::Error),
    Context { node: &'static str, offset: usize, source: Box<RestoreError> },
}

impl RestoreError {
    pub fn within(self, node: &'static str, offset: usize) -> Self {
        RestoreError::Context { node, offset, source: Box::new(self) }
    }

    pub fn err<T>(self) -> Result<T, RestoreError> {
        Err(self)
    }

    /// The innermost cause, with every context layer peeled off.
    pub fn root(&self) -> &RestoreError {
        match self {
            RestoreError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Slot names from the outermost node down to the failing one.
    pub fn path(&self) -> Vec<&'static str> {
        let mut path = vec![];
        let mut current = self;
        while let RestoreError::Context { node, source, .. } = current {
            path.push(*node);
            current = source;
        }
        path
    }
}

impl Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreError::InvalidFunctionName(name) => write!(f, "RestoreError: invalid function name '{}'", name),
            RestoreError::MissingCaseBranch => write!(f, "RestoreError: CASE expression without WHEN branch"),
            RestoreError::EmptyInList => write!(f, "RestoreError: IN predicate with empty list"),
            RestoreError::InvalidCastType(target) => write!(f, "RestoreError: invalid cast target type '{}'", target),
            RestoreError::Format(err) => write!(f, "RestoreError: {}", err),
            RestoreError::Context { node, offset, source } => write!(f, "{}\n  in {} at offset {}", source, node, offset),
        }
    }
}

impl std::error::Error for RestoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RestoreError::Context { source, .. } => Some(source.as_ref()),
            RestoreError::Format(err) => Some(err),
            _ => None,
        }
    }
}

impl From<fmt::Error> for RestoreError {
    fn from(err: fmt::Error) -> Self {
        RestoreError::Format(err)
    }
}
