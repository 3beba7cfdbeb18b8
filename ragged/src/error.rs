use thiserror::Error;

/// Structural problems with a nested container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NestedError {
    #[error("input nested {depth} levels deep, limit is {limit}")]
    TooDeep { depth: usize, limit: usize },
}

/// Failure while evaluating a node. Kernel errors are carried as returned by the kernel.
#[derive(Debug, PartialEq, Error)]
pub enum EvalError<E> {
    #[error(transparent)]
    Nested(#[from] NestedError),
    #[error("shape construction failed: {0}")]
    Kernel(E),
}
