//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::NodeId;

/// Domain errors represent misuse of the outline's link primitives.
/// Expected edge cases (indenting a first child, unindenting a top-level node)
/// are reported as `false` by the editing operations instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("root node cannot be attached as a child")]
    RootNotAttachable,

    #[error("cycle detected: {child} is an ancestor of {parent}")]
    CycleDetected { parent: NodeId, child: NodeId },
}

/// Result type for outline operations.
pub type DomainResult<T> = Result<T, DomainError>;
