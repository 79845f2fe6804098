use thiserror::Error;

use crate::types::{Operator, Var};

/// Errors that can occur while building or evaluating a formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The interpretation has no binding for a variable used in the formula.
    #[error("variable {0} is not bound in the interpretation")]
    UnboundVariable(Var),

    /// An operator node does not have the children its arity requires.
    #[error("malformed tree: {op:?} node {reason}")]
    MalformedTree { op: Operator, reason: MalformedReason },

    /// A flat arena has no root node to evaluate.
    #[error("malformed tree: arena is empty")]
    EmptyArena,
}

/// Why an operator node was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// A binary operator without a right child.
    MissingRight,
    /// A unary operator with a right child.
    UnexpectedRight,
    /// A child index that does not refer to an earlier arena node.
    DanglingChild { parent: usize, child: usize },
    /// A child index already owned by another operator node.
    SharedChild { parent: usize, child: usize },
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::MissingRight => write!(f, "is missing its right child"),
            MalformedReason::UnexpectedRight => write!(f, "has an unexpected right child"),
            MalformedReason::DanglingChild { parent, child } => {
                write!(f, "at #{} refers to #{} which is not an earlier node", parent, child)
            }
            MalformedReason::SharedChild { parent, child } => {
                write!(f, "at #{} shares child #{} with another node", parent, child)
            }
        }
    }
}

impl Error {
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedTree { .. } | Error::EmptyArena)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
