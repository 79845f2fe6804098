//! Formula trees.
//!
//! [`Expr`] is an owned, immutable propositional formula. Every operator node
//! owns its children, so a formula is always a finite tree. Operator arity is
//! part of the type: `Not` carries one child and every binary connective
//! carries exactly two.
//!
//! ```
//! use boolexpr_rs::ast::Expr;
//! use boolexpr_rs::types::Var;
//!
//! let x1 = Expr::var(Var::new(1));
//! let x2 = Expr::var(Var::new(2));
//! let f = Expr::implication(x1, Expr::not(x2));
//! assert_eq!(f.to_string(), "(x1 → ¬x2)");
//! assert_eq!(f.depth(), 2);
//! assert_eq!(f.size(), 4);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::error::{Error, MalformedReason, Result};
use crate::types::{NodeKind, Operator, Var};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Const(bool),
    Var(Var),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    /// `a → b`, true unless `a` holds and `b` does not.
    Implication(Box<Expr>, Box<Expr>),
    /// `a ↔ b`, true iff both sides agree.
    MaterialImplication(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    pub fn var(var: Var) -> Self {
        Expr::Var(var)
    }

    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implication(lhs: Self, rhs: Self) -> Self {
        Expr::Implication(Box::new(lhs), Box::new(rhs))
    }

    pub fn material_implication(lhs: Self, rhs: Self) -> Self {
        Expr::MaterialImplication(Box::new(lhs), Box::new(rhs))
    }

    /// Builds an operator node from a loose `(op, left, right?)` layout.
    ///
    /// Fails with [`Error::MalformedTree`] when the presence of `right` does
    /// not match the arity of `op`.
    pub fn operator(op: Operator, left: Self, right: Option<Self>) -> Result<Self> {
        match (op, right) {
            (Operator::Not, None) => Ok(Expr::not(left)),
            (Operator::Not, Some(_)) => Err(Error::MalformedTree {
                op,
                reason: MalformedReason::UnexpectedRight,
            }),
            (_, None) => Err(Error::MalformedTree {
                op,
                reason: MalformedReason::MissingRight,
            }),
            (Operator::And, Some(right)) => Ok(Expr::and(left, right)),
            (Operator::Or, Some(right)) => Ok(Expr::or(left, right)),
            (Operator::Implication, Some(right)) => Ok(Expr::implication(left, right)),
            (Operator::MaterialImplication, Some(right)) => Ok(Expr::material_implication(left, right)),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Const(_) => NodeKind::Constant,
            Expr::Var(_) => NodeKind::Variable,
            _ => NodeKind::Operator,
        }
    }

    /// Value of a constant node.
    pub fn constant_value(&self) -> Option<bool> {
        match self {
            Expr::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Variable referenced by a variable node.
    pub fn variable(&self) -> Option<Var> {
        match self {
            Expr::Var(var) => Some(*var),
            _ => None,
        }
    }

    /// Connective of an operator node.
    pub fn operator_kind(&self) -> Option<Operator> {
        match self {
            Expr::Const(_) | Expr::Var(_) => None,
            Expr::Not(_) => Some(Operator::Not),
            Expr::And(_, _) => Some(Operator::And),
            Expr::Or(_, _) => Some(Operator::Or),
            Expr::Implication(_, _) => Some(Operator::Implication),
            Expr::MaterialImplication(_, _) => Some(Operator::MaterialImplication),
        }
    }

    pub fn left(&self) -> Option<&Expr> {
        match self {
            Expr::Const(_) | Expr::Var(_) => None,
            Expr::Not(a) => Some(a),
            Expr::And(a, _) | Expr::Or(a, _) | Expr::Implication(a, _) | Expr::MaterialImplication(a, _) => Some(a),
        }
    }

    pub fn right(&self) -> Option<&Expr> {
        match self {
            Expr::Const(_) | Expr::Var(_) | Expr::Not(_) => None,
            Expr::And(_, b) | Expr::Or(_, b) | Expr::Implication(_, b) | Expr::MaterialImplication(_, b) => Some(b),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Const(_) | Expr::Var(_))
    }

    /// Depth of the formula tree (0 for leaves).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        // (node, its depth)
        let mut stack = vec![(self, 0)];
        while let Some((node, level)) = stack.pop() {
            depth = depth.max(level);
            stack.extend(node.left().map(|a| (a, level + 1)));
            stack.extend(node.right().map(|b| (b, level + 1)));
        }
        depth
    }

    /// Size of the formula tree (number of nodes).
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            size += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        size
    }

    /// Variables referenced anywhere in the formula, in ascending order.
    pub fn vars(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Expr::Var(var) = node {
                vars.insert(*var);
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }
        vars
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Const(value)
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Var(var)
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(value) => write!(f, "{}", value),
            Expr::Var(var) => write!(f, "{}", var),
            Expr::Not(a) => write!(f, "¬{}", a),
            Expr::And(a, b) => write_binary(f, Operator::And, a, b),
            Expr::Or(a, b) => write_binary(f, Operator::Or, a, b),
            Expr::Implication(a, b) => write_binary(f, Operator::Implication, a, b),
            Expr::MaterialImplication(a, b) => write_binary(f, Operator::MaterialImplication, a, b),
        }
    }
}

fn write_binary(f: &mut fmt::Formatter<'_>, op: Operator, a: &Expr, b: &Expr) -> fmt::Result {
    write!(f, "({} {} {})", a, op.symbol(), b)
}
