//! Type-safe wrappers for formula variables and operators.
//!
//! This module provides the identifier type for propositional variables and
//! the closed set of connectives that formula trees are built from.

use std::fmt;

/// A propositional variable identifier.
///
/// Variables are opaque: two variables are equal iff their ids are equal.
/// The value of a variable is never stored in the tree itself, it is looked
/// up in an [`Interpretation`][crate::interpretation::Interpretation] at
/// evaluation time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given ID.
    pub const fn new(id: u32) -> Self {
        Var(id)
    }

    /// Returns the raw variable ID as a `u32`.
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<u32> for Var {
    fn from(id: u32) -> Self {
        Var(id)
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// Logical connective applied by an operator node.
///
/// Note the naming: [`Operator::Implication`] is the classical `a → b`
/// (`¬a ∨ b`), while [`Operator::MaterialImplication`] is the biconditional
/// `a ↔ b` (`a == b`). The semantics are fixed by [`Operator::apply`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Operator {
    And,
    Or,
    Not,
    Implication,
    MaterialImplication,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Implication,
        Operator::MaterialImplication,
    ];

    /// Number of children an operator node of this kind owns.
    pub const fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or | Operator::Implication | Operator::MaterialImplication => 2,
        }
    }

    pub const fn is_unary(self) -> bool {
        self.arity() == 1
    }

    pub const fn is_binary(self) -> bool {
        self.arity() == 2
    }

    /// Combines already evaluated operands.
    ///
    /// For the unary [`Operator::Not`] the right operand is ignored.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Operator::And => left & right,
            Operator::Or => left | right,
            Operator::Not => !left,
            Operator::Implication => !left | right,
            Operator::MaterialImplication => left == right,
        }
    }

    /// Symbol used when rendering formulas.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::And => "∧",
            Operator::Or => "∨",
            Operator::Not => "¬",
            Operator::Implication => "→",
            Operator::MaterialImplication => "↔",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Variant tag of a formula node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Constant,
    Variable,
    Operator,
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_var_creation() {
        let v1 = Var::new(1);
        let v2 = Var::new(2);
        assert_eq!(v1.id(), 1);
        assert_eq!(v2.id(), 2);
        assert!(v1 < v2);
        assert_eq!(v1, Var::from(1));
        assert_eq!(u32::from(v2), 2);
    }

    #[test]
    fn test_var_display() {
        assert_eq!(Var::new(7).to_string(), "x7");
    }

    #[test]
    fn test_arity() {
        assert_eq!(Operator::Not.arity(), 1);
        assert!(Operator::Not.is_unary());
        for op in [
            Operator::And,
            Operator::Or,
            Operator::Implication,
            Operator::MaterialImplication,
        ] {
            assert_eq!(op.arity(), 2, "{:?}", op);
            assert!(op.is_binary());
        }
    }

    #[test]
    fn test_apply_truth_tables() {
        // (op, [f(F,F), f(F,T), f(T,F), f(T,T)])
        let cases = [
            (Operator::And, [false, false, false, true]),
            (Operator::Or, [false, true, true, true]),
            (Operator::Implication, [true, true, false, true]),
            (Operator::MaterialImplication, [true, false, false, true]),
        ];
        for (op, expected) in cases {
            let mut i = 0;
            for a in [false, true] {
                for b in [false, true] {
                    assert_eq!(op.apply(a, b), expected[i], "{:?}({}, {})", op, a, b);
                    i += 1;
                }
            }
        }
        assert!(Operator::Not.apply(false, false));
        assert!(!Operator::Not.apply(true, false));
    }
}
