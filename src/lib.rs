//! # boolexpr-rs: propositional formulas in Rust
//!
//! **`boolexpr-rs`** represents propositional (boolean) formulas as trees and
//! evaluates them under an interpretation, an assignment of truth values to
//! variables.
//!
//! ## Key Features
//!
//! - **Sum-Typed Trees**: [`Expr`][crate::ast::Expr] is a plain enum. Operator arity is part of the type, so an
//!   `And` without a right operand cannot be built.
//! - **Pure Evaluation**: [`evaluate`][crate::eval::evaluate] never mutates the formula or the interpretation and
//!   reports unbound variables instead of guessing a default.
//! - **No Stack Limits**: [`ExprArena`][crate::arena::ExprArena] stores a formula flat and evaluates it in one
//!   forward pass, for formulas too deep to walk recursively.
//! - **Truth Tables and DOT**: enumerate every assignment with [`TruthTable`][crate::truth_table::TruthTable], or
//!   draw the tree with Graphviz via [`Expr::to_dot`][crate::ast::Expr::to_dot].
//!
//! ## Connectives
//!
//! | Operator | Arity | Value |
//! |---|---|---|
//! | `And` | 2 | `a ∧ b` |
//! | `Or` | 2 | `a ∨ b` |
//! | `Not` | 1 | `¬a` |
//! | `Implication` | 2 | `¬a ∨ b` |
//! | `MaterialImplication` | 2 | `a ↔ b` |
//!
//! ## Basic Usage
//!
//! ```rust
//! use boolexpr_rs::ast::Expr;
//! use boolexpr_rs::eval::evaluate;
//! use boolexpr_rs::interpretation::Interpretation;
//! use boolexpr_rs::types::Var;
//!
//! let x = |id| Expr::var(Var::new(id));
//!
//! // f = ((x1 ↔ ¬x2) → x3) ∧ x4
//! let f = Expr::and(
//!     Expr::implication(Expr::material_implication(x(1), Expr::not(x(2))), x(3)),
//!     x(4),
//! );
//!
//! // x1 = false, x2 = false, x3 = false, x4 = true
//! let interp = Interpretation::from_lits([-1, -2, -3, 4]);
//! assert_eq!(evaluate(&f, &interp), Ok(true));
//!
//! // Missing bindings are errors, not `false`.
//! assert!(evaluate(&f, &Interpretation::from_lits([1, 2])).is_err());
//! ```

pub mod arena;
pub mod ast;
pub mod dot;
pub mod error;
pub mod eval;
pub mod interpretation;
pub mod truth_table;
pub mod types;

mod proptests;
