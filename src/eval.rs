//! Formula evaluation.
//!
//! [`evaluate`] computes the truth value of a formula under an
//! [`Interpretation`]. Evaluation is pure: neither the formula nor the
//! interpretation is modified, and the same inputs always give the same
//! result.
//!
//! Both operands of a binary connective are always evaluated before they are
//! combined, so an unbound variable is reported even when the other operand
//! alone would decide the result.
//!
//! ```
//! use boolexpr_rs::ast::Expr;
//! use boolexpr_rs::eval::{evaluate, Eval};
//! use boolexpr_rs::interpretation::Interpretation;
//! use boolexpr_rs::types::Var;
//!
//! let f = Expr::and(Expr::var(Var::new(1)), Expr::not(Expr::var(Var::new(2))));
//! let interp = Interpretation::from_lits([1, -2]);
//! assert_eq!(evaluate(&f, &interp), Ok(true));
//! assert_eq!(f.eval(&Interpretation::from_lits([1, 2])), Ok(false));
//! ```

use log::{debug, trace};

use crate::ast::Expr;
use crate::error::{Error, Result};
use crate::interpretation::Interpretation;
use crate::types::{Operator, Var};

/// Anything that has a truth value under an interpretation.
pub trait Eval {
    fn eval(&self, interp: &Interpretation) -> Result<bool>;
}

/// Evaluates `expr` under `interp`.
///
/// Recursion depth equals the depth of `expr`. For very deep formulas use
/// [`ExprArena`][crate::arena::ExprArena], which evaluates without recursion.
///
/// # Errors
///
/// Returns [`Error::UnboundVariable`] if `expr` references a variable that
/// `interp` does not bind.
pub fn evaluate(expr: &Expr, interp: &Interpretation) -> Result<bool> {
    debug!("evaluate(size = {}, bindings = {})", expr.size(), interp.len());
    let result = eval_node(expr, interp);
    trace!("evaluate -> {:?}", result);
    result
}

fn eval_node(expr: &Expr, interp: &Interpretation) -> Result<bool> {
    match expr {
        Expr::Const(value) => Ok(*value),
        Expr::Var(var) => lookup(*var, interp),
        Expr::Not(a) => Ok(Operator::Not.apply(eval_node(a, interp)?, false)),
        Expr::And(a, b) => binary(Operator::And, a, b, interp),
        Expr::Or(a, b) => binary(Operator::Or, a, b, interp),
        Expr::Implication(a, b) => binary(Operator::Implication, a, b, interp),
        Expr::MaterialImplication(a, b) => binary(Operator::MaterialImplication, a, b, interp),
    }
}

fn binary(op: Operator, a: &Expr, b: &Expr, interp: &Interpretation) -> Result<bool> {
    let left = eval_node(a, interp)?;
    let right = eval_node(b, interp)?;
    Ok(op.apply(left, right))
}

pub(crate) fn lookup(var: Var, interp: &Interpretation) -> Result<bool> {
    interp.get(var).ok_or(Error::UnboundVariable(var))
}

impl Eval for Expr {
    fn eval(&self, interp: &Interpretation) -> Result<bool> {
        evaluate(self, interp)
    }
}

impl Eval for Var {
    fn eval(&self, interp: &Interpretation) -> Result<bool> {
        lookup(*self, interp)
    }
}

impl Eval for bool {
    fn eval(&self, _interp: &Interpretation) -> Result<bool> {
        Ok(*self)
    }
}

impl<T: Eval + ?Sized> Eval for &T {
    fn eval(&self, interp: &Interpretation) -> Result<bool> {
        (**self).eval(interp)
    }
}
