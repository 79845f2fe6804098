//! Exhaustive truth tables.
//!
//! A [`TruthTable`] evaluates a formula once for every assignment of its
//! variables. Rows are ordered like a binary counter where the first (lowest)
//! variable is the most significant bit, so for `x1, x2` the rows are
//! `FF, FT, TF, TT`.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::ast::Expr;
use crate::error::Result;
use crate::eval::evaluate;
use crate::interpretation::Interpretation;
use crate::types::Var;

/// Largest number of variables a table may enumerate.
pub const MAX_VARS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Values of [`TruthTable::vars`], in the same order.
    pub values: Vec<bool>,
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    vars: Vec<Var>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Enumerates all assignments of the variables of `expr`.
    ///
    /// # Panics
    ///
    /// Panics if `expr` has more than [`MAX_VARS`] variables.
    pub fn new(expr: &Expr) -> Self {
        let vars: Vec<Var> = expr.vars().into_iter().collect();
        match Self::with_vars(expr, vars) {
            Ok(table) => table,
            // Every variable of `expr` is enumerated, so no lookup can fail.
            Err(e) => unreachable!("{}", e),
        }
    }

    /// Enumerates all assignments of `vars`.
    ///
    /// Variables not referenced by `expr` are allowed. Duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnboundVariable`][crate::error::Error::UnboundVariable]
    /// if `expr` uses a variable missing from `vars`.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_VARS`] distinct variables are given.
    pub fn with_vars(expr: &Expr, vars: impl IntoIterator<Item = Var>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        let vars: Vec<Var> = vars.into_iter().filter(|v| seen.insert(*v)).collect();
        assert!(
            vars.len() <= MAX_VARS,
            "Truth table over {} variables exceeds the limit of {}",
            vars.len(),
            MAX_VARS
        );
        debug!("truth_table(expr = {}, vars = {:?})", expr, vars);

        let n = vars.len();
        let mut rows = Vec::with_capacity(1 << n);
        for bits in 0u32..(1 << n) {
            let values: Vec<bool> = (0..n).map(|i| bits & (1 << (n - 1 - i)) != 0).collect();
            let interp: Interpretation = vars.iter().copied().zip(values.iter().copied()).collect();
            let result = evaluate(expr, &interp)?;
            rows.push(Row { values, result });
        }

        Ok(Self { vars, rows })
    }

    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Results column, in row order.
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.result).collect()
    }

    /// Interpretation corresponding to a row.
    pub fn interpretation(&self, row: &Row) -> Interpretation {
        self.vars.iter().copied().zip(row.values.iter().copied()).collect()
    }

    pub fn count_true(&self) -> usize {
        self.rows.iter().filter(|row| row.result).count()
    }

    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|row| !row.result)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.vars.iter().map(|v| v.to_string()).collect();
        writeln!(f, "{} | f", names.join(" "))?;
        for row in &self.rows {
            let cells: Vec<String> = row
                .values
                .iter()
                .zip(&names)
                .map(|(&value, name)| format!("{:<width$}", if value { "T" } else { "F" }, width = name.len()))
                .collect();
            writeln!(f, "{} | {}", cells.join(" "), if row.result { "T" } else { "F" })?;
        }
        Ok(())
    }
}
