//! Variable interpretations.
//!
//! An [`Interpretation`] assigns truth values to variables. It is the only
//! input besides the formula itself that evaluation needs.
//!
//! ```
//! use boolexpr_rs::interpretation::Interpretation;
//! use boolexpr_rs::types::Var;
//!
//! // x1 = true, x2 = false
//! let interp = Interpretation::from_lits([1, -2]);
//! assert_eq!(interp.get(Var::new(1)), Some(true));
//! assert_eq!(interp.get(Var::new(2)), Some(false));
//! assert_eq!(interp.get(Var::new(3)), None);
//! ```

use std::collections::hash_map;
use std::collections::HashMap;

use crate::types::Var;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation {
    values: HashMap<Var, bool>,
}

impl Interpretation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an interpretation from DIMACS-style signed literals.
    ///
    /// A positive literal `v` binds `x{v}` to `true`, a negative literal
    /// `-v` binds it to `false`. Later literals override earlier ones.
    ///
    /// # Panics
    ///
    /// Panics if a literal is zero.
    pub fn from_lits(lits: impl IntoIterator<Item = i32>) -> Self {
        lits.into_iter()
            .map(|lit| {
                assert_ne!(lit, 0, "Literal should not be zero");
                (Var::new(lit.unsigned_abs()), lit > 0)
            })
            .collect()
    }

    /// Binds `var` to `value`, returning the previous binding.
    pub fn insert(&mut self, var: Var, value: bool) -> Option<bool> {
        self.values.insert(var, value)
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.values.get(&var).copied()
    }

    pub fn contains(&self, var: Var) -> bool {
        self.values.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.values.iter().map(|(&var, &value)| (var, value))
    }

    /// Bindings as signed literals, sorted by variable.
    pub fn to_lits(&self) -> Vec<i64> {
        let mut lits: Vec<(Var, bool)> = self.iter().collect();
        lits.sort_unstable();
        lits.into_iter()
            .map(|(var, value)| {
                let id = var.id() as i64;
                if value {
                    id
                } else {
                    -id
                }
            })
            .collect()
    }
}

impl FromIterator<(Var, bool)> for Interpretation {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Var, bool)> for Interpretation {
    fn extend<I: IntoIterator<Item = (Var, bool)>>(&mut self, iter: I) {
        self.values.extend(iter)
    }
}

impl<const N: usize> From<[(Var, bool); N]> for Interpretation {
    fn from(bindings: [(Var, bool); N]) -> Self {
        bindings.into_iter().collect()
    }
}

impl From<HashMap<Var, bool>> for Interpretation {
    fn from(values: HashMap<Var, bool>) -> Self {
        Self { values }
    }
}

impl IntoIterator for Interpretation {
    type Item = (Var, bool);
    type IntoIter = hash_map::IntoIter<Var, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
