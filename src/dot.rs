//! Formula tree to DOT (Graphviz) conversion.
//!
//! The generated graph follows these conventions:
//! - **Leaves** (constants and variables) are boxes on the bottom rank
//! - **Operator nodes** are circles labelled with their connective
//! - **Edges** go from a parent to its children; the left operand edge is
//!   solid and the right operand edge is dashed, and the edges of binary
//!   connectives carry `left`/`right` tail labels
//!
//! # Examples
//!
//! ```
//! use boolexpr_rs::ast::Expr;
//! use boolexpr_rs::types::Var;
//!
//! let f = Expr::and(Expr::var(Var::new(1)), Expr::not(Expr::var(Var::new(2))));
//! let dot = f.to_dot().unwrap();
//! assert!(dot.starts_with("graph {"));
//! // Render with: dot -Tpng formula.dot -o formula.png
//! ```

use std::fmt::Write as _;

use crate::ast::Expr;
use crate::types::Operator;

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for standard settings.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for operator nodes (default: "circle")
    pub operator_shape: &'static str,
    /// Shape for constant and variable nodes (default: "box")
    pub leaf_shape: &'static str,
    /// Style for edges to the left operand (default: "solid")
    pub left_edge_style: &'static str,
    /// Style for edges to the right operand (default: "dashed")
    pub right_edge_style: &'static str,
    /// Whether to use HTML labels for variable subscripts (default: true)
    pub use_html_labels: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            operator_shape: "circle",
            leaf_shape: "box",
            left_edge_style: "solid",
            right_edge_style: "dashed",
            use_html_labels: true,
        }
    }
}

impl Expr {
    /// Converts the formula tree to DOT format.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the formula tree to DOT format with custom configuration.
    ///
    /// Nodes are numbered in pre-order starting from the root (`n0`).
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "graph {{")?;
        writeln!(dot, "node [shape={}];", config.operator_shape)?;

        let mut leaves = Vec::new();
        let mut edges = Vec::new();
        let mut next_id = 1;
        // (node, id)
        let mut stack = vec![(self, 0usize)];
        while let Some((node, id)) = stack.pop() {
            let (op, left, right) = match node {
                Expr::Const(value) => {
                    leaves.push(id);
                    writeln!(dot, "n{} [shape={}, label=\"{}\"];", id, config.leaf_shape, value)?;
                    continue;
                }
                Expr::Var(var) => {
                    leaves.push(id);
                    let label = if config.use_html_labels {
                        format!("<x<SUB>{}</SUB>>", var.id())
                    } else {
                        format!("\"{}\"", var)
                    };
                    writeln!(dot, "n{} [shape={}, label={}];", id, config.leaf_shape, label)?;
                    continue;
                }
                Expr::Not(a) => (Operator::Not, a, None),
                Expr::And(a, b) => (Operator::And, a, Some(b)),
                Expr::Or(a, b) => (Operator::Or, a, Some(b)),
                Expr::Implication(a, b) => (Operator::Implication, a, Some(b)),
                Expr::MaterialImplication(a, b) => (Operator::MaterialImplication, a, Some(b)),
            };
            writeln!(dot, "n{} [label=\"{}\"];", id, op.symbol())?;

            let left_id = next_id;
            next_id += 1;
            match right {
                Some(right) => {
                    let right_id = next_id;
                    next_id += 1;
                    edges.push((id, left_id, config.left_edge_style, Some("left")));
                    edges.push((id, right_id, config.right_edge_style, Some("right")));
                    stack.push((&**right, right_id));
                }
                None => edges.push((id, left_id, config.left_edge_style, None)),
            }
            // Visit the left operand first.
            stack.push((&**left, left_id));
        }

        writeln!(dot, "{{ rank=sink")?;
        for id in leaves {
            writeln!(dot, "n{};", id)?;
        }
        writeln!(dot, "}}")?;

        for (parent, child, style, tail) in edges {
            match tail {
                Some(tail) => writeln!(
                    dot,
                    "n{} -- n{} [style={}, taillabel=\"{}\"];",
                    parent, child, style, tail
                )?,
                None => writeln!(dot, "n{} -- n{} [style={}];", parent, child, style)?,
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
