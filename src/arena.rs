//! Flat formula storage.
//!
//! [`ExprArena`] keeps a formula as a flat list of [`Node`]s where every
//! child is stored before its parent and the last node is the root. This
//! layout can be evaluated with a single forward pass, so arbitrarily deep
//! formulas never exhaust the call stack.
//!
//! Nodes are pushed without arity checks, the same way a loose
//! `(op, left, right?)` constructor would accept them. Layout problems are
//! reported as [`Error::MalformedTree`] when the arena is evaluated or
//! converted back into an [`Expr`].
//!
//! ```
//! use boolexpr_rs::arena::ExprArena;
//! use boolexpr_rs::eval::Eval;
//! use boolexpr_rs::interpretation::Interpretation;
//! use boolexpr_rs::types::{Operator, Var};
//!
//! let mut arena = ExprArena::new();
//! let x1 = arena.push_var(Var::new(1));
//! let x2 = arena.push_var(Var::new(2));
//! let not_x2 = arena.push_op(Operator::Not, x2, None);
//! arena.push_op(Operator::And, x1, Some(not_x2));
//!
//! assert_eq!(arena.eval(&Interpretation::from_lits([1, -2])), Ok(true));
//! ```

use log::trace;

use crate::ast::Expr;
use crate::error::{Error, MalformedReason, Result};
use crate::eval::{lookup, Eval};
use crate::interpretation::Interpretation;
use crate::types::{Operator, Var};

/// Position of a node inside an [`ExprArena`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Idx(usize);

impl Idx {
    pub const fn new(index: usize) -> Self {
        Idx(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// One formula node, with children referenced through `I`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Node<I = Idx> {
    Const(bool),
    Var(Var),
    Op { op: Operator, left: I, right: Option<I> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExprArena {
    /// Children before parents; the last node is the root.
    nodes: Vec<Node>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, idx: Idx) -> Option<&Node> {
        self.nodes.get(idx.0)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The root is the most recently pushed node.
    pub fn root(&self) -> Option<Idx> {
        self.nodes.len().checked_sub(1).map(Idx)
    }

    pub fn push(&mut self, node: Node) -> Idx {
        self.nodes.push(node);
        Idx(self.nodes.len() - 1)
    }

    pub fn push_const(&mut self, value: bool) -> Idx {
        self.push(Node::Const(value))
    }

    pub fn push_var(&mut self, var: Var) -> Idx {
        self.push(Node::Var(var))
    }

    /// Pushes an operator node. Arity is not checked here.
    pub fn push_op(&mut self, op: Operator, left: Idx, right: Option<Idx>) -> Idx {
        self.push(Node::Op { op, left, right })
    }

    /// Flattens a formula tree without recursion.
    pub fn from_expr(expr: &Expr) -> Self {
        let mut arena = ExprArena::with_capacity(expr.size());
        // (node, operands already pushed)
        let mut stack: Vec<(&Expr, bool)> = vec![(expr, false)];
        let mut done: Vec<Idx> = Vec::new();

        while let Some((node, expanded)) = stack.pop() {
            let idx = match node {
                Expr::Const(value) => arena.push_const(*value),
                Expr::Var(var) => arena.push_var(*var),
                _ if !expanded => {
                    stack.push((node, true));
                    stack.extend(node.right().map(|b| (b, false)));
                    stack.extend(node.left().map(|a| (a, false)));
                    continue;
                }
                _ => {
                    let right = node.right().map(|_| done.pop().expect("right operand is pushed"));
                    let left = done.pop().expect("left operand is pushed");
                    let op = node.operator_kind().expect("only operator nodes are expanded");
                    arena.push_op(op, left, right)
                }
            };
            done.push(idx);
        }

        arena
    }

    /// Rebuilds the formula tree.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MalformedTree`] or [`Error::EmptyArena`] if the
    /// arena does not describe a well-formed tree.
    pub fn to_expr(&self) -> Result<Expr> {
        self.collapse(|node| match node {
            Node::Const(value) => Ok(Expr::constant(value)),
            Node::Var(var) => Ok(Expr::var(var)),
            Node::Op { op, left, right } => Expr::operator(op, left, right),
        })
    }

    /// Evaluates the formula with a single forward pass over the nodes.
    pub fn evaluate(&self, interp: &Interpretation) -> Result<bool> {
        trace!("arena evaluate(nodes = {}, bindings = {})", self.nodes.len(), interp.len());
        self.collapse(|node| match node {
            Node::Const(value) => Ok(value),
            Node::Var(var) => lookup(var, interp),
            Node::Op { op, left, right } => Ok(op.apply(left, right.unwrap_or(false))),
        })
    }

    fn check_layout(&self, parent: usize, op: Operator, left: Idx, right: Option<Idx>) -> Result<()> {
        let malformed = |reason| Error::MalformedTree { op, reason };
        match (op.arity(), right) {
            (1, Some(_)) => return Err(malformed(MalformedReason::UnexpectedRight)),
            (2, None) => return Err(malformed(MalformedReason::MissingRight)),
            _ => {}
        }
        for child in std::iter::once(left).chain(right) {
            if child.0 >= parent {
                return Err(malformed(MalformedReason::DanglingChild {
                    parent,
                    child: child.0,
                }));
            }
        }
        Ok(())
    }

    /// Bottom-up fold over the nodes reachable from the root.
    ///
    /// The first pass walks parents before children, checking every operator
    /// layout and marking reachable nodes. The second pass folds the marked
    /// nodes children-first, handing each result to its only parent.
    fn collapse<R, F>(&self, mut collapse: F) -> Result<R>
    where
        F: FnMut(Node<R>) -> Result<R>,
    {
        let root = self.root().ok_or(Error::EmptyArena)?.0;

        let mut reachable = vec![false; self.nodes.len()];
        reachable[root] = true;
        for i in (0..=root).rev() {
            if !reachable[i] {
                continue;
            }
            if let Node::Op { op, left, right } = self.nodes[i] {
                self.check_layout(i, op, left, right)?;
                for child in std::iter::once(left).chain(right) {
                    if reachable[child.0] {
                        return Err(Error::MalformedTree {
                            op,
                            reason: MalformedReason::SharedChild {
                                parent: i,
                                child: child.0,
                            },
                        });
                    }
                    reachable[child.0] = true;
                }
            }
        }

        let mut results: Vec<Option<R>> = std::iter::repeat_with(|| None).take(self.nodes.len()).collect();
        for (i, node) in self.nodes.iter().enumerate() {
            if !reachable[i] {
                continue;
            }
            let node = match *node {
                Node::Const(value) => Node::Const(value),
                Node::Var(var) => Node::Var(var),
                Node::Op { op, left, right } => {
                    let mut take = |idx: Idx| {
                        results[idx.0].take().ok_or(Error::MalformedTree {
                            op,
                            reason: MalformedReason::SharedChild { parent: i, child: idx.0 },
                        })
                    };
                    let left = take(left)?;
                    let right = right.map(&mut take).transpose()?;
                    Node::Op { op, left, right }
                }
            };
            results[i] = Some(collapse(node)?);
        }

        results[root].take().ok_or(Error::EmptyArena)
    }
}

impl From<&Expr> for ExprArena {
    fn from(expr: &Expr) -> Self {
        ExprArena::from_expr(expr)
    }
}

impl TryFrom<&ExprArena> for Expr {
    type Error = Error;

    fn try_from(arena: &ExprArena) -> Result<Self> {
        arena.to_expr()
    }
}

impl Eval for ExprArena {
    fn eval(&self, interp: &Interpretation) -> Result<bool> {
        self.evaluate(interp)
    }
}
