use boolexpr_rs::arena::ExprArena;
use boolexpr_rs::ast::Expr;
use boolexpr_rs::error::Error;
use boolexpr_rs::eval::{evaluate, Eval};
use boolexpr_rs::interpretation::Interpretation;
use boolexpr_rs::truth_table::TruthTable;
use boolexpr_rs::types::{Operator, Var};

use test_log::test;

fn x(id: u32) -> Expr {
    Expr::var(Var::new(id))
}

/// `(((x1 ↔ ¬x2) → x3) ∧ x4) ∨ false`
fn example_formula() -> Expr {
    Expr::or(
        Expr::and(
            Expr::implication(Expr::material_implication(x(1), Expr::not(x(2))), x(3)),
            x(4),
        ),
        Expr::constant(false),
    )
}

/// Every assignment of `x1..x4`, as signed literals, with the expected value.
const FIXTURE: [([i32; 4], bool); 16] = [
    ([-1, -2, -3, -4], false),
    ([-1, -2, -3, 4], true),
    ([-1, -2, 3, -4], false),
    ([-1, -2, 3, 4], true),
    ([-1, 2, -3, -4], false),
    ([-1, 2, -3, 4], false),
    ([-1, 2, 3, -4], false),
    ([-1, 2, 3, 4], true),
    ([1, -2, -3, -4], false),
    ([1, -2, -3, 4], false),
    ([1, -2, 3, -4], false),
    ([1, -2, 3, 4], true),
    ([1, 2, -3, -4], false),
    ([1, 2, -3, 4], true),
    ([1, 2, 3, -4], false),
    ([1, 2, 3, 4], true),
];

#[test]
fn test_example_formula_fixture() {
    let f = example_formula();
    for (lits, expected) in FIXTURE {
        let interp = Interpretation::from_lits(lits);
        assert_eq!(evaluate(&f, &interp), Ok(expected), "{:?}", lits);
    }
}

#[test]
fn test_example_formula_fixture_arena() {
    let arena = ExprArena::from_expr(&example_formula());
    for (lits, expected) in FIXTURE {
        let interp = Interpretation::from_lits(lits);
        assert_eq!(arena.eval(&interp), Ok(expected), "{:?}", lits);
    }
}

#[test]
fn test_example_formula_truth_table() {
    let table = TruthTable::new(&example_formula());
    assert_eq!(table.vars(), &[Var::new(1), Var::new(2), Var::new(3), Var::new(4)]);
    let expected: Vec<bool> = FIXTURE.iter().map(|&(_, result)| result).collect();
    assert_eq!(table.results(), expected);
    assert_eq!(table.count_true(), 6);
    println!("{}", table);
}

#[test]
fn test_example_formula_display() {
    assert_eq!(example_formula().to_string(), "((((x1 ↔ ¬x2) → x3) ∧ x4) ∨ false)");
}

#[test]
fn test_example_formula_unbound() {
    let f = example_formula();
    let interp = Interpretation::from_lits([1, 2, 3]);
    assert_eq!(evaluate(&f, &interp), Err(Error::UnboundVariable(Var::new(4))));
}

#[test]
fn test_loose_construction() {
    // The same formula built through the checked `(op, left, right?)` constructor.
    let build = || -> Result<Expr, Error> {
        let not_x2 = Expr::operator(Operator::Not, x(2), None)?;
        let iff = Expr::operator(Operator::MaterialImplication, x(1), Some(not_x2))?;
        let imp = Expr::operator(Operator::Implication, iff, Some(x(3)))?;
        let and = Expr::operator(Operator::And, imp, Some(x(4)))?;
        Expr::operator(Operator::Or, and, Some(Expr::constant(false)))
    };
    assert_eq!(build(), Ok(example_formula()));

    let broken = Expr::operator(Operator::Implication, x(1), None);
    assert!(broken.unwrap_err().is_malformed());
}

#[test]
fn test_arena_built_by_hand() {
    let mut arena = ExprArena::new();
    let x1 = arena.push_var(Var::new(1));
    let x2 = arena.push_var(Var::new(2));
    let not_x2 = arena.push_op(Operator::Not, x2, None);
    let iff = arena.push_op(Operator::MaterialImplication, x1, Some(not_x2));
    let x3 = arena.push_var(Var::new(3));
    let imp = arena.push_op(Operator::Implication, iff, Some(x3));
    let x4 = arena.push_var(Var::new(4));
    let and = arena.push_op(Operator::And, imp, Some(x4));
    let f = arena.push_const(false);
    arena.push_op(Operator::Or, and, Some(f));

    assert_eq!(arena.to_expr(), Ok(example_formula()));
    for (lits, expected) in FIXTURE {
        assert_eq!(arena.eval(&Interpretation::from_lits(lits)), Ok(expected), "{:?}", lits);
    }
}

#[test]
fn test_concurrent_evaluation() {
    let f = example_formula();
    std::thread::scope(|s| {
        let handles: Vec<_> = FIXTURE
            .iter()
            .map(|&(lits, expected)| {
                let f = &f;
                s.spawn(move || (f.eval(&Interpretation::from_lits(lits)), expected))
            })
            .collect();
        for handle in handles {
            let (result, expected) = handle.join().unwrap();
            assert_eq!(result, Ok(expected));
        }
    });
}
