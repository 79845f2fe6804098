//! Evaluation benchmarks.
//!
//! Compares recursive evaluation of boxed trees against the flat arena walk,
//! on balanced random formulas and on deep negation chains.
//!
//! Run with:
//! ```bash
//! cargo bench --bench eval
//! ```

use boolexpr_rs::arena::ExprArena;
use boolexpr_rs::ast::Expr;
use boolexpr_rs::eval::Eval;
use boolexpr_rs::interpretation::Interpretation;
use boolexpr_rs::types::{Operator, Var};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Helper: Random Formula
// ============================================================================

/// Build a random formula of the given depth over `x1..=x{num_vars}`.
fn build_random_formula(rng: &mut ChaCha8Rng, num_vars: u32, depth: usize) -> Expr {
    if depth == 0 {
        return if rng.random_bool(0.1) {
            Expr::constant(rng.random_bool(0.5))
        } else {
            Expr::var(Var::new(rng.random_range(1..=num_vars)))
        };
    }

    let a = build_random_formula(rng, num_vars, depth - 1);
    match Operator::ALL[rng.random_range(0..Operator::ALL.len())] {
        Operator::Not => Expr::not(a),
        Operator::And => Expr::and(a, build_random_formula(rng, num_vars, depth - 1)),
        Operator::Or => Expr::or(a, build_random_formula(rng, num_vars, depth - 1)),
        Operator::Implication => Expr::implication(a, build_random_formula(rng, num_vars, depth - 1)),
        Operator::MaterialImplication => {
            Expr::material_implication(a, build_random_formula(rng, num_vars, depth - 1))
        }
    }
}

fn random_interpretation(rng: &mut ChaCha8Rng, num_vars: u32) -> Interpretation {
    (1..=num_vars).map(|i| (Var::new(i), rng.random_bool(0.5))).collect()
}

// ============================================================================
// Benchmark: Balanced random formulas
// ============================================================================

fn bench_random_formula(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval/random_formula");

    let num_vars = 20;
    let seed = 42;

    for depth in [4, 8, 12, 16] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let f = build_random_formula(&mut rng, num_vars, depth);
        let arena = ExprArena::from_expr(&f);
        let interp = random_interpretation(&mut rng, num_vars);

        group.throughput(Throughput::Elements(f.size() as u64));
        group.bench_with_input(BenchmarkId::new("recursive", depth), &f, |b, f| {
            b.iter(|| f.eval(&interp));
        });
        group.bench_with_input(BenchmarkId::new("arena", depth), &arena, |b, arena| {
            b.iter(|| arena.eval(&interp));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Deep negation chains (arena only)
// ============================================================================

fn bench_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval/deep_chain");
    group.sample_size(20);

    let interp = Interpretation::from_lits([1]);

    for depth in [10_000, 100_000, 1_000_000] {
        let mut arena = ExprArena::with_capacity(depth + 1);
        let mut top = arena.push_var(Var::new(1));
        for _ in 0..depth {
            top = arena.push_op(Operator::Not, top, None);
        }

        group.throughput(Throughput::Elements(arena.len() as u64));
        group.bench_with_input(BenchmarkId::new("arena", depth), &arena, |b, arena| {
            b.iter(|| arena.eval(&interp));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Flattening
// ============================================================================

fn bench_from_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval/from_expr");

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let f = build_random_formula(&mut rng, 20, 14);

    group.throughput(Throughput::Elements(f.size() as u64));
    group.bench_function("depth=14", |b| {
        b.iter(|| ExprArena::from_expr(&f));
    });

    group.finish();
}

criterion_group!(benches, bench_random_formula, bench_deep_chain, bench_from_expr);

criterion_main!(benches);
