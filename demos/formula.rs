//! Truth table of a fixed example formula.
//!
//! Builds `(((x1 ↔ ¬x2) → x3) ∧ x4) ∨ false`, evaluates it under every
//! assignment of its four variables and prints the table.
//!
//! Run with: `cargo run --example formula`
//! With options: `cargo run --example formula -- --check --dot`

use clap::Parser;
use color_eyre::eyre::bail;
use simplelog::LevelFilter;

use boolexpr_rs::ast::Expr;
use boolexpr_rs::eval::evaluate;
use boolexpr_rs::interpretation::Interpretation;
use boolexpr_rs::truth_table::TruthTable;
use boolexpr_rs::types::Var;

#[derive(Parser, Debug)]
#[command(name = "formula")]
#[command(about = "Evaluate an example propositional formula under all interpretations")]
struct Args {
    /// Compare every row against the expected results
    #[arg(long)]
    check: bool,

    /// Print the formula tree in DOT format
    #[arg(long)]
    dot: bool,

    /// Log level
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

/// Expected value for each row, `x1` being the most significant bit.
const EXPECTED: [bool; 16] = [
    false, true, false, true, // x1=F x2=F
    false, false, false, true, // x1=F x2=T
    false, false, false, true, // x1=T x2=F
    false, true, false, true, // x1=T x2=T
];

fn example_formula() -> Expr {
    let x = |id| Expr::var(Var::new(id));
    Expr::or(
        Expr::and(
            Expr::implication(Expr::material_implication(x(1), Expr::not(x(2))), x(3)),
            x(4),
        ),
        Expr::constant(false),
    )
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let f = example_formula();
    println!("f = {}", f);
    println!("depth = {}, size = {}", f.depth(), f.size());

    if args.dot {
        println!("{}", f.to_dot()?);
    }

    let table = TruthTable::new(&f);
    println!("{}", table);
    println!("{} of {} interpretations satisfy f", table.count_true(), table.rows().len());

    if args.check {
        let mut failures = 0;
        for (row, &expected) in table.rows().iter().zip(EXPECTED.iter()) {
            let interp: Interpretation = table.interpretation(row);
            let result = evaluate(&f, &interp)?;
            let ok = result == expected;
            if !ok {
                failures += 1;
            }
            log::info!("{:?} -> {} ({})", interp.to_lits(), result, if ok { "ok" } else { "FAIL" });
        }
        if failures > 0 {
            bail!("{} of {} rows do not match", failures, EXPECTED.len());
        }
        println!("All {} rows match", EXPECTED.len());
    }

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
