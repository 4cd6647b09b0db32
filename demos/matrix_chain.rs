//! Example: matrix-chain multiplication under every strategy.
//!
//! Run with:
//! `cargo run --example matrix_chain`
//! or, to see the evaluation spans:
//! `cargo run --example matrix_chain --features tracing`

use dp_catalog::{problems::matrix_chain::MatrixChain, DpEngine, DpResult, Strategy};

fn main() -> DpResult<()> {
    // Example from CLRS:
    // Matrices A1..A6 with dimensions:
    // 30x35, 35x15, 15x5, 5x10, 10x20, 20x25
    let problem = MatrixChain::from_dims(&[30, 35, 15, 5, 10, 20, 25])?;

    for strategy in Strategy::ALL {
        let engine = DpEngine::with_strategy(problem.clone(), strategy);
        let (cost, stats) = engine.run();
        println!(
            "{strategy:>10}: cost {cost} ({} expansions, {} cache hits)",
            stats.expansions, stats.cache_hits
        );
    }

    println!("Optimal order: {}", problem.parenthesize());
    println!("Split decisions (i,j,k):");
    for s in problem.splits() {
        println!("  Split A[{}..{}] at {}", s.i, s.j, s.k);
    }
    Ok(())
}
