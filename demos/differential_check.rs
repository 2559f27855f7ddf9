// ============================================================================
// Differential Check Example
// ============================================================================

use std::str::FromStr;
use wad_math::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== WAD Kernel Differential Check ===\n");

    let reference = create_kernel(KernelKind::Checked);
    let candidate = create_kernel(KernelKind::Wide);

    let oracle = match EquivalenceOracle::new(OracleConfig::quick()) {
        Ok(oracle) => oracle,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        },
    };

    // Randomized pass over every operation
    println!("Randomized ({} cases per operation):", oracle.config().cases);
    match oracle.check_all_operations(reference.as_ref(), candidate.as_ref()) {
        Ok(verdicts) => {
            for (operation, verdict) in verdicts {
                report(operation, &verdict);
            }
        },
        Err(e) => eprintln!("  Error: {}", e),
    }

    // Exhaustive pass over the boundary grid
    println!("\nExhaustive (boundary values):");
    for operation in Operation::ALL {
        let inputs = operation.boundary_inputs();
        match oracle.check_operation_exhaustive(
            operation,
            reference.as_ref(),
            candidate.as_ref(),
            &inputs,
        ) {
            Ok(verdict) => report(operation, &verdict),
            Err(e) => eprintln!("  {}: error: {}", operation, e),
        }
    }

    // A few values through the Wad newtype
    println!("\nWad arithmetic:");
    if let (Ok(price), Ok(amount)) = (Wad::from_str("1.5"), Wad::from_str("2.25")) {
        match price.checked_mul(amount) {
            Ok(product) => println!("  {} * {} = {}", price, amount, product),
            Err(e) => println!("  {} * {} failed: {}", price, amount, e),
        }
        match price.sqrt() {
            Ok(root) => println!("  sqrt({}) = {}", price, root),
            Err(e) => println!("  sqrt({}) failed: {}", price, e),
        }
    }

    println!("\n=== Check Complete ===");
}

fn report(operation: Operation, verdict: &KernelVerdict) {
    match verdict {
        Verdict::Pass { cases } => println!("  {:<14} pass ({} cases)", operation, cases),
        Verdict::Fail(counterexample) => println!("  {:<14} FAIL {}", operation, counterexample),
    }
}
