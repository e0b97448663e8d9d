//! Block-wise contraction: dissect, contract section pairs, reassemble.
//!
//! Demonstrates that the section-by-section evaluation reproduces the
//! direct contraction, and how the partial results relate to the full
//! block matrix product.
//!
//! Run with:
//! ```bash
//! cargo run --example blockwise_contraction --features parallel
//! ```

use anyhow::Result;
use triad_core::{Group, GroupSizes, Mat};
use triad_kernels::{approx_eq, contract, ContractionConfig, ContractionEngine};

fn main() -> Result<()> {
    println!("=== Triad Kernels: Block-wise Contraction ===\n");

    let radix = 2;
    let a = Mat::<f64>::from_fn(GroupSizes::new(1, 1, 1), radix, |i| i as f64 + 1.0)?;
    let b = Mat::<f64>::ones(GroupSizes::new(1, 1, 1), radix)?;
    println!("A = {}\n", a);
    println!("B = {}\n", b);

    let direct = contract(&a, &b)?;
    println!("direct contract(A, B) = {}\n", direct);

    let engine = ContractionEngine::with_config(
        ContractionConfig::new().parallel(true).min_parallel_sections(2),
    );
    let partials = engine.contract_sections(&a, &b)?;
    for (ordinal, partial) in partials.iter().enumerate() {
        println!("section pair {}: {}", ordinal, partial);
    }

    let blockwise = Mat::assemble(&partials, Group::Scott)?;
    println!(
        "\nreassembled equals direct: {}",
        approx_eq(&blockwise, &direct, 1e-12)
    );

    let reduced = engine.contract_reduced(&a, &b)?;
    println!("block matrix product (summed over scott) = {}", reduced);

    Ok(())
}
