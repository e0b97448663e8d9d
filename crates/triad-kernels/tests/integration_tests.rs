//! Integration tests for triad-kernels
//!
//! Contraction against hand-computed values, the block-wise equivalence, and
//! the shape guard.

use anyhow::Result;
use triad_core::{Group, GroupSizes, Mat};
use triad_kernels::{
    approx_eq, contract, contract_blockwise, contract_reduced, contract_sections,
    max_abs_diff, ContractionConfig, ContractionEngine,
};

#[test]
fn test_all_ones_contract_to_two() -> Result<()> {
    let a = Mat::<f64>::ones(GroupSizes::new(1, 1, 1), 2)?;
    let b = Mat::<f64>::ones(GroupSizes::new(1, 1, 1), 2)?;
    let c = contract(&a, &b)?;

    assert_eq!(c.group_size(Group::Free), 1);
    assert_eq!(c.group_size(Group::Caly), 1);
    assert!(c.as_slice().iter().all(|&x| x == 2.0));
    Ok(())
}

#[test]
fn test_plain_block_product_has_no_scott_group() -> Result<()> {
    // A: 4x4 as (free=2, caly=2); B: 4x2 as (scott=2, caly=1)
    let a = Mat::<f64>::from_fn(GroupSizes::new(2, 0, 2), 2, |i| i as f64)?;
    let b = Mat::<f64>::from_fn(GroupSizes::new(0, 2, 1), 2, |i| (i % 3) as f64)?;
    let c = contract(&a, &b)?;
    assert_eq!(c.sizes(), GroupSizes::new(2, 0, 1));

    for row in 0..4 {
        for col in 0..2 {
            let expected: f64 = (0..4)
                .map(|k| a[row * 4 + k] * b[k * 2 + col])
                .sum();
            assert_eq!(c[row * 2 + col], expected);
        }
    }
    Ok(())
}

#[test]
fn test_blockwise_equals_direct_for_floats() -> Result<()> {
    let a = Mat::<f64>::from_fn(GroupSizes::new(1, 2, 2), 3, |i| (i as f64).sin())?;
    let b = Mat::<f64>::from_fn(GroupSizes::new(2, 2, 1), 3, |i| (i as f64 * 0.1).cos())?;

    let direct = contract(&a, &b)?;
    let blockwise = contract_blockwise(&a, &b)?;
    assert!(approx_eq(&direct, &blockwise, 1e-12));
    assert_eq!(max_abs_diff(&direct, &blockwise)?, 0.0);
    Ok(())
}

#[test]
fn test_partials_reassemble_along_scott() -> Result<()> {
    let a = Mat::<i64>::iota(GroupSizes::new(1, 1, 1), 2)?;
    let b = Mat::<i64>::iota(GroupSizes::new(1, 1, 1), 2)?;
    let partials = contract_sections(&a, &b)?;
    assert_eq!(partials.len(), 2);
    assert!(partials
        .iter()
        .all(|p| p.sizes() == GroupSizes::new(1, 0, 1)));

    let assembled = Mat::assemble(&partials, Group::Scott)?;
    assert_eq!(assembled, contract(&a, &b)?);
    Ok(())
}

#[test]
fn test_reduced_is_block_matrix_product() -> Result<()> {
    // A as a 2x4 matrix (l | s c), B as a 4x2 matrix (s c | m)
    let a = Mat::<i64>::iota(GroupSizes::new(1, 1, 1), 2)?;
    let b = Mat::<i64>::iota(GroupSizes::new(1, 1, 1), 2)?;
    let c = contract_reduced(&a, &b)?;
    assert_eq!(c.sizes(), GroupSizes::new(1, 0, 1));

    for l in 0..2 {
        for m in 0..2 {
            let expected: i64 = (0..4).map(|k| a[l * 4 + k] * b[k * 2 + m]).sum();
            assert_eq!(c.read(&[l], &[], &[m])?, expected);
        }
    }
    Ok(())
}

#[test]
fn test_shape_guard_performs_no_write() {
    let a = Mat::<f64>::ones(GroupSizes::new(1, 0, 2), 2).unwrap();
    let b = Mat::<f64>::ones(GroupSizes::new(0, 1, 1), 2).unwrap();
    let (a_before, b_before) = (a.clone(), b.clone());

    assert!(contract(&a, &b).unwrap_err().is_shape_mismatch());
    assert!(contract_blockwise(&a, &b).unwrap_err().is_shape_mismatch());
    assert!(contract_reduced(&a, &b).unwrap_err().is_shape_mismatch());
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_engine_config_round_trip() -> Result<()> {
    let config = ContractionConfig::new()
        .parallel(true)
        .min_parallel_sections(2)
        .num_threads(Some(2));
    let engine = ContractionEngine::with_config(config.clone());
    assert_eq!(engine.config(), &config);

    let a = Mat::<f64>::iota(GroupSizes::new(1, 2, 1), 2)?;
    let b = Mat::<f64>::ones(GroupSizes::new(2, 1, 1), 2)?;
    assert_eq!(engine.contract_blockwise(&a, &b)?, engine.contract(&a, &b)?);
    Ok(())
}
