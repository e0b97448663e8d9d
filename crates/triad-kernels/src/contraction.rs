//! Section-wise contraction of axis-group tensors
//!
//! For `A` with groups `(l, s, c)` and `B` with groups `(s, c, m)` the
//! contraction is
//!
//! ```text
//! C(l, s, m) = Σ_c A(l, s, c) · B(s, c, m)
//! ```
//!
//! `A.caly` and `B.scott` are the contracted group. `A.scott` and `B.free`
//! are a batch group carried through unchanged; when both are empty this is
//! the plain block product `C(l, m) = Σ_c A(l, c) · B(c, m)` with
//! `C.scott = 0`.
//!
//! # Block-wise evaluation
//!
//! Dissecting `A` on scott and `B` on free yields one section pair per batch
//! position. Each pair has no batch group, so it contracts independently into
//! its own buffer, and assembling the partial results along scott reproduces
//! the direct contraction exactly (the per-entry sum runs over `c` in the same
//! ascending order). Section pairs are what the parallel path distributes.

use crate::config::ContractionConfig;
use num_traits::Num;
use triad_core::{volume, Group, GroupSizes, Mat, TriadError, TriadResult};

fn check_operands<T>(operation: &'static str, a: &Mat<T>, b: &Mat<T>) -> TriadResult<()> {
    if a.radix() != b.radix() {
        return Err(TriadError::shape_mismatch(
            operation,
            format!("radix {} vs {}", a.radix(), b.radix()),
        ));
    }
    if a.group_size(Group::Caly) != b.group_size(Group::Scott) {
        return Err(TriadError::shape_mismatch(
            operation,
            format!(
                "contracted group differs: A.caly={} vs B.scott={}",
                a.group_size(Group::Caly),
                b.group_size(Group::Scott)
            ),
        ));
    }
    if a.group_size(Group::Scott) != b.group_size(Group::Free) {
        return Err(TriadError::shape_mismatch(
            operation,
            format!(
                "batch group differs: A.scott={} vs B.free={}",
                a.group_size(Group::Scott),
                b.group_size(Group::Free)
            ),
        ));
    }
    Ok(())
}

/// Contract `A.caly` against `B.scott`
///
/// The result has sizes `(A.free, A.scott, B.caly)`. Operands are validated
/// before the result is allocated.
///
/// # Errors
///
/// - `ShapeMismatch` if the radices differ, `A.caly != B.scott` or
///   `A.scott != B.free`
/// - `AllocationFailure` if the result does not fit in memory
///
/// # Complexity
///
/// Time: O(n^(A.free + A.scott + A.caly + B.caly))
/// Space: O(n^(A.free + A.scott + B.caly))
///
/// # Examples
///
/// ```
/// use triad_core::{GroupSizes, Mat};
/// use triad_kernels::contract;
///
/// // a 2x2 matrix product: A(l, c) · B(c, m)
/// let a = Mat::from_vec(vec![1.0, 2.0, 3.0, 4.0], GroupSizes::new(1, 0, 1), 2).unwrap();
/// let b = Mat::from_vec(vec![5.0, 6.0, 7.0, 8.0], GroupSizes::new(0, 1, 1), 2).unwrap();
/// let c = contract(&a, &b).unwrap();
/// assert_eq!(c.sizes(), GroupSizes::new(1, 0, 1));
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn contract<T>(a: &Mat<T>, b: &Mat<T>) -> TriadResult<Mat<T>>
where
    T: Clone + Num,
{
    check_operands("contract", a, b)?;
    let radix = a.radix();
    let batch = volume(radix, a.group_size(Group::Scott))?;
    let inner = volume(radix, a.group_size(Group::Caly))?;
    let outer = volume(radix, b.group_size(Group::Caly))?;
    let sizes = GroupSizes::new(
        a.group_size(Group::Free),
        a.group_size(Group::Scott),
        b.group_size(Group::Caly),
    );
    log::debug!(
        "contract: [{}] x [{}], N={} -> [{}]",
        a.sizes(),
        b.sizes(),
        radix,
        sizes
    );

    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    Mat::from_fn(sizes, radix, |offset| {
        // offset = (l * batch + s) * outer + m
        let row = offset / outer;
        let m = offset % outer;
        let s = row % batch;
        lhs[row * inner..(row + 1) * inner]
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (c, x)| {
                acc + x.clone() * rhs[(s * inner + c) * outer + m].clone()
            })
    })
}

/// Executes section-wise contractions under a [`ContractionConfig`]
///
/// # Examples
///
/// ```
/// use triad_core::{GroupSizes, Mat};
/// use triad_kernels::{contract, ContractionConfig, ContractionEngine};
///
/// let a = Mat::<f64>::iota(GroupSizes::new(1, 1, 1), 3).unwrap();
/// let b = Mat::<f64>::ones(GroupSizes::new(1, 1, 2), 3).unwrap();
///
/// let engine = ContractionEngine::with_config(ContractionConfig::new().parallel(true));
/// let blockwise = engine.contract_blockwise(&a, &b).unwrap();
/// assert_eq!(blockwise, contract(&a, &b).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContractionEngine {
    config: ContractionConfig,
}

impl ContractionEngine {
    /// Engine with the default (sequential) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit configuration
    pub fn with_config(config: ContractionConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &ContractionConfig {
        &self.config
    }

    /// Direct contraction, see [`contract`]
    pub fn contract<T>(&self, a: &Mat<T>, b: &Mat<T>) -> TriadResult<Mat<T>>
    where
        T: Clone + Num,
    {
        contract(a, b)
    }

    /// Contract every section pair `(A on scott, B on free)` independently
    ///
    /// Returns one partial result per batch ordinal, in ordinal order. Each
    /// partial has sizes `(A.free, 0, B.caly)` and its own buffer.
    pub fn contract_sections<T>(&self, a: &Mat<T>, b: &Mat<T>) -> TriadResult<Vec<Mat<T>>>
    where
        T: Clone + Num + Send + Sync,
    {
        check_operands("contract_sections", a, b)?;
        let lhs = a.dissect(Group::Scott)?;
        let rhs = b.dissect(Group::Free)?;
        log::debug!(
            "contract_sections: {} section pairs of [{}] x [{}]",
            lhs.len(),
            lhs[0].sizes(),
            rhs[0].sizes()
        );
        if self.config.wants_parallel(lhs.len()) {
            self.contract_pairs_parallel(&lhs, &rhs)
        } else {
            contract_pairs_sequential(&lhs, &rhs)
        }
    }

    /// Contract section pairs and assemble the partials along scott
    ///
    /// Equal to [`contract`] on the undissected operands.
    pub fn contract_blockwise<T>(&self, a: &Mat<T>, b: &Mat<T>) -> TriadResult<Mat<T>>
    where
        T: Clone + Num + Send + Sync,
    {
        let partials = self.contract_sections(a, b)?;
        Mat::assemble_rank(&partials, Group::Scott, a.group_size(Group::Scott))
    }

    /// Contract over both the batch and the contracted group
    ///
    /// `C(l, m) = Σ_s Σ_c A(l, s, c) · B(s, c, m)`, the full block matrix
    /// product. The result has sizes `(A.free, 0, B.caly)`.
    pub fn contract_reduced<T>(&self, a: &Mat<T>, b: &Mat<T>) -> TriadResult<Mat<T>>
    where
        T: Clone + Num,
    {
        contract(a, b)?.sum_group(Group::Scott)
    }

    #[cfg(feature = "parallel")]
    fn contract_pairs_parallel<T>(&self, lhs: &[Mat<T>], rhs: &[Mat<T>]) -> TriadResult<Vec<Mat<T>>>
    where
        T: Clone + Num + Send + Sync,
    {
        use rayon::prelude::*;

        let run = || {
            lhs.par_iter()
                .zip(rhs.par_iter())
                .map(|(x, y)| contract(x, y))
                .collect::<TriadResult<Vec<_>>>()
        };
        match self.config.num_threads {
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(run),
                Err(e) => {
                    log::warn!(
                        "contract_sections: cannot build a {}-thread pool ({}), using the global pool",
                        threads,
                        e
                    );
                    run()
                }
            },
            None => run(),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn contract_pairs_parallel<T>(&self, lhs: &[Mat<T>], rhs: &[Mat<T>]) -> TriadResult<Vec<Mat<T>>>
    where
        T: Clone + Num + Send + Sync,
    {
        log::warn!(
            "contract_sections: parallel requested without the `parallel` feature, contracting {} pairs sequentially",
            lhs.len()
        );
        contract_pairs_sequential(lhs, rhs)
    }
}

fn contract_pairs_sequential<T>(lhs: &[Mat<T>], rhs: &[Mat<T>]) -> TriadResult<Vec<Mat<T>>>
where
    T: Clone + Num,
{
    lhs.iter()
        .zip(rhs)
        .enumerate()
        .map(|(ordinal, (x, y))| {
            log::trace!("contract_sections: pair {}", ordinal);
            contract(x, y)
        })
        .collect()
}

/// Section-pair contraction with the default engine
pub fn contract_sections<T>(a: &Mat<T>, b: &Mat<T>) -> TriadResult<Vec<Mat<T>>>
where
    T: Clone + Num + Send + Sync,
{
    ContractionEngine::new().contract_sections(a, b)
}

/// Block-wise contraction with the default engine
pub fn contract_blockwise<T>(a: &Mat<T>, b: &Mat<T>) -> TriadResult<Mat<T>>
where
    T: Clone + Num + Send + Sync,
{
    ContractionEngine::new().contract_blockwise(a, b)
}

/// Contraction summed over the batch group
pub fn contract_reduced<T>(a: &Mat<T>, b: &Mat<T>) -> TriadResult<Mat<T>>
where
    T: Clone + Num,
{
    ContractionEngine::new().contract_reduced(a, b)
}
