//! Contraction engine configuration

/// Configuration for section-wise contraction
///
/// The default is fully sequential. Parallel section processing needs the
/// `parallel` cargo feature; without it a parallel request is logged and run
/// sequentially.
///
/// # Examples
///
/// ```
/// use triad_kernels::ContractionConfig;
///
/// let config = ContractionConfig::new()
///     .parallel(true)
///     .min_parallel_sections(8)
///     .num_threads(Some(2));
/// assert!(config.parallel);
/// assert_eq!(config.min_parallel_sections, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionConfig {
    /// Contract section pairs on the rayon pool
    pub parallel: bool,

    /// Fewest section pairs worth dispatching in parallel (default: 4)
    pub min_parallel_sections: usize,

    /// Number of threads to use (None = rayon's global pool)
    pub num_threads: Option<usize>,
}

impl Default for ContractionConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            min_parallel_sections: 4,
            num_threads: None,
        }
    }
}

impl ContractionConfig {
    /// Create the default (sequential) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel section processing
    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Set the smallest section count that runs in parallel
    pub fn min_parallel_sections(mut self, count: usize) -> Self {
        self.min_parallel_sections = count;
        self
    }

    /// Set a dedicated thread count
    pub fn num_threads(mut self, threads: Option<usize>) -> Self {
        self.num_threads = threads;
        self
    }

    /// Whether `sections` pairs should be dispatched in parallel
    pub fn wants_parallel(&self, sections: usize) -> bool {
        self.parallel && sections >= self.min_parallel_sections
    }
}
