//! Human-readable rendering

use super::types::Mat;
use std::fmt;

/// Renders the group sizes and radix on one line and the flat buffer on the next.
///
/// ```
/// use triad_core::{GroupSizes, Mat};
///
/// let mat = Mat::<u8>::iota(GroupSizes::new(0, 1, 1), 2).unwrap();
/// assert_eq!(mat.to_string(), "Mat[free=0, scott=1, caly=1], N=2\n[0, 1, 2, 3]");
/// ```
impl<T> fmt::Display for Mat<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat[{}], N={}", self.sizes, self.radix)?;
        f.write_str("[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            value.fmt(f)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use crate::types::GroupSizes;
    use crate::Mat;

    #[test]
    fn test_display_rank_zero() {
        let mat = Mat::from_vec(vec![1.5_f64], GroupSizes::default(), 4).unwrap();
        assert_eq!(mat.to_string(), "Mat[free=0, scott=0, caly=0], N=4\n[1.5]");
    }

    #[test]
    fn test_display_forwards_precision() {
        let mat = Mat::from_vec(vec![0.26_f64, 1.0], GroupSizes::new(1, 0, 0), 2).unwrap();
        assert_eq!(format!("{:.1}", mat), "Mat[free=1, scott=0, caly=0], N=2\n[0.3, 1.0]");
    }
}
