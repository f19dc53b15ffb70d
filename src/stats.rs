//! NaN-aware summary statistics used for normalization.

use crate::{element::Element, num::Float};
use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};

/// The moments of a sample with NaN entries ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<F>
where
    F: Float,
{
    /// The number of non-NaN entries the moments were computed from.
    pub count: usize,
    /// The arithmetic mean of the non-NaN entries. NaN if there are none.
    pub mean: F,
    /// The variance about the mean with a divisor of `count - ddof`. NaN if
    /// `count <= ddof`.
    pub variance: F,
}

impl<F> Moments<F>
where
    F: Float,
{
    /// Compute the moments of every non-NaN element of the array, regardless
    /// of its shape. A `ddof` of zero gives the population variance.
    pub fn from_array<S, D>(x: &ArrayBase<S, D>, ddof: usize) -> Self
    where
        S: Data<Elem = F>,
        D: Dimension,
    {
        // Values are shifted by the first non-NaN entry so that constant
        // data has exactly zero deviation, then summed pairwise.
        let shift = x
            .iter()
            .copied()
            .find(|v| !v.is_nan())
            .unwrap_or_else(F::zero);
        let mut shifted: Vec<F> = x
            .iter()
            .filter(|v| !v.is_nan())
            .map(|&v| v - shift)
            .collect();
        let count = shifted.len();
        let offset = if count == 0 {
            F::nan()
        } else {
            pairwise_sum(&shifted) / from_count(count)
        };
        let mean = shift + offset;
        // The squared deviations are summed in a second pass about the final
        // mean, which is better conditioned than accumulating x^2.
        let variance = if count <= ddof {
            F::nan()
        } else {
            for d in shifted.iter_mut() {
                let dev = *d - offset;
                *d = dev * dev;
            }
            pairwise_sum(&shifted) / from_count(count - ddof)
        };
        let moments = Self {
            count,
            mean,
            variance,
        };
        log::trace!(
            "moments over {} of {} entries: mean = {}, variance = {}",
            count,
            x.len(),
            mean,
            variance
        );
        moments
    }

    /// The standard deviation, the square root of the variance.
    pub fn std(&self) -> F {
        self.variance.sqrt()
    }

    /// Whether every entry normalized with these moments will be NaN. This is
    /// the case when the standard deviation is zero (all entries identical,
    /// or a single entry) or undefined (no entries).
    pub fn is_degenerate(&self) -> bool {
        let std = self.std();
        std.is_nan() || std == F::zero()
    }

    /// The z-score of a single value.
    #[inline]
    pub fn zscore(&self, value: F) -> F {
        (value - self.mean) / self.std()
    }

    /// Normalize another array by these moments, promoting its elements to
    /// the floating-point type of the moments.
    pub fn scale<A, S, D>(&self, x: &ArrayBase<S, D>) -> Array<F, D>
    where
        A: Element<Float = F>,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let std = self.std();
        x.mapv(|v| (v.to_float() - self.mean) / std)
    }

    /// Normalize an owned array in place by these moments.
    pub fn scale_into<D>(&self, mut x: Array<F, D>) -> Array<F, D>
    where
        D: Dimension,
    {
        self.scale_inplace(&mut x);
        x
    }

    /// Normalize a mutable array or view in place by these moments.
    pub fn scale_inplace<S, D>(&self, x: &mut ArrayBase<S, D>)
    where
        S: DataMut<Elem = F>,
        D: Dimension,
    {
        let std = self.std();
        x.mapv_inplace(|v| (v - self.mean) / std);
    }
}

/// Below this length values are added sequentially with compensation.
const PAIRWISE_BLOCK: usize = 128;

/// Sum with error growth logarithmic in the length by recursively splitting
/// the slice in half.
fn pairwise_sum<F: Float>(values: &[F]) -> F {
    if values.len() <= PAIRWISE_BLOCK {
        return kahan_sum(values);
    }
    let mid = values.len() / 2;
    pairwise_sum(&values[..mid]) + pairwise_sum(&values[mid..])
}

/// Compensated sequential sum.
fn kahan_sum<F: Float>(values: &[F]) -> F {
    let mut sum = F::zero();
    let mut comp = F::zero();
    for &v in values {
        let y = v - comp;
        let t = sum + y;
        comp = (t - sum) - y;
        sum = t;
    }
    sum
}

/// Convert an element count to the float type.
fn from_count<F: Float>(n: usize) -> F {
    F::from_usize(n).unwrap_or_else(F::nan)
}
