//! Z-score normalization of whole arrays and the configurable normalizer.

use crate::{
    element::Element, error::NormalizeResult, num::Float, standardize::standardize_axis,
    stats::Moments,
};
use ndarray::{Array, ArrayBase, Axis, Data, Dimension};

/// Returns the z-score of every element of the array: the element minus the
/// mean, divided by the population standard deviation. The statistics are
/// taken over all elements regardless of shape, with NaN entries ignored.
///
/// No errors are possible. NaN entries remain NaN, and if the standard
/// deviation is zero or undefined (a constant array, a single value, or no
/// non-NaN values at all) every entry of the result is NaN. Integer input
/// produces `f64` output; floating-point input keeps its precision.
///
/// ```
/// use ndarray::array;
/// use ndarray_zscore::normalize;
///
/// let z = normalize(&array![10i32, 20, 30]);
/// assert!((z[0] + 1.224744871).abs() < 1e-8);
/// assert_eq!(z[1], 0.);
/// ```
pub fn normalize<A, S, D>(x: &ArrayBase<S, D>) -> Array<A::Float, D>
where
    A: Element,
    S: Data<Elem = A>,
    D: Dimension,
{
    Normalizer::default().normalize(x)
}

/// Specifies the normalization options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Delta degrees of freedom. The variance divisor is `count - ddof`, so
    /// zero gives the population standard deviation and one the sample
    /// standard deviation.
    pub ddof: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self { ddof: 0 }
    }
}

/// A builder struct for normalization configuration. The floating-point type
/// of the results follows from the element type of each input array.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delta degrees of freedom of the standard deviation
    pub fn ddof(mut self, ddof: usize) -> Self {
        self.options.ddof = ddof;
        self
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Compute the statistics that would be used to normalize the array.
    pub fn moments<A, S, D>(&self, x: &ArrayBase<S, D>) -> Moments<A::Float>
    where
        A: Element,
        S: Data<Elem = A>,
        D: Dimension,
    {
        Moments::from_array(&x.mapv(A::to_float), self.options.ddof)
    }

    /// Normalize the whole array against the statistics of all its elements.
    pub fn normalize<A, S, D>(&self, x: &ArrayBase<S, D>) -> Array<A::Float, D>
    where
        A: Element,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.normalize_into(x.mapv(A::to_float))
    }

    /// Normalize an owned floating-point array, reusing its allocation.
    pub fn normalize_into<F, D>(&self, x: Array<F, D>) -> Array<F, D>
    where
        F: Float,
        D: Dimension,
    {
        let moments = Moments::from_array(&x, self.options.ddof);
        if moments.is_degenerate() && !x.is_empty() {
            log::debug!(
                "degenerate statistics over {} non-NaN of {} entries; output is NaN",
                moments.count,
                x.len()
            );
        }
        moments.scale_into(x)
    }

    /// Normalize each lane along the axis against its own statistics, e.g.
    /// each column of a matrix for `Axis(0)`.
    pub fn normalize_axis<A, S, D>(
        &self,
        x: &ArrayBase<S, D>,
        axis: Axis,
    ) -> NormalizeResult<Array<A::Float, D>>
    where
        A: Element,
        S: Data<Elem = A>,
        D: Dimension,
    {
        standardize_axis(x, axis, self.options.ddof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn default_is_population() {
        let norm = Normalizer::default();
        assert_eq!(norm.options().ddof, 0);
    }

    #[test]
    fn sample_deviation() {
        let z = Normalizer::new().ddof(1).normalize(&array![10, 20, 30]);
        assert_abs_diff_eq!(z, array![-1., 0., 1.], epsilon = 1e-12);
    }

    #[test]
    fn moments_of_integers() {
        let m = Normalizer::new().moments(&array![1u8, 2, 3]);
        assert_eq!(m.count, 3);
        assert_abs_diff_eq!(m.mean, 2.);
    }

    #[test]
    fn one_normalizer_many_types() {
        let norm = Normalizer::new();
        let z32 = norm.normalize(&array![1f32, 2., 3.]);
        let z64 = norm.normalize(&array![1i64, 2, 3]);
        assert_abs_diff_eq!(z32[2], 1.2247449f32, epsilon = 1e-6);
        assert_abs_diff_eq!(z64[2], 1.224744871391589, epsilon = 1e-12);
    }

    #[test]
    fn into_keeps_shape() {
        let z = Normalizer::new().normalize_into(array![[1f32, 2.], [3., 4.]]);
        assert_eq!(z.shape(), &[2, 2]);
        assert_abs_diff_eq!(z.sum(), 0., epsilon = 1e-6);
    }
}
