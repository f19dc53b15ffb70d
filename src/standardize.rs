//! Standardization of arrays along an axis.
use crate::{
    element::Element,
    error::{NormalizeError, NormalizeResult},
    num::Float,
    stats::Moments,
};
use ndarray::{Array, Array2, ArrayBase, Axis, Data, Dimension};

/// Returns a standardization of the array where each lane along the axis is
/// normalized against its own mean and standard deviation, ignoring NaN
/// entries. For a 2-D array, `Axis(0)` standardizes each column and `Axis(1)`
/// each row. Lanes with degenerate statistics are filled with NaN.
pub fn standardize_axis<A, S, D>(
    x: &ArrayBase<S, D>,
    axis: Axis,
    ddof: usize,
) -> NormalizeResult<Array<A::Float, D>>
where
    A: Element,
    S: Data<Elem = A>,
    D: Dimension,
{
    if axis.index() >= x.ndim() {
        return Err(NormalizeError::AxisOutOfBounds {
            axis: axis.index(),
            ndim: x.ndim(),
        });
    }
    let mut result: Array<A::Float, D> = x.mapv(A::to_float);
    standardize_lanes(&mut result, axis, ddof);
    Ok(result)
}

/// Returns a standardization of a design matrix where rows are separate
/// observations and columns are different dependent variables. Each quantity
/// has its mean subtracted and is then divided by the population standard
/// deviation.
pub fn standardize<F>(mut design: Array2<F>) -> Array2<F>
where
    F: Float,
{
    standardize_lanes(&mut design, Axis(0), 0);
    design
}

/// Normalize each lane along the axis in place. The axis must be in bounds.
fn standardize_lanes<F, D>(x: &mut Array<F, D>, axis: Axis, ddof: usize)
where
    F: Float,
    D: Dimension,
{
    let mut n_degenerate: usize = 0;
    for mut lane in x.lanes_mut(axis) {
        let moments = Moments::from_array(&lane, ddof);
        if moments.is_degenerate() && !lane.is_empty() {
            n_degenerate += 1;
        }
        moments.scale_inplace(&mut lane);
    }
    if n_degenerate > 0 {
        log::debug!(
            "{} lanes along axis {} have degenerate statistics",
            n_degenerate,
            axis.index()
        );
    }
}
