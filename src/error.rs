//! define the error enum for normalization routines

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Axis {axis} is out of bounds for an array of dimension {ndim}")]
    AxisOutOfBounds { axis: usize, ndim: usize },
}

pub type NormalizeResult<T> = Result<T, NormalizeError>;
