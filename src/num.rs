//! numerical trait constraints
use ndarray::ScalarOperand;
use num_traits::FromPrimitive;
use std::fmt::{Debug, Display};

/// The floating-point types that statistics are computed in.
pub trait Float:
    'static + Sized + num_traits::Float + FromPrimitive + ScalarOperand + Debug + Display
{
}

impl Float for f32 {}
impl Float for f64 {}
