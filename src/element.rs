//! Element types accepted as input

use crate::num::Float;

/// Describes the domain of the input data. Implementing this trait for a type
/// shows how to convert it to a floating point type, and that type is the
/// element type of the normalized output.
///
/// Floating-point types map to themselves so that reduced precision survives
/// normalization, while integers are promoted to `f64`.
pub trait Element: Copy {
    /// The floating-point type the statistics and output are expressed in.
    type Float: Float;

    /// Converts the value to its floating-point representation.
    fn to_float(self) -> Self::Float;
}

impl Element for f32 {
    type Float = f32;
    #[inline]
    fn to_float(self) -> f32 {
        self
    }
}

impl Element for f64 {
    type Float = f64;
    #[inline]
    fn to_float(self) -> f64 {
        self
    }
}

macro_rules! impl_integer_element {
    ($($int:ty),*) => {
        $(
            impl Element for $int {
                type Float = f64;
                #[inline]
                fn to_float(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
