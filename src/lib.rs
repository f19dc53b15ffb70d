//! Z-score normalization of data stored in arrays, with NaN entries ignored
//! when computing the mean and standard deviation.
//!
//! ```
//! use ndarray::array;
//! use ndarray_zscore::normalize;
//!
//! let z = normalize(&array![10., 20., 30., f64::NAN]);
//! assert!(z[3].is_nan());
//! assert_eq!(z[1], 0.);
//! ```

pub mod element;
pub mod error;
pub mod normalize;
pub mod num;
pub mod standardize;
pub mod stats;

pub use element::Element;
pub use error::{NormalizeError, NormalizeResult};
pub use normalize::{normalize, NormalizeOptions, Normalizer};
pub use num::Float;
pub use standardize::{standardize, standardize_axis};
pub use stats::Moments;
