//! Utility functions for testing
use anyhow::{anyhow, Result};
use ndarray::{Array1, ArrayBase, Data, Dimension};
use num_traits::Float;
use std::{
    error::Error,
    fmt::Debug,
    fs::File,
    io::{BufRead, BufReader},
    str::FromStr,
};

/// Read a flat array from a text file with one value per line. NaN entries are
/// written as `NaN`.
#[cfg(test)]
#[allow(dead_code)]
pub fn array_from_csv<X>(file: &str) -> Result<Array1<X>>
where
    X: Float + FromStr,
    <X as FromStr>::Err: 'static + Error + Send + Sync,
{
    let file = File::open(file)?;
    let reader = BufReader::new(file);
    let mut x_vec: Vec<X> = Vec::new();
    for line_result in reader.lines() {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let x_parsed: X = line.parse()?;
        x_vec.push(x_parsed);
    }
    let x: Array1<X> = x_vec.into();
    Ok(x)
}

/// Compare two arrays of the same shape, requiring NaN in exactly the same
/// positions and agreement to within `epsilon` everywhere else.
#[cfg(test)]
#[allow(dead_code)]
pub fn assert_nan_close<F, S1, S2, D>(
    actual: &ArrayBase<S1, D>,
    expected: &ArrayBase<S2, D>,
    epsilon: F,
) -> Result<()>
where
    F: Float + Debug,
    S1: Data<Elem = F>,
    S2: Data<Elem = F>,
    D: Dimension,
{
    if actual.shape() != expected.shape() {
        return Err(anyhow!(
            "shape mismatch: {:?} vs {:?}",
            actual.shape(),
            expected.shape()
        ));
    }
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        if a.is_nan() != e.is_nan() {
            return Err(anyhow!("NaN mismatch at flat index {}: {:?} vs {:?}", i, a, e));
        }
        if !e.is_nan() && (a - e).abs() > epsilon {
            return Err(anyhow!("value mismatch at flat index {}: {:?} vs {:?}", i, a, e));
        }
    }
    Ok(())
}
