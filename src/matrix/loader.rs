//! TSPLIB `.atsp` reader.
//!
//! Only two things matter in the file: a `DIMENSION: <N>` header and the
//! `EDGE_WEIGHT_SECTION` marker followed by N×N integers in row-major
//! order. Every other header line is ignored. Weights may be spread over
//! any number of lines.
//!
//! Off-diagonal weights are bounded by `i64::MAX / N` so that no tour of N
//! edges can overflow its cost.

use super::distance::DistanceMatrix;
use crate::error::DataError;
use std::path::Path;
use tracing::debug;

/// Reads and parses an ATSP instance from disk.
pub fn load_atsp_file(path: impl AsRef<Path>) -> Result<DistanceMatrix, DataError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dm = parse_atsp(&text)?;
    debug!(path = %path.display(), cities = dm.size(), "loaded ATSP instance");
    Ok(dm)
}

/// Parses ATSP text into a [`DistanceMatrix`].
///
/// The diagonal is overwritten with `-1` regardless of the file contents.
/// Tokens after the N×N weights (such as `EOF`) are ignored.
///
/// # Examples
///
/// ```
/// use atsp_ga::matrix::parse_atsp;
///
/// let text = "NAME: tiny\nDIMENSION: 2\nEDGE_WEIGHT_SECTION\n0 4\n9 0\nEOF\n";
/// let dm = parse_atsp(text).unwrap();
/// assert_eq!(dm.get(0, 1), 4);
/// assert_eq!(dm.get(1, 0), 9);
/// ```
pub fn parse_atsp(text: &str) -> Result<DistanceMatrix, DataError> {
    let mut dimension: Option<usize> = None;
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        let key = line.trim_start();
        if key.starts_with("DIMENSION") {
            dimension = Some(parse_dimension(line)?);
        } else if key.starts_with("EDGE_WEIGHT_SECTION") {
            let n = dimension.ok_or(DataError::MissingDimension)?;
            return read_weights(n, lines.flat_map(str::split_whitespace));
        }
    }

    match dimension {
        None => Err(DataError::MissingDimension),
        Some(_) => Err(DataError::MissingEdgeWeightSection),
    }
}

fn parse_dimension(line: &str) -> Result<usize, DataError> {
    let value = line
        .split_once(':')
        .map(|(_, v)| v.trim())
        .ok_or_else(|| DataError::InvalidDimension(line.trim().to_string()))?;
    let n: usize = value
        .parse()
        .map_err(|_| DataError::InvalidDimension(value.to_string()))?;
    if n < 2 {
        return Err(DataError::DimensionTooSmall(n));
    }
    Ok(n)
}

fn read_weights<'a>(
    n: usize,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<DistanceMatrix, DataError> {
    let expected = n * n;
    let limit = weight_limit(n);
    let mut data = Vec::with_capacity(expected);
    for (k, token) in tokens.take(expected).enumerate() {
        let w: i64 = token.parse().map_err(|_| DataError::InvalidWeight {
            token: token.to_string(),
        })?;
        // Diagonal entries are replaced by the sentinel and never summed.
        let diagonal = k % (n + 1) == 0;
        if !diagonal && w.unsigned_abs() > limit.unsigned_abs() {
            return Err(DataError::WeightOutOfRange { weight: w, limit });
        }
        data.push(w);
    }
    let found = data.len();
    DistanceMatrix::from_data(n, data).ok_or(DataError::IncompleteMatrix { expected, found })
}

/// Largest absolute edge weight for which an `n`-edge tour fits in `i64`.
fn weight_limit(n: usize) -> i64 {
    i64::MAX / i64::try_from(n).unwrap_or(i64::MAX)
}
