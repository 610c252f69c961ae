//! Dense integer distance matrix.

use std::fmt;

/// Value stored on the diagonal. Self-distances are never part of a tour.
pub const DIAGONAL: i64 = -1;

/// A dense V×V directed distance matrix stored in row-major order.
///
/// `get(i, j)` need not equal `get(j, i)`. Diagonal entries are always
/// [`DIAGONAL`].
///
/// # Examples
///
/// ```
/// use atsp_ga::matrix::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 3],
///     vec![7, 0],
/// ]).expect("square");
/// assert_eq!(dm.get(0, 1), 3);
/// assert_eq!(dm.get(1, 0), 7);
/// assert_eq!(dm.get(0, 0), -1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size with zero off-diagonal weights.
    pub fn new(size: usize) -> Self {
        let mut dm = Self {
            data: vec![0; size * size],
            size,
        };
        dm.reset_diagonal();
        dm
    }

    /// Creates a matrix from a row-major `size * size` grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    /// Whatever the input holds on the diagonal is replaced by [`DIAGONAL`].
    pub fn from_data(size: usize, data: Vec<i64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        let mut dm = Self { data, size };
        dm.reset_diagonal();
        Some(dm)
    }

    /// Creates a matrix from nested rows.
    ///
    /// Returns `None` if the rows do not form a square.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Self::from_data(size, rows.into_iter().flatten().collect())
    }

    /// Returns the cost of the directed edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost of the directed edge `from -> to`.
    ///
    /// Writes to the diagonal are ignored.
    pub fn set(&mut self, from: usize, to: usize, distance: i64) {
        if from != to {
            self.data[from * self.size + to] = distance;
        }
    }

    /// Number of cities (V).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns one row of the matrix.
    pub fn row(&self, from: usize) -> &[i64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    fn reset_diagonal(&mut self) {
        for i in 0..self.size {
            self.data[i * self.size + i] = DIAGONAL;
        }
    }
}

/// Right-aligned columns, four characters per field.
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            for &d in self.row(i) {
                write!(f, "{d:>4}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_sentinel_diagonal() {
        let dm = DistanceMatrix::new(3);
        for i in 0..3 {
            assert_eq!(dm.get(i, i), DIAGONAL);
        }
        assert_eq!(dm.get(0, 1), 0);
    }

    #[test]
    fn test_from_data_forces_diagonal() {
        let dm = DistanceMatrix::from_data(2, vec![9, 5, 6, 9]).expect("valid");
        assert_eq!(dm.get(0, 0), -1);
        assert_eq!(dm.get(1, 1), -1);
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(1, 0), 6);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0, 1, 2]).is_none());
    }

    #[test]
    fn test_from_rows_not_square() {
        assert!(DistanceMatrix::from_rows(vec![vec![0, 1], vec![2]]).is_none());
    }

    #[test]
    fn test_set_ignores_diagonal() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(1, 1, 42);
        dm.set(0, 1, 42);
        assert_eq!(dm.get(1, 1), DIAGONAL);
        assert_eq!(dm.get(0, 1), 42);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10);
        dm.set(1, 0, 15);
        assert_eq!(dm.get(0, 1), 10);
        assert_eq!(dm.get(1, 0), 15);
        dm.set(1, 0, 10);
        assert_eq!(dm.get(0, 1), 10);
    }

    #[test]
    fn test_display_field_width() {
        let dm = DistanceMatrix::from_rows(vec![vec![0, 12], vec![345, 0]]).expect("square");
        assert_eq!(dm.to_string(), "  -1  12\n 345  -1\n");
    }
}
