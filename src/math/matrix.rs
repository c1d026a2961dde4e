use std::ops::Index;

/// Dense row-major matrix of reals.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from equally long rows.
    ///
    /// # Panics
    /// Panics if the rows differ in length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, Vec::len);
        if data.iter().any(|row| row.len() != cols) {
            panic!("Matrix rows are of unequal length")
        }

        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    /// Row-major iterator over every cell.
    pub fn values(&self) -> impl Iterator<Item = &f64> {
        self.data.iter().flatten()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row][col]
    }
}
