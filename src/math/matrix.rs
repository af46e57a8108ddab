use rand::Rng;
use serde::{Serialize, Deserialize};

/// Dense row-major matrix. Rows index the sending layer, columns the
/// receiving layer, so `data[i][j]` is the weight from unit `i` to unit `j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Independent draws from U[-1, 1).
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        res.fill_uniform(rng);
        res
    }

    /// Overwrites every entry with a fresh draw from U[-1, 1).
    pub fn fill_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in &mut self.data {
            for x in row.iter_mut() {
                *x = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }

    pub fn fill_zero(&mut self) {
        for row in &mut self.data {
            row.iter_mut().for_each(|x| *x = 0.0);
        }
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|row| row.iter().all(|&x| x == 0.0))
    }

    /// `self += outer(column, row)`, i.e. `self[i][j] += column[i] * row[j]`.
    pub fn add_outer(&mut self, column: &[f64], row: &[f64]) {
        debug_assert_eq!(column.len(), self.rows);
        debug_assert_eq!(row.len(), self.cols);
        for (dst, &c) in self.data.iter_mut().zip(column) {
            for (x, &r) in dst.iter_mut().zip(row) {
                *x += c * r;
            }
        }
    }

    /// `self -= scale * other`, element-wise.
    ///
    /// # Panics
    /// Panics if the shapes differ.
    pub fn sub_scaled(&mut self, other: &Matrix, scale: f64) {
        if self.rows != other.rows || self.cols != other.cols {
            panic!("Matrices are of incorrect sizes")
        }
        for (dst, src) in self.data.iter_mut().zip(&other.data) {
            for (x, &g) in dst.iter_mut().zip(src) {
                *x -= scale * g;
            }
        }
    }

    /// Row-vector times matrix: `out[j] = sum_i v[i] * self[i][j]`.
    pub fn vec_mul(&self, v: &[f64], out: &mut [f64]) {
        debug_assert_eq!(v.len(), self.rows);
        debug_assert_eq!(out.len(), self.cols);
        out.iter_mut().for_each(|x| *x = 0.0);
        for (row, &vi) in self.data.iter().zip(v) {
            for (o, &w) in out.iter_mut().zip(row) {
                *o += vi * w;
            }
        }
    }

    /// Matrix times column vector: `out[i] = sum_j self[i][j] * v[j]`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.cols);
        self.data.iter()
            .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
            .collect()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
