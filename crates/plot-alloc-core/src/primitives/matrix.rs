// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use serde::Serialize;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotSquareError {
    rows: usize,
    row: usize,
    len: usize,
}

impl NotSquareError {
    #[inline]
    pub fn new(rows: usize, row: usize, len: usize) -> Self {
        Self { rows, row, len }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn row_len(&self) -> usize {
        self.len
    }
}

impl std::fmt::Display for NotSquareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Matrix with {} rows is not square: row {} has {} columns",
            self.rows, self.row, self.len
        )
    }
}

impl std::error::Error for NotSquareError {}

/// Dense `n x n` matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    #[inline]
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    pub fn from_rows<R>(rows: &[R]) -> Result<Self, NotSquareError>
    where
        R: AsRef<[T]>,
    {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (i, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != size {
                return Err(NotSquareError::new(size, i, r.len()));
            }
            cells.extend_from_slice(r);
        }
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }

    #[inline]
    pub fn fill_row(&mut self, row: usize, value: T) {
        let s = self.size;
        self.cells[row * s..(row + 1) * s].fill(value);
    }

    #[inline]
    pub fn fill_column(&mut self, col: usize, value: T) {
        for r in 0..self.size {
            self[(r, col)] = value;
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

impl<T> SquareMatrix<T> {
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    #[inline]
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks(0) panics, an empty matrix simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    #[inline]
    pub fn iter_cells(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.size, "column {col} out of bounds for size {}", self.size);
        &self.cells[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(col < self.size, "column {col} out of bounds for size {}", self.size);
        &mut self.cells[row * self.size + col]
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.iter_rows() {
            let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_has_size_squared_cells() {
        let m = SquareMatrix::filled(3, 7i64);
        assert_eq!(m.size(), 3);
        assert_eq!(m.iter_cells().count(), 9);
        assert!(m.iter_cells().all(|&c| c == 7));
    }

    #[test]
    fn test_from_rows_roundtrips_layout() {
        let m = SquareMatrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m.row(1), &[3, 4]);
        assert_eq!(m.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = SquareMatrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err.rows(), 2);
        assert_eq!(err.row(), 1);
        assert_eq!(err.row_len(), 1);
    }

    #[test]
    fn test_from_rows_rejects_rectangular_input() {
        let err = SquareMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap_err();
        assert_eq!(err.row(), 0);
    }

    #[test]
    fn test_get_is_bounds_checked() {
        let m = SquareMatrix::filled(2, 0i32);
        assert_eq!(m.get(1, 1), Some(0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_fill_row_and_column() {
        let mut m = SquareMatrix::filled(3, 0i32);
        m.fill_row(1, 5);
        m.fill_column(2, 9);
        assert_eq!(m.row(0), &[0, 0, 9]);
        assert_eq!(m.row(1), &[5, 5, 9]);
        assert_eq!(m.row(2), &[0, 0, 9]);
    }

    #[test]
    fn test_empty_matrix_has_no_rows() {
        let m = SquareMatrix::<i64>::filled(0, 0);
        assert!(m.is_empty());
        assert_eq!(m.iter_rows().count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_index_panics_on_column_overflow() {
        let m = SquareMatrix::filled(2, 0i32);
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_serializes_size_and_cells() {
        let m = SquareMatrix::from_rows(&[vec![1i64, 2], vec![3, 4]]).unwrap();
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["size"], 2);
        assert_eq!(v["cells"], serde_json::json!([1, 2, 3, 4]));
    }

    #[test]
    fn test_display_prints_one_line_per_row() {
        let m = SquareMatrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]\n");
    }
}
