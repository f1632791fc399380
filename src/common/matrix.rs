use std::ops::{Index, IndexMut};

/// Dense square matrix stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    size: usize,
}

impl<T: Clone> Matrix<T> {
    /// Creates a `size` x `size` matrix filled with `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }
}

impl<T> Matrix<T> {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.data.get(index(row, col, self.size))
        } else {
            None
        }
    }

    /// Iterates over all cells as `((row, col), value)` row by row.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (coords(i, self.size), value))
    }

    /// Iterates over the values on the main diagonal.
    pub fn diagonal(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.size).map(move |i| &self.data[index(i, i, self.size)])
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[index(row, col, self.size)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[index(row, col, self.size)]
    }
}

pub fn index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

pub fn coords(index: usize, size: usize) -> (usize, usize) {
    let col = index % size;
    let row = index / size;
    (row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_coords_inverse() {
        let size = 7;

        for i in 0..size * size {
            let (row, col) = coords(i, size);
            assert_eq!(index(row, col, size), i);
        }
    }

    #[test]
    fn get_out_of_bounds() {
        let matrix = Matrix::filled(3, 0u8);

        assert_eq!(matrix.get(2, 2), Some(&0));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.get(0, 3), None);
    }

    #[test]
    fn diagonal() {
        let mut matrix = Matrix::filled(3, 0);
        matrix[(0, 0)] = 1;
        matrix[(1, 1)] = 2;
        matrix[(2, 2)] = 3;
        matrix[(0, 2)] = 9;

        assert_eq!(matrix.diagonal().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
