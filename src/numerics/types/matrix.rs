// src/numerics/types/matrix.rs
// 3x4 matrix storage and its read-only and mutable faces.
//
// Components are named p{row}{col} and laid out column-major:
//
//   p00 p01 p02 p03
//   p10 p11 p12 p13
//   p20 p21 p22 p23

use serde::{Deserialize, Serialize};

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::Vector3;

pub const ROWS: usize = 3;
pub const COLUMNS: usize = 4;
pub const COMPONENTS: usize = ROWS * COLUMNS;

/// Raw component storage shared by [`ConstMatrix3x4`] and [`Matrix3x4`].
///
/// Field order is the serialized order, so it must stay column-major.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProtectedMatrix3x4<T: FloatingPoint = f32> {
    pub(crate) p00: T, pub(crate) p10: T, pub(crate) p20: T,
    pub(crate) p01: T, pub(crate) p11: T, pub(crate) p21: T,
    pub(crate) p02: T, pub(crate) p12: T, pub(crate) p22: T,
    pub(crate) p03: T, pub(crate) p13: T, pub(crate) p23: T,
}

impl<T: FloatingPoint> ProtectedMatrix3x4<T> {
    pub(crate) fn from_column_major(c: [T; COMPONENTS]) -> Self {
        Self {
            p00: c[0], p10: c[1], p20: c[2],
            p01: c[3], p11: c[4], p21: c[5],
            p02: c[6], p12: c[7], p22: c[8],
            p03: c[9], p13: c[10], p23: c[11],
        }
    }

    pub(crate) fn to_column_major(&self) -> [T; COMPONENTS] {
        [
            self.p00, self.p10, self.p20,
            self.p01, self.p11, self.p21,
            self.p02, self.p12, self.p22,
            self.p03, self.p13, self.p23,
        ]
    }

    pub(crate) fn from_rows(r0: [T; COLUMNS], r1: [T; COLUMNS], r2: [T; COLUMNS]) -> Self {
        Self {
            p00: r0[0], p10: r1[0], p20: r2[0],
            p01: r0[1], p11: r1[1], p21: r2[1],
            p02: r0[2], p12: r1[2], p22: r2[2],
            p03: r0[3], p13: r1[3], p23: r2[3],
        }
    }

    pub(crate) fn from_columns(c0: [T; ROWS], c1: [T; ROWS], c2: [T; ROWS], c3: [T; ROWS]) -> Self {
        Self {
            p00: c0[0], p10: c0[1], p20: c0[2],
            p01: c1[0], p11: c1[1], p21: c1[2],
            p02: c2[0], p12: c2[1], p22: c2[2],
            p03: c3[0], p13: c3[1], p23: c3[2],
        }
    }

    pub(crate) fn filled(value: T) -> Self {
        Self::from_column_major([value; COMPONENTS])
    }

    /// Ones on the leading diagonal, zero translation column.
    pub(crate) fn identity() -> Self {
        let mut m = Self::filled(T::zero());
        m.p00 = T::one();
        m.p11 = T::one();
        m.p22 = T::one();
        m
    }

    pub(crate) fn component_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let component = match (row, col) {
            (0, 0) => &mut self.p00,
            (1, 0) => &mut self.p10,
            (2, 0) => &mut self.p20,
            (0, 1) => &mut self.p01,
            (1, 1) => &mut self.p11,
            (2, 1) => &mut self.p21,
            (0, 2) => &mut self.p02,
            (1, 2) => &mut self.p12,
            (2, 2) => &mut self.p22,
            (0, 3) => &mut self.p03,
            (1, 3) => &mut self.p13,
            (2, 3) => &mut self.p23,
            _ => return Err(MatrixError::IndexOutOfBounds { row, col }),
        };
        Ok(component)
    }
}

fn check_bounds(row: usize, col: usize) -> Result<()> {
    if row >= ROWS || col >= COLUMNS {
        return Err(MatrixError::IndexOutOfBounds { row, col });
    }
    Ok(())
}

fn column_major_from_slice<T: FloatingPoint>(values: &[T]) -> Result<[T; COMPONENTS]> {
    <[T; COMPONENTS]>::try_from(values).map_err(|_| MatrixError::SliceLength {
        expected: COMPONENTS,
        actual: values.len(),
    })
}

/// Read access shared by every 3x4 matrix face.
///
/// Implementors only provide the column-major components; every other
/// accessor is derived from them.
pub trait AnyMatrix3x4<T: FloatingPoint> {
    /// Components in column-major order (p00, p10, p20, p01, ...).
    fn to_column_major(&self) -> [T; COMPONENTS];

    /// Component at `row` (0..3) and `col` (0..4).
    fn get(&self, row: usize, col: usize) -> Result<T> {
        check_bounds(row, col)?;
        Ok(self.to_column_major()[col * ROWS + row])
    }

    /// Get a row by index
    fn row(&self, idx: usize) -> Result<[T; COLUMNS]> {
        check_bounds(idx, 0)?;
        let c = self.to_column_major();
        Ok([c[idx], c[ROWS + idx], c[2 * ROWS + idx], c[3 * ROWS + idx]])
    }

    /// Get a column by index
    fn column(&self, idx: usize) -> Result<Vector3<T>> {
        check_bounds(0, idx)?;
        let c = self.to_column_major();
        let base = idx * ROWS;
        Ok(Vector3::new(c[base], c[base + 1], c[base + 2]))
    }

    fn to_rows(&self) -> [[T; COLUMNS]; ROWS] {
        let c = self.to_column_major();
        core::array::from_fn(|r| core::array::from_fn(|col| c[col * ROWS + r]))
    }
}

/// Read-only 3x4 matrix.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstMatrix3x4<T: FloatingPoint = f32> {
    storage: ProtectedMatrix3x4<T>,
}

/// Mutable 3x4 matrix.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix3x4<T: FloatingPoint = f32> {
    storage: ProtectedMatrix3x4<T>,
}

pub type ConstMatrix3x4f = ConstMatrix3x4<f32>;
pub type Matrix3x4f = Matrix3x4<f32>;
pub type ConstMatrix3x4d = ConstMatrix3x4<f64>;
pub type Matrix3x4d = Matrix3x4<f64>;

impl<T: FloatingPoint> ConstMatrix3x4<T> {
    /// Construct a new matrix from 3 rows
    pub fn new(r0: [T; COLUMNS], r1: [T; COLUMNS], r2: [T; COLUMNS]) -> Self {
        Self { storage: ProtectedMatrix3x4::from_rows(r0, r1, r2) }
    }

    /// Construct a new matrix from 4 columns
    pub fn from_columns(c0: [T; ROWS], c1: [T; ROWS], c2: [T; ROWS], c3: [T; ROWS]) -> Self {
        Self { storage: ProtectedMatrix3x4::from_columns(c0, c1, c2, c3) }
    }

    pub fn from_column_major(components: [T; COMPONENTS]) -> Self {
        Self { storage: ProtectedMatrix3x4::from_column_major(components) }
    }

    /// Column-major slice of exactly 12 components.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        column_major_from_slice(values).map(Self::from_column_major)
    }

    pub fn zero() -> Self {
        Self { storage: ProtectedMatrix3x4::filled(T::zero()) }
    }

    pub fn identity() -> Self {
        Self { storage: ProtectedMatrix3x4::identity() }
    }
}

impl<T: FloatingPoint> Matrix3x4<T> {
    /// Construct a new matrix from 3 rows
    pub fn new(r0: [T; COLUMNS], r1: [T; COLUMNS], r2: [T; COLUMNS]) -> Self {
        Self { storage: ProtectedMatrix3x4::from_rows(r0, r1, r2) }
    }

    /// Construct a new matrix from 4 columns
    pub fn from_columns(c0: [T; ROWS], c1: [T; ROWS], c2: [T; ROWS], c3: [T; ROWS]) -> Self {
        Self { storage: ProtectedMatrix3x4::from_columns(c0, c1, c2, c3) }
    }

    pub fn from_column_major(components: [T; COMPONENTS]) -> Self {
        Self { storage: ProtectedMatrix3x4::from_column_major(components) }
    }

    /// Column-major slice of exactly 12 components.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        column_major_from_slice(values).map(Self::from_column_major)
    }

    pub fn zero() -> Self {
        Self { storage: ProtectedMatrix3x4::filled(T::zero()) }
    }

    pub fn identity() -> Self {
        Self { storage: ProtectedMatrix3x4::identity() }
    }

    pub(crate) fn from_storage(storage: ProtectedMatrix3x4<T>) -> Self {
        Self { storage }
    }

    /// Overwrite a single component.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.storage.component_mut(row, col)? = value;
        Ok(())
    }

    pub fn set_row(&mut self, idx: usize, values: [T; COLUMNS]) -> Result<()> {
        check_bounds(idx, 0)?;
        for (col, value) in values.into_iter().enumerate() {
            self.set(idx, col, value)?;
        }
        Ok(())
    }

    pub fn set_column(&mut self, idx: usize, values: Vector3<T>) -> Result<()> {
        check_bounds(0, idx)?;
        for (row, value) in values.to_array().into_iter().enumerate() {
            self.set(row, idx, value)?;
        }
        Ok(())
    }

    /// Swap two columns in place
    pub fn swap_columns(&mut self, a: usize, b: usize) -> Result<()> {
        let ca = self.column(a)?;
        let cb = self.column(b)?;
        self.set_column(a, cb)?;
        self.set_column(b, ca)
    }

    /// Set every component to `value`
    pub fn fill(&mut self, value: T) {
        self.storage = ProtectedMatrix3x4::filled(value);
    }
}

impl<T: FloatingPoint> AnyMatrix3x4<T> for ConstMatrix3x4<T> {
    fn to_column_major(&self) -> [T; COMPONENTS] {
        self.storage.to_column_major()
    }
}

impl<T: FloatingPoint> AnyMatrix3x4<T> for Matrix3x4<T> {
    fn to_column_major(&self) -> [T; COMPONENTS] {
        self.storage.to_column_major()
    }
}

impl<T: FloatingPoint> Default for ConstMatrix3x4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatingPoint> Default for Matrix3x4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatingPoint> From<Matrix3x4<T>> for ConstMatrix3x4<T> {
    fn from(m: Matrix3x4<T>) -> Self {
        Self { storage: m.storage }
    }
}

impl<T: FloatingPoint> From<ConstMatrix3x4<T>> for Matrix3x4<T> {
    fn from(m: ConstMatrix3x4<T>) -> Self {
        Self { storage: m.storage }
    }
}

impl<T: FloatingPoint> From<[T; COMPONENTS]> for ConstMatrix3x4<T> {
    fn from(components: [T; COMPONENTS]) -> Self {
        Self::from_column_major(components)
    }
}

impl<T: FloatingPoint> From<[T; COMPONENTS]> for Matrix3x4<T> {
    fn from(components: [T; COMPONENTS]) -> Self {
        Self::from_column_major(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix3x4f {
        Matrix3x4::new(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
        )
    }

    #[test]
    fn test_storage_is_column_major() {
        let m = sample();
        assert_eq!(
            m.to_column_major(),
            [1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0]
        );
        assert_eq!(m.storage.p00, 1.0);
        assert_eq!(m.storage.p10, 5.0);
        assert_eq!(m.storage.p23, 12.0);
    }

    #[test]
    fn test_constructors_agree() {
        let by_rows = sample();
        let by_columns = Matrix3x4::from_columns(
            [1.0, 5.0, 9.0],
            [2.0, 6.0, 10.0],
            [3.0, 7.0, 11.0],
            [4.0, 8.0, 12.0],
        );
        let by_slice = Matrix3x4::from_slice(&by_rows.to_column_major()).unwrap();

        assert_eq!(by_rows, by_columns);
        assert_eq!(by_rows, by_slice);
        assert_eq!(by_rows.to_rows()[1], [5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_accessors() {
        let m = sample();
        assert_eq!(m.get(1, 2), Ok(7.0));
        assert_eq!(m.row(2), Ok([9.0, 10.0, 11.0, 12.0]));
        assert_eq!(m.column(3), Ok(Vector3::new(4.0, 8.0, 12.0)));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let m = sample();
        assert_eq!(m.get(3, 0), Err(MatrixError::IndexOutOfBounds { row: 3, col: 0 }));
        assert_eq!(m.get(0, 4), Err(MatrixError::IndexOutOfBounds { row: 0, col: 4 }));
        assert!(m.row(3).is_err());
        assert!(m.column(4).is_err());
    }

    #[test]
    fn test_slice_length_is_checked() {
        let err = ConstMatrix3x4::<f32>::from_slice(&[0.0; 11]).unwrap_err();
        assert_eq!(err, MatrixError::SliceLength { expected: 12, actual: 11 });

        assert!(Matrix3x4::<f64>::from_slice(&[0.0; 13]).is_err());
    }

    #[test]
    fn test_zero_and_identity() {
        let z = ConstMatrix3x4::<f32>::zero();
        assert_eq!(z.to_column_major(), [0.0; 12]);

        let id = ConstMatrix3x4::<f64>::identity();
        assert_eq!(
            id.to_rows(),
            [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]]
        );
        assert_eq!(ConstMatrix3x4::<f64>::default(), id);
        assert_eq!(Matrix3x4d::default().to_rows(), id.to_rows());
    }

    #[test]
    fn test_mutation() {
        let mut m = Matrix3x4f::zero();
        m.set(2, 3, 5.0).unwrap();
        assert_eq!(m.storage.p23, 5.0);

        m.set_row(0, [1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.row(0), Ok([1.0, 2.0, 3.0, 4.0]));

        m.set_column(1, Vector3::new(7.0, 8.0, 9.0)).unwrap();
        assert_eq!(m.column(1), Ok(Vector3::new(7.0, 8.0, 9.0)));

        assert!(m.set(3, 0, 1.0).is_err());
        assert!(m.set_row(3, [0.0; 4]).is_err());
        assert!(m.set_column(4, Vector3::new(0.0, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_swap_columns_and_fill() {
        let mut m = sample();
        m.swap_columns(0, 3).unwrap();
        assert_eq!(m.row(0), Ok([4.0, 2.0, 3.0, 1.0]));
        assert_eq!(m.column(0), Ok(Vector3::new(4.0, 8.0, 12.0)));

        assert!(m.swap_columns(0, 4).is_err());
        assert_eq!(m.row(0), Ok([4.0, 2.0, 3.0, 1.0]));

        m.fill(2.5);
        assert_eq!(m.to_column_major(), [2.5; 12]);
    }

    #[test]
    fn test_faces_convert_without_loss() {
        let m = sample();
        let frozen: ConstMatrix3x4f = m.into();
        assert_eq!(frozen.to_column_major(), m.to_column_major());

        let mut thawed: Matrix3x4f = frozen.into();
        thawed.set(0, 0, -1.0).unwrap();
        assert_eq!(frozen.get(0, 0), Ok(1.0));
        assert_eq!(thawed.get(0, 0), Ok(-1.0));
    }

    #[test]
    fn test_non_finite_components_are_kept() {
        let mut m = Matrix3x4f::identity();
        m.set(1, 1, f32::INFINITY).unwrap();
        m.set(0, 3, f32::NAN).unwrap();
        assert_eq!(m.get(1, 1), Ok(f32::INFINITY));
        assert!(m.get(0, 3).unwrap().is_nan());
    }

    #[test]
    fn test_json_uses_component_names() {
        let m = ConstMatrix3x4f::identity();
        let value = serde_json::to_value(m).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 12);
        assert_eq!(value["p00"], 1.0);
        assert_eq!(value["p03"], 0.0);

        let back: ConstMatrix3x4f = serde_json::from_value(value).unwrap();
        assert_eq!(back, m);
    }
}
