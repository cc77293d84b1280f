// src/numerics/types/traits.rs
// Scalar marker trait shared by the matrix and vector types.

/// FloatingPoint is the component type of every numerics type in this crate.
///
/// Only `f32` and `f64` implement it.
pub trait FloatingPoint:
    Copy + PartialEq + core::fmt::Debug + Default + sealed::Sealed
{
    fn zero() -> Self;
    fn one() -> Self;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}
