//! Contains traits for generic math.

use core::{fmt::Display, ops::Add};

/// Numeric is a trait that is implemented for all numeric types.
pub trait Numeric:
    Sized + Default + Copy + PartialOrd + PartialEq + core::fmt::Debug + Display + 'static
{
}

impl Numeric for f32 {}
impl Numeric for f64 {}
impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for u8 {}
impl Numeric for u16 {}
impl Numeric for u32 {}
impl Numeric for u64 {}

/// Implementors of `Number` can be added element-wise on every device.
/// # Example
/// ```
/// use clsum::number::Number;
///
/// fn generic_add<T: Number>(a: T, b: T) -> T {
///     a + b
/// }
///
/// assert_eq!(generic_add(1., 9.), 10.);
/// ```
pub trait Number: Numeric + Add<Self, Output = Self> {}

impl<T: Numeric + Add<T, Output = T>> Number for T {}
