/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Comparison Operands
//!
//! Defines the values a cell can be ordered against: primitives of either
//! signedness, cells of any width, and arbitrary-precision integers.

use std::cmp::Ordering;

use num_bigint::{
    BigInt,
    BigUint,
};

use super::unsigned_cell::UnsignedCell;
use super::value::CellValue;

/// A comparison operand resolved before the cell's shared lock is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// An unsigned primitive or another cell's value.
    Unsigned(u64),
    /// A signed primitive.
    Signed(i64),
    /// A signed arbitrary-precision integer.
    Big(&'a BigInt),
    /// An unsigned arbitrary-precision integer.
    BigUnsigned(&'a BigUint),
    /// The cell being compared.
    Aliased,
}

impl Resolved<'_> {
    /// Orders an unsigned `value` relative to this operand.
    ///
    /// A negative operand is always less than `value`.
    pub(crate) fn order(&self, value: u64) -> Ordering {
        match *self {
            Resolved::Unsigned(rhs) => value.cmp(&rhs),
            Resolved::Signed(rhs) => {
                u64::try_from(rhs).map_or(Ordering::Greater, |rhs| value.cmp(&rhs))
            }
            Resolved::Big(rhs) => BigInt::from(value).cmp(rhs),
            Resolved::BigUnsigned(rhs) => BigUint::from(value).cmp(rhs),
            Resolved::Aliased => Ordering::Equal,
        }
    }
}

/// A value a cell can be ordered against with
/// [`UnsignedCell::compare`].
///
/// The trait is sealed.
pub trait Comparand: Resolve {}

impl<R: Resolve> Comparand for R {}

/// The resolution step behind [`Comparand`]. Not reachable outside the
/// crate.
pub trait Resolve {
    /// Resolves this operand for a comparison with `target`.
    fn resolve_for<T: CellValue>(&self, target: &UnsignedCell<T>) -> Resolved<'_>;
}

macro_rules! impl_comparand {
    ($variant:ident, $wide:ty; $($operand_type:ty),* $(,)?) => {
        $(
            impl Resolve for $operand_type {
                #[inline]
                fn resolve_for<T: CellValue>(&self, _target: &UnsignedCell<T>) -> Resolved<'_> {
                    Resolved::$variant(<$wide>::from(*self))
                }
            }
        )*
    };
}

impl_comparand!(Unsigned, u64; u8, u16, u32, u64);
impl_comparand!(Signed, i64; i8, i16, i32, i64);

impl<U: CellValue> Resolve for &UnsignedCell<U> {
    #[inline]
    fn resolve_for<T: CellValue>(&self, target: &UnsignedCell<T>) -> Resolved<'_> {
        if target.is_same_cell(*self) {
            Resolved::Aliased
        } else {
            Resolved::Unsigned(self.value().widen())
        }
    }
}

impl Resolve for BigInt {
    #[inline]
    fn resolve_for<T: CellValue>(&self, _target: &UnsignedCell<T>) -> Resolved<'_> {
        Resolved::Big(self)
    }
}

impl Resolve for &BigInt {
    #[inline]
    fn resolve_for<T: CellValue>(&self, _target: &UnsignedCell<T>) -> Resolved<'_> {
        Resolved::Big(self)
    }
}

impl Resolve for BigUint {
    #[inline]
    fn resolve_for<T: CellValue>(&self, _target: &UnsignedCell<T>) -> Resolved<'_> {
        Resolved::BigUnsigned(self)
    }
}

impl Resolve for &BigUint {
    #[inline]
    fn resolve_for<T: CellValue>(&self, _target: &UnsignedCell<T>) -> Resolved<'_> {
        Resolved::BigUnsigned(self)
    }
}
