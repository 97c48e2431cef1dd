/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Arithmetic Operands
//!
//! Defines the operands accepted by the compound assignments of a cell and
//! the promotion and truncation policy used to combine them with the cell's
//! value.
//!
//! # Author
//!
//! Haixing Hu

use super::unsigned_cell::UnsignedCell;
use super::value::CellValue;

/// An operand after promotion, ready to be combined with a cell's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promoted {
    /// An unsigned operand, zero-extended to 64 bits.
    Unsigned(u64),
    /// A signed operand, sign-extended to 64 bits.
    Signed(i64),
}

impl Promoted {
    /// Returns `true` if the operand is zero.
    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        matches!(self, Promoted::Unsigned(0) | Promoted::Signed(0))
    }
}

/// A value that may be used as the right-hand side of a cell's compound
/// assignment.
///
/// Implemented for every unsigned and signed primitive from 8 to 64 bits
/// and for references to cells of any width. The trait is sealed.
pub trait Operand: Promote {}

impl<O: Promote> Operand for O {}

/// The promotion step behind [`Operand`]. Not reachable outside the crate.
pub trait Promote {
    /// Promotes this operand for an operation on `target`.
    ///
    /// Returns `None` when the operand is `target` itself; the caller then
    /// uses the value it reads under its own exclusive guard.
    fn promote_for<T: CellValue>(&self, target: &UnsignedCell<T>) -> Option<Promoted>;
}

macro_rules! impl_operand {
    ($variant:ident, $wide:ty; $($operand_type:ty),* $(,)?) => {
        $(
            impl Promote for $operand_type {
                #[inline]
                fn promote_for<T: CellValue>(&self, _target: &UnsignedCell<T>) -> Option<Promoted> {
                    Some(Promoted::$variant(<$wide>::from(*self)))
                }
            }
        )*
    };
}

impl_operand!(Unsigned, u64; u8, u16, u32, u64);
impl_operand!(Signed, i64; i8, i16, i32, i64);

impl<U: CellValue> Promote for &UnsignedCell<U> {
    #[inline]
    fn promote_for<T: CellValue>(&self, target: &UnsignedCell<T>) -> Option<Promoted> {
        if target.is_same_cell(*self) {
            None
        } else {
            Some(Promoted::Unsigned(self.value().widen()))
        }
    }
}

/// The four compound assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    /// Combines `current` with `operand` and truncates the result to the
    /// width of `T`.
    ///
    /// # Panics
    ///
    /// Panics on `Div` with a zero operand.
    pub(crate) fn apply<T: CellValue>(self, current: T, operand: Promoted) -> T {
        match operand {
            Promoted::Unsigned(rhs) => {
                let lhs = current.widen();
                T::truncate(match self {
                    ArithOp::Add => lhs.wrapping_add(rhs),
                    ArithOp::Sub => lhs.wrapping_sub(rhs),
                    ArithOp::Mul => lhs.wrapping_mul(rhs),
                    ArithOp::Div => lhs / rhs,
                })
            }
            Promoted::Signed(rhs) => {
                // |lhs| < 2^64 and |rhs| <= 2^63: every result, the product
                // included, fits in i128.
                let lhs = current.widen_signed();
                let rhs = i128::from(rhs);
                T::truncate_signed(match self {
                    ArithOp::Add => lhs + rhs,
                    ArithOp::Sub => lhs - rhs,
                    ArithOp::Mul => lhs * rhs,
                    ArithOp::Div => lhs / rhs,
                })
            }
        }
    }
}
