/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Cell Value Types
//!
//! Defines the sealed set of unsigned integer types a cell may hold.

use std::fmt;
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

use num_traits::{
    PrimInt,
    WrappingAdd,
    WrappingSub,
};

use super::sealed::Sealed;

/// An unsigned integer type that can be stored in an
/// [`UnsignedCell`](super::UnsignedCell).
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only.
pub trait CellValue:
    PrimInt
    + num_traits::Unsigned
    + WrappingAdd
    + WrappingSub
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseIntError>
    + Send
    + Sync
    + 'static
    + Sealed
{
    /// The bit width `W` of the type.
    const BITS: u32;

    /// The name of the cell alias holding this type.
    const NAME: &'static str;

    /// Zero-extends the value to 64 bits.
    fn widen(self) -> u64;

    /// Promotes the value to a signed integer wide enough for every width.
    fn widen_signed(self) -> i128;

    /// Keeps the low `W` bits of `value`.
    fn truncate(value: u64) -> Self;

    /// Reinterprets the low `W` bits of a two's complement `value` as
    /// unsigned.
    fn truncate_signed(value: i128) -> Self;
}

macro_rules! impl_cell_value {
    ($($value_type:ty => $cell_name:ident),* $(,)?) => {
        $(
            impl CellValue for $value_type {
                const BITS: u32 = <$value_type>::BITS;

                const NAME: &'static str = stringify!($cell_name);

                #[inline]
                fn widen(self) -> u64 {
                    u64::from(self)
                }

                #[inline]
                fn widen_signed(self) -> i128 {
                    i128::from(self)
                }

                #[inline]
                fn truncate(value: u64) -> Self {
                    value as $value_type
                }

                #[inline]
                fn truncate_signed(value: i128) -> Self {
                    value as $value_type
                }
            }
        )*
    };
}

impl_cell_value!(
    u8 => Cell8,
    u16 => Cell16,
    u32 => Cell32,
    u64 => Cell64,
);
