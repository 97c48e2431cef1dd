/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-unsigned-atomic
//!
//! Lock-protected unsigned integer cells with exact cross-width arithmetic
//! and comparison.
//!
//! Each cell wraps an 8-, 16-, 32- or 64-bit unsigned value behind its own
//! reader/writer lock and can be shared freely between threads. Compound
//! assignments accept operands of any width and signedness and always
//! store the result reduced modulo `2^W`.
//!
//! ## Design Goals
//!
//! - **Exactness**: Every operand class has one total promotion and
//!   truncation rule, so mixing widths and signedness never silently
//!   corrupts a value or an ordering
//! - **Safety**: Read-modify-write sequences run under a single exclusive
//!   lock; no two cell locks are ever held at once
//! - **Ease of Use**: One generic type with `Cell8`..`Cell64` aliases and
//!   named methods for every operation
//!
//! ## Features
//!
//! - Cell types: `Cell8`, `Cell16`, `Cell32`, `Cell64`
//! - Operands: `u8`..`u64`, `i8`..`i64`, and any cell
//! - Comparisons: everything above plus `BigInt` and `BigUint`
//! - Optional `serde` support
//!
//! ## Example
//!
//! ```rust
//! use prism3_unsigned_atomic::{Cell8, Cell64};
//! use num_bigint::BigInt;
//! use std::cmp::Ordering;
//!
//! let cell = Cell8::new(u8::MAX);
//! cell.increment();
//! assert_eq!(cell.value(), 0);
//!
//! cell.sub_assign(300i16);
//! assert_eq!(cell.value(), 212);
//!
//! let big = Cell64::new(u64::MAX);
//! assert_eq!(big.compare(-1i64), Ordering::Greater);
//! assert_eq!(big.compare(BigInt::from(u64::MAX) + 1), Ordering::Less);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod cell;

// Re-export all cell types and traits
pub use cell::{
    Cell16,
    Cell32,
    Cell64,
    Cell8,
    CellError,
    CellValue,
    Comparand,
    Operand,
    UnsignedCell,
};
