/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Cell Errors

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised when building a cell from a value of another type.
///
/// Arithmetic never fails with this error: wraparound is total, and a
/// division by zero panics like native integer division.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    /// The text is not a valid unsigned integer of the cell's width.
    #[error("invalid cell value: {0}")]
    Parse(#[from] ParseIntError),

    /// The value does not fit in the cell's width.
    #[error("value {value} does not fit in {bits} bits")]
    OutOfRange {
        /// The rejected value, in decimal.
        value: String,
        /// The width of the target cell.
        bits: u32,
    },
}
