/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Unsigned Cells
//!
//! Provides lock-protected unsigned integer cells of 8, 16, 32 and 64 bits.
//! Every cell owns a reader/writer lock: reads (value access, comparison,
//! equality, hashing) take the shared mode, mutations take the exclusive
//! mode for the whole read-modify-write sequence.
//!
//! Operands of any width and signedness are accepted by the compound
//! assignments and comparisons. The promotion rules are:
//!
//! | operand            | computed as                     | stored as            |
//! |--------------------|---------------------------------|----------------------|
//! | unsigned, any width | 64-bit wraparound arithmetic   | low `W` bits         |
//! | signed, any width   | 128-bit signed arithmetic      | low `W` bits         |
//! | another cell        | its value, read under its lock | as an unsigned operand |
//!
//! # Author
//!
//! Haixing Hu

mod comparand;
mod error;
mod operand;
#[cfg(feature = "serde")]
mod serde_support;
mod unsigned_cell;
mod value;

pub use comparand::Comparand;
pub use error::CellError;
pub use operand::Operand;
pub use unsigned_cell::{
    Cell16,
    Cell32,
    Cell64,
    Cell8,
    UnsignedCell,
};
pub use value::CellValue;

/// Closes the value trait to this crate. `Operand` and `Comparand` are
/// closed by their unnameable supertraits.
mod sealed {
    pub trait Sealed {}

    macro_rules! seal {
        ($($t:ty),* $(,)?) => {
            $(impl Sealed for $t {})*
        };
    }

    seal!(u8, u16, u32, u64);
}
