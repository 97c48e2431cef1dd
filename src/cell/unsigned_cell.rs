/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Unsigned Cell
//!
//! Provides the lock-protected unsigned integer cell shared by all widths.
//!
//! # Author
//!
//! Haixing Hu

use std::cmp::Ordering;
use std::fmt;
use std::hash::{
    Hash,
    Hasher,
};
use std::ops::{
    AddAssign,
    DivAssign,
    MulAssign,
    SubAssign,
};
use std::ptr;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{
    ToPrimitive,
    WrappingAdd,
    WrappingSub,
};
use parking_lot::RwLock;

use super::comparand::Comparand;
use super::error::CellError;
use super::operand::{
    ArithOp,
    Operand,
    Promoted,
};
use super::value::CellValue;

/// A cell holding an 8-bit unsigned integer.
pub type Cell8 = UnsignedCell<u8>;

/// A cell holding a 16-bit unsigned integer.
pub type Cell16 = UnsignedCell<u16>;

/// A cell holding a 32-bit unsigned integer.
pub type Cell32 = UnsignedCell<u32>;

/// A cell holding a 64-bit unsigned integer.
pub type Cell64 = UnsignedCell<u64>;

/// A mutable unsigned integer that can be shared across threads.
///
/// Each cell owns a reader/writer lock that guards its value. Reads take
/// the lock in shared mode, so any number of readers proceed together.
/// Every mutation takes it in exclusive mode for the whole
/// read-modify-write, so no thread can observe a partial update.
///
/// "Atomic" here means indivisible relative to other uses of the same
/// cell, not a hardware compare-and-swap.
///
/// # Cross-cell Operations
///
/// When the operand is another cell, its value is read through its own
/// shared lock *before* this cell's exclusive lock is taken. The two locks
/// are never held at once, so cells cannot deadlock against each other, but
/// the read of the operand and the write of this cell are not one
/// transaction. When the operand is this very cell, the value read under
/// the exclusive lock is used instead, so `a += a` is atomic.
///
/// # Division by Zero
///
/// Division by zero panics like native integer division. The lock does not
/// poison: the cell keeps its previous value and stays usable after the
/// panic is caught.
///
/// # Example
///
/// ```rust
/// use prism3_unsigned_atomic::{Cell8, Cell16};
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(Cell8::new(0));
/// let mut handles = vec![];
///
/// for _ in 0..5 {
///     let counter = counter.clone();
///     handles.push(thread::spawn(move || {
///         for _ in 0..50 {
///             counter.increment();
///         }
///     }));
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(counter.value(), 250);
///
/// counter.add_assign(&Cell16::new(300));
/// assert_eq!(counter.value(), 38);
/// ```
pub struct UnsignedCell<T: CellValue> {
    value: RwLock<T>,
}

impl<T: CellValue> UnsignedCell<T> {
    /// Creates a new cell.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Returns the current value.
    ///
    /// Takes the lock in shared mode.
    #[inline]
    pub fn value(&self) -> T {
        *self.value.read()
    }

    /// Replaces the current value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    #[inline]
    pub fn set(&self, value: T) {
        *self.value.write() = value;
    }

    /// Replaces the current value, returning the old one.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The value before the swap.
    #[inline]
    pub fn swap(&self, value: T) -> T {
        std::mem::replace(&mut *self.value.write(), value)
    }

    /// Consumes the cell, returning its value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    /// Returns a mutable reference to the value.
    ///
    /// No locking is needed since the borrow is exclusive.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    /// Adds one to the value, wrapping from the maximum to `0`.
    ///
    /// # Returns
    ///
    /// This cell, for chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_unsigned_atomic::Cell8;
    ///
    /// let cell = Cell8::new(254);
    /// cell.increment().increment();
    /// assert_eq!(cell.value(), 0);
    /// ```
    #[inline]
    pub fn increment(&self) -> &Self {
        let mut guard = self.value.write();
        *guard = WrappingAdd::wrapping_add(&*guard, &T::one());
        self
    }

    /// Subtracts one from the value, wrapping from `0` to the maximum.
    ///
    /// # Returns
    ///
    /// This cell, for chaining.
    #[inline]
    pub fn decrement(&self) -> &Self {
        let mut guard = self.value.write();
        *guard = WrappingSub::wrapping_sub(&*guard, &T::one());
        self
    }

    /// Adds `operand` to the value.
    ///
    /// Unsigned operands wrap around at 64 bits and signed operands are
    /// combined as 128-bit signed integers; either way only the low `W`
    /// bits of the result are kept.
    ///
    /// # Parameters
    ///
    /// * `operand` - A primitive integer or a reference to any cell.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_unsigned_atomic::Cell8;
    ///
    /// let cell = Cell8::new(10);
    /// cell.add_assign(-20i32);
    /// assert_eq!(cell.value(), 246);
    /// ```
    #[inline]
    pub fn add_assign<O: Operand>(&self, operand: O) {
        self.apply(ArithOp::Add, operand);
    }

    /// Subtracts `operand` from the value.
    ///
    /// Follows the same promotion rules as [`add_assign`](Self::add_assign).
    ///
    /// # Parameters
    ///
    /// * `operand` - A primitive integer or a reference to any cell.
    #[inline]
    pub fn sub_assign<O: Operand>(&self, operand: O) {
        self.apply(ArithOp::Sub, operand);
    }

    /// Multiplies the value by `operand`.
    ///
    /// Follows the same promotion rules as [`add_assign`](Self::add_assign).
    ///
    /// # Parameters
    ///
    /// * `operand` - A primitive integer or a reference to any cell.
    #[inline]
    pub fn mul_assign<O: Operand>(&self, operand: O) {
        self.apply(ArithOp::Mul, operand);
    }

    /// Divides the value by `operand`.
    ///
    /// The quotient is computed at the operand's width (or wider) before it
    /// is truncated, so `200 / 300u16` leaves `0` in an 8-bit cell. Signed
    /// quotients round toward zero.
    ///
    /// # Parameters
    ///
    /// * `operand` - A primitive integer or a reference to any cell.
    ///
    /// # Panics
    ///
    /// Panics if `operand` is zero. The value is left unchanged and the
    /// lock is released.
    #[inline]
    pub fn div_assign<O: Operand>(&self, operand: O) {
        self.apply(ArithOp::Div, operand);
    }

    /// Orders the value against `other`.
    ///
    /// Unsigned operands and cells compare by magnitude. A negative signed
    /// operand is always less than the cell. Arbitrary-precision operands
    /// compare exactly.
    ///
    /// # Parameters
    ///
    /// * `other` - A primitive integer, a reference to any cell, or a
    ///   `BigInt`/`BigUint`.
    ///
    /// # Returns
    ///
    /// The ordering of this cell's value relative to `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_unsigned_atomic::{Cell8, Cell16};
    /// use std::cmp::Ordering;
    ///
    /// let cell = Cell8::new(5);
    /// assert_eq!(cell.compare(-1i64), Ordering::Greater);
    /// assert_eq!(cell.compare(&Cell16::new(5)), Ordering::Equal);
    /// assert!(cell != Cell16::new(5));
    /// ```
    pub fn compare<R: Comparand>(&self, other: R) -> Ordering {
        let resolved = other.resolve_for(self);
        let guard = self.value.read();
        resolved.order(guard.widen())
    }

    /// Returns `true` if `other` is this very cell.
    #[inline]
    pub(crate) fn is_same_cell<U: CellValue>(&self, other: &UnsignedCell<U>) -> bool {
        ptr::eq(
            self as *const Self as *const (),
            other as *const UnsignedCell<U> as *const (),
        )
    }

    fn apply<O: Operand>(&self, op: ArithOp, operand: O) {
        // Resolve before locking: another cell's guard is never held
        // together with ours.
        let promoted = operand.promote_for(self);
        let (old, new) = {
            let mut guard = self.value.write();
            let old = *guard;
            let rhs = promoted.unwrap_or(Promoted::Unsigned(old.widen()));
            if op == ArithOp::Div && rhs.is_zero() {
                tracing::error!(bits = T::BITS, value = %old, "division by zero");
            }
            let new = op.apply(old, rhs);
            *guard = new;
            (old, new)
        };
        tracing::trace!(bits = T::BITS, op = ?op, %old, %new, "compound assignment");
    }
}

impl<T: CellValue, O: Operand> AddAssign<O> for UnsignedCell<T> {
    #[inline]
    fn add_assign(&mut self, operand: O) {
        UnsignedCell::add_assign(&*self, operand);
    }
}

impl<T: CellValue, O: Operand> SubAssign<O> for UnsignedCell<T> {
    #[inline]
    fn sub_assign(&mut self, operand: O) {
        UnsignedCell::sub_assign(&*self, operand);
    }
}

impl<T: CellValue, O: Operand> MulAssign<O> for UnsignedCell<T> {
    #[inline]
    fn mul_assign(&mut self, operand: O) {
        UnsignedCell::mul_assign(&*self, operand);
    }
}

impl<T: CellValue, O: Operand> DivAssign<O> for UnsignedCell<T> {
    #[inline]
    fn div_assign(&mut self, operand: O) {
        UnsignedCell::div_assign(&*self, operand);
    }
}

// Equality is strict about width: a Cell8 holding 5 is never equal to a
// Cell16 holding 5, although `compare` reports them as equal.
impl<T: CellValue, U: CellValue> PartialEq<UnsignedCell<U>> for UnsignedCell<T> {
    fn eq(&self, other: &UnsignedCell<U>) -> bool {
        if T::BITS != U::BITS {
            return false;
        }
        if self.is_same_cell(other) {
            return true;
        }
        let rhs = other.value().widen();
        self.value().widen() == rhs
    }
}

impl<T: CellValue> Eq for UnsignedCell<T> {}

impl<T: CellValue> PartialOrd for UnsignedCell<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: CellValue> Ord for UnsignedCell<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<T: CellValue> Hash for UnsignedCell<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.read().hash(state);
    }
}

impl<T: CellValue> Clone for UnsignedCell<T> {
    /// Creates an independent cell holding a snapshot of this value.
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value())
    }
}

impl<T: CellValue> Default for UnsignedCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: CellValue> From<T> for UnsignedCell<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: CellValue> FromStr for UnsignedCell<T> {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim().parse::<T>()?))
    }
}

impl<T: CellValue> TryFrom<&BigInt> for UnsignedCell<T> {
    type Error = CellError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        value
            .to_u64()
            .filter(|wide| *wide <= T::max_value().widen())
            .map(|wide| Self::new(T::truncate(wide)))
            .ok_or_else(|| CellError::OutOfRange {
                value: value.to_string(),
                bits: T::BITS,
            })
    }
}

impl<T: CellValue> fmt::Debug for UnsignedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(T::NAME).field("value", &self.value()).finish()
    }
}

impl<T: CellValue> fmt::Display for UnsignedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
