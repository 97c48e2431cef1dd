/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_unsigned_atomic::{
    Cell16,
    Cell32,
    Cell64,
    Cell8,
};
use std::cmp::Ordering;
use std::panic::{
    self,
    AssertUnwindSafe,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 10;
const ITERATIONS_PER_THREAD: usize = 1000;

// 3 * 85 = 255 stays below 2^8, so any lost update is visible.
#[test]
fn test_concurrent_increment_cell8() {
    const THREADS: usize = 3;
    const ITERATIONS: usize = 85;

    let counter = Arc::new(Cell8::new(0));
    let barrier = Arc::new(Barrier::new(THREADS));
    let mut handles = vec![];

    for _ in 0..THREADS {
        let counter = counter.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            for _ in 0..ITERATIONS {
                counter.increment();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.value(), (THREADS * ITERATIONS) as u8);
}

#[test]
fn test_concurrent_increment_cell32() {
    let counter = Arc::new(Cell32::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                counter.increment();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.value(), (NUM_THREADS * ITERATIONS_PER_THREAD) as u32);
}

#[test]
fn test_concurrent_decrement() {
    let counter = Arc::new(Cell64::new(10_000));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                counter.decrement();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.value(), 10_000 - (NUM_THREADS * 100) as u64);
}

// Additions of mixed operand classes commute modulo 2^16, so the final
// value is fixed even though the interleaving is not.
#[test]
fn test_concurrent_mixed_operands() {
    let cell = Arc::new(Cell16::new(0));
    let delta = Arc::new(Cell8::new(3));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let cell = cell.clone();
        let delta = delta.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                match i % 3 {
                    0 => cell.add_assign(70_000u32),
                    1 => cell.add_assign(-5i64),
                    _ => cell.add_assign(&*delta),
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let mut expected: u16 = 0;
    for i in 0..NUM_THREADS {
        let step: u16 = match i % 3 {
            0 => 70_000u32 as u16,
            1 => 0u16.wrapping_sub(5),
            _ => 3,
        };
        expected = expected.wrapping_add(step.wrapping_mul(ITERATIONS_PER_THREAD as u16));
    }
    assert_eq!(cell.value(), expected);
}

#[test]
fn test_concurrent_readers_see_whole_values() {
    // The single writer only moves between 0 and u32::MAX; a torn or
    // partial update would show as any other value.
    let cell = Arc::new(Cell32::new(0));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let cell = cell.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                if i == 0 {
                    cell.sub_assign(1u8);
                    cell.add_assign(1u8);
                } else {
                    let value = cell.value();
                    assert!(value == 0 || value == u32::MAX);
                    assert_ne!(cell.compare(-1i32), Ordering::Less);
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cell.value(), 0);
}

#[test]
fn test_concurrent_cross_cell_operations_do_not_deadlock() {
    let a = Arc::new(Cell32::new(0));
    let b = Arc::new(Cell32::new(0));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let a = a.clone();
        let b = b.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                if i % 2 == 0 {
                    a.add_assign(&*b);
                    a.set(0);
                } else {
                    b.add_assign(&*a);
                    b.set(0);
                }
                let _ = a.compare(&*b);
                let _ = *a == *b;
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_self_addition_is_atomic() {
    // Each doubling runs in one critical section: 64 doublings of 1 in a
    // 64-bit cell end at 0, and every intermediate value is a power of two.
    let cell = Arc::new(Cell64::new(1));
    let mut handles = vec![];

    for _ in 0..4 {
        let cell = cell.clone();
        let handle = thread::spawn(move || {
            for _ in 0..16 {
                cell.add_assign(&*cell);
                let value = cell.value();
                assert!(value == 0 || value.is_power_of_two());
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cell.value(), 0);
}

#[test]
fn test_division_by_zero_does_not_block_other_threads() {
    let cell = Arc::new(Cell16::new(100));

    let panicking = {
        let cell = cell.clone();
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| cell.div_assign(0u16)));
            assert!(result.is_err());
        })
    };
    panicking.join().unwrap();

    let mut handles = vec![];
    for _ in 0..NUM_THREADS {
        let cell = cell.clone();
        handles.push(thread::spawn(move || {
            cell.increment();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cell.value(), 100 + NUM_THREADS as u16);
}
