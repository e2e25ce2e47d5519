//! Delta (difference) coding for integer arrays.
//!
//! [`forward`] replaces every element with its difference from the previous
//! element, the first element being diffed against `initial`. [`inverse`]
//! rebuilds the values as a running sum starting from `initial`.
//!
//! All arithmetic wraps modulo 2^32, so `inverse(forward(a, k), k)` restores
//! `a` bit for bit even when a difference overflows the `i32` range.
//!
//! # Example
//!
//! ```
//! use oxipack_core::delta;
//!
//! let mut values = [1, 2, 3, 4, 5];
//! delta::forward(&mut values, 0);
//! assert_eq!(values, [1, 1, 1, 1, 1]);
//! delta::inverse(&mut values, 0);
//! assert_eq!(values, [1, 2, 3, 4, 5]);
//! ```

use crate::error::{PackError, Result};

/// Delta-encode `data` in place.
pub fn forward(data: &mut [i32], initial: i32) {
    let mut previous = initial;
    for value in data.iter_mut() {
        let current = *value;
        *value = current.wrapping_sub(previous);
        previous = current;
    }
}

/// Delta-encode `src` into `dst`, leaving `src` untouched.
///
/// Only the first `src.len()` slots of `dst` are written.
pub fn forward_to(src: &[i32], dst: &mut [i32], initial: i32) -> Result<()> {
    if dst.len() < src.len() {
        return Err(PackError::buffer_too_small(src.len(), dst.len()));
    }

    let mut previous = initial;
    for (out, &current) in dst.iter_mut().zip(src) {
        *out = current.wrapping_sub(previous);
        previous = current;
    }
    Ok(())
}

/// Undo [`forward`] in place.
pub fn inverse(data: &mut [i32], initial: i32) {
    let mut running = initial;
    for value in data.iter_mut() {
        running = running.wrapping_add(*value);
        *value = running;
    }
}

/// Undo [`forward`] from `src` into `dst`.
pub fn inverse_to(src: &[i32], dst: &mut [i32], initial: i32) -> Result<()> {
    if dst.len() < src.len() {
        return Err(PackError::buffer_too_small(src.len(), dst.len()));
    }

    let mut running = initial;
    for (out, &diff) in dst.iter_mut().zip(src) {
        running = running.wrapping_add(diff);
        *out = running;
    }
    Ok(())
}
