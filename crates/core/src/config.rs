//! Configuration for the roster manager.
//!
//! The only tunable is the roster capacity limit, which keeps the bound from
//! the original system but makes it an explicit configuration value instead of
//! a hard-coded array size.

/// Default maximum number of students the roster will hold
pub const DEFAULT_CAPACITY: usize = 100;

/// Resolves the effective roster capacity.
///
/// If a custom capacity is provided, uses that value. Otherwise, uses
/// [`DEFAULT_CAPACITY`].
///
/// # Examples
///
/// ```
/// use roster_core::config::{get_capacity, DEFAULT_CAPACITY};
///
/// assert_eq!(get_capacity(&None), DEFAULT_CAPACITY);
/// assert_eq!(get_capacity(&Some(25)), 25);
/// ```
#[must_use]
pub fn get_capacity(capacity_arg: &Option<usize>) -> usize {
    match capacity_arg {
        Some(capacity) => *capacity,
        None => DEFAULT_CAPACITY,
    }
}
