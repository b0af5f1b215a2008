//! Failure policies for the non-`try` container operations.
//!
//! Every fallible operation comes in two forms. `try_*` returns the error to
//! the caller. The plain form hands the error to the container's
//! [`FailurePolicy`], chosen once as a type parameter.

use crate::error::{KitVecError, Result};

/// Decides what happens when a plain (non-`try`) operation fails.
pub trait FailurePolicy {
    /// Called with the error before the failed operation returns.
    ///
    /// If this returns, operations without a return value become no-ops.
    /// Operations that have to hand back a reference still panic.
    fn on_failure(error: &KitVecError);
}

/// Panics with the error message. This is the default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanicOnFailure;

impl FailurePolicy for PanicOnFailure {
    fn on_failure(error: &KitVecError) {
        panic!("{error}");
    }
}

/// Logs the error at `warn` level and carries on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreFailure;

impl FailurePolicy for IgnoreFailure {
    fn on_failure(error: &KitVecError) {
        log::warn!("ignoring failed container operation: {error}");
    }
}

pub(crate) fn report<F: FailurePolicy, T>(result: Result<T>) {
    if let Err(error) = result {
        F::on_failure(&error);
    }
}

pub(crate) fn unwrap_or_fail<F: FailurePolicy, T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            F::on_failure(&error);
            panic!("{error}");
        }
    }
}
