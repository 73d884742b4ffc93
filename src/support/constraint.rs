//! Type-level numeric constraints checked at construction.
//!
//! Simulation state that crosses a module boundary carries physical
//! invariants the type alone can't express: a surface water depth is never
//! negative, a species threshold is never NaN. This module provides a
//! [`Constrained<T, C>`] wrapper that checks such an invariant once, at
//! construction, so downstream code can rely on it without re-validating.
//!
//! The only marker currently provided is [`NonNegative`] (zero or greater,
//! and a number). Further markers can be added by implementing
//! [`Constraint<T>`] for a zero-sized type.
//!
//! The [`Constraint::check`] entry point is also usable on its own for
//! defensive validation of values that are stored raw, such as cohort heat
//! capacities that upstream modules mutate freely.

mod non_negative;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for a marker type representing a numeric constraint,
/// such as [`NonNegative`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as
/// [`NonNegative`]) or your own [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use uom::si::{f64::Length, length::meter};
/// use verdure_models::support::constraint::{Constrained, NonNegative};
///
/// let depth = Constrained::<_, NonNegative>::new(Length::new::<meter>(0.4)).unwrap();
/// assert_eq!(depth.into_inner(), Length::new::<meter>(0.4));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
