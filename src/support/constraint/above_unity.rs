use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than one.
///
/// The isentropic and shock relations are only defined for a ratio of
/// specific heats above one, and shock relations only for an upstream Mach
/// number above one.
///
/// # Examples
///
/// ```
/// use twine_inlets::support::constraint::AboveUnity;
///
/// let gamma = AboveUnity::new(1.4).unwrap();
/// assert_eq!(gamma.into_inner(), 1.4);
///
/// assert!(AboveUnity::new(1.0).is_err());
/// assert!(AboveUnity::new(0.5).is_err());
/// assert!(AboveUnity::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveUnity;

impl AboveUnity {
    /// Constructs a [`Constrained<T, AboveUnity>`] if the value exceeds one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is less than or equal to one, or `NaN`.
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> Result<Constrained<T, AboveUnity>, ConstraintError> {
        Constrained::<T, AboveUnity>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for AboveUnity {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal | Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
