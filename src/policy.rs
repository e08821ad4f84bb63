use crate::error::{Error, Failure};
use crate::number::Number;
use crate::options::{OnInvalid, Options};

/// Turns a [`Failure`] into either an error or a substituted default value.
///
/// A `Policy` is chosen once per call from the [`Options`] and then applied to
/// whatever failure the call produces. It is pure and never retries.
///
/// # Example
///
/// ```
/// use fastnumbers::{Number, Options, Policy};
///
/// let policy = Policy::new(&Options::returning(Number::Float(0.5)));
/// assert_eq!(policy, Policy::ReturnDefault(Number::Float(0.5)));
///
/// let policy = Policy::new(&Options::new());
/// assert_eq!(policy, Policy::Raise);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Policy {
    /// Propagate the failure as an error.
    Raise,
    /// Substitute the value, raising nothing.
    ReturnDefault(Number),
}

impl Policy {
    /// Select the policy configured by `options`.
    pub const fn new(options: &Options) -> Self {
        match options.on_invalid() {
            OnInvalid::Raise => Self::Raise,
            OnInvalid::ReturnDefault => Self::ReturnDefault(options.default_value()),
        }
    }

    /// Resolve a failure.
    ///
    /// # Errors
    ///
    /// Returns the failure as `E` if the policy is [`Policy::Raise`].
    #[inline]
    pub fn resolve<'i, E>(self, failure: Failure<'i>) -> Result<Number, E>
    where
        E: Error<'i>,
    {
        match self {
            Self::Raise => Err(E::from(failure)),
            Self::ReturnDefault(value) => Ok(value),
        }
    }
}

/// Resolve a failure with the policy configured by `options`.
///
/// # Errors
///
/// Returns the failure as `E` if `options` select [`OnInvalid::Raise`].
pub fn resolve<'i, E>(failure: Failure<'i>, options: &Options) -> Result<Number, E>
where
    E: Error<'i>,
{
    Policy::new(options).resolve(failure)
}
