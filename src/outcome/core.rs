#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either a success or a failure, never both and never neither.
///
/// `Outcome<V, E>` is the unit every combinator in this crate is built from.
/// It mirrors [`Result`] one-to-one and converts to and from it losslessly, but
/// names its variants after what they mean in a traversal: a step that
/// succeeded with a value, or a step that failed with an error.
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` is externally tagged:
/// `{"Success": value}` or `{"Failure": error}`.
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `E` - The error type
///
/// # Variants
///
/// * `Success(V)` - Contains a successful value
/// * `Failure(E)` - Contains an error
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::success(42);
/// assert!(ok.is_success());
///
/// let failed = Outcome::<i32, &str>::failure("boom");
/// assert_eq!(failed.into_failure(), Some("boom"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<V, E> {
    Success(V),
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("missing");
    /// assert_eq!(o, Outcome::Failure("missing"));
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Extracts the value, discarding an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(7).into_success(), Some(7));
    /// assert_eq!(Outcome::<i32, &str>::failure("e").into_success(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error, discarding a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::failure("e").into_failure(), Some("e"));
    /// assert_eq!(Outcome::<i32, &str>::success(7).into_failure(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<V, E>` to `Outcome<&V, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts from `&mut Outcome<V, E>` to `Outcome<&mut V, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut V, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::success(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the error, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, u16>::failure(404).map_failure(|code| format!("HTTP {code}"));
    /// assert_eq!(o, Outcome::Failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<G, F>(self, f: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a step that may itself fail.
    ///
    /// `f` runs only when this outcome is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(half), Outcome::Success(4));
    /// assert_eq!(Outcome::success(3).and_then(half), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recovers from a failure with another step.
    ///
    /// `op` runs only when this outcome is a failure.
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> Outcome<V, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Returns the success value or `default`.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Converts into a [`Result`] so the error can be propagated with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn total() -> Result<i32, &'static str> {
    ///     let sum = Outcome::<i32, &str>::success(40).into_result()?;
    ///     Ok(sum + 2)
    /// }
    ///
    /// assert_eq!(total(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps a [`Result`], `Ok` becoming `Success` and `Err` becoming `Failure`.
    #[inline]
    pub fn from_result(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<V, E> {
        self.and_then(|inner| inner)
    }
}
