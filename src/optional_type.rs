//! # Optional Type Module
//!
//! The [`Optional`] value type: either a payload of type `T` or nothing.
//!
//! Every combinator consumes `self` and produces a new `Optional`; there is no way
//! to mutate the presence of an existing value. Absence flows through `map`,
//! `flat_map` and `select_many` untouched, and only the two forced accessors
//! ([`Optional::value_or_throw`] and [`Optional::into_value`]) can fail.
//!
//! ## Example
//!
//! ```
//! use optional::Optional;
//!
//! let port = Optional::some("8080")
//!     .map_nullable(|s| s.parse::<u16>().ok())
//!     .value_or(80);
//! assert_eq!(port, 8080);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::OptionalError;

/// Hash fed to the hasher for an absent [`Optional`].
///
/// A present value hashes exactly like its payload, so this only needs to be an
/// unusual number, not a collision-free one.
pub const NONE_HASH: i32 = -124512;

/// Either a value of type `T` or its absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    Some(T),
    None,
}

impl<T> Optional<T> {
    /// Wraps `value` as present.
    pub const fn some(value: T) -> Self {
        Optional::Some(value)
    }

    /// The absent value for any `T`.
    pub const fn none() -> Self {
        Optional::None
    }

    /// Translates a nullable source into the tagged representation.
    ///
    /// This is the only place a null-like input (`Option::None`) becomes absence.
    pub fn from_nullable(source: Option<T>) -> Self {
        match source {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }

    pub const fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Returns `true` if present and the payload equals `value`.
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Optional::Some(inner) => inner == value,
            Optional::None => false,
        }
    }

    /// Narrowing conversion back to `T`.
    ///
    /// Fails with [`OptionalError::Narrowing`] when absent.
    pub fn into_value(self) -> Result<T, OptionalError> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => {
                tracing::debug!("narrowing conversion of an empty optional");
                Err(OptionalError::Narrowing)
            }
        }
    }

    /// Returns the payload, or [`OptionalError::AbsentAccess`] when absent.
    pub fn value_or_throw(self) -> Result<T, OptionalError> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => {
                tracing::debug!("value_or_throw called on an absent optional");
                Err(OptionalError::AbsentAccess)
            }
        }
    }

    /// Returns the payload, or `default` when absent.
    pub fn value_or(self, default: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => default,
        }
    }

    /// Returns the payload, or the result of `factory` when absent.
    ///
    /// `factory` runs at most once, and only on the absent path.
    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Some(value) => value,
            Optional::None => factory(),
        }
    }

    /// Applies `map_some` to a present payload. `map_some` is never called when
    /// absent.
    pub fn map<R, F>(self, map_some: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Optional::Some(value) => Optional::Some(map_some(value)),
            Optional::None => Optional::None,
        }
    }

    /// Like [`Optional::map`], but a `None` result from `map_some` yields absence
    /// instead of a present `Option::None`.
    pub fn map_nullable<R, F>(self, map_some: F) -> Optional<R>
    where
        F: FnOnce(T) -> Option<R>,
    {
        match self {
            Optional::Some(value) => Optional::from_nullable(map_some(value)),
            Optional::None => Optional::None,
        }
    }

    /// Total map: always present. Exactly one of the two functions runs.
    pub fn map_total<R, F, N>(self, map_some: F, map_none: N) -> Optional<R>
    where
        F: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Optional::Some(value) => Optional::Some(map_some(value)),
            Optional::None => Optional::Some(map_none()),
        }
    }

    pub fn flat_map<R, F>(self, map_some: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self {
            Optional::Some(value) => map_some(value),
            Optional::None => Optional::None,
        }
    }

    /// Total flat map. Exactly one of the two functions runs.
    pub fn flat_map_total<R, F, N>(self, map_some: F, map_none: N) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
        N: FnOnce() -> Optional<R>,
    {
        match self {
            Optional::Some(value) => map_some(value),
            Optional::None => map_none(),
        }
    }

    /// Bind-then-combine, the comprehension form of `flat_map`.
    ///
    /// `selector` sees the payload by reference so that `projection` can still take
    /// ownership of both values.
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// let sum = Optional::some(3).select_many(|x| Optional::some(x + 1), |x, y| x + y);
    /// assert_eq!(sum, Optional::some(7));
    /// ```
    pub fn select_many<U, R, S, P>(self, selector: S, projection: P) -> Optional<R>
    where
        S: FnOnce(&T) -> Optional<U>,
        P: FnOnce(T, U) -> R,
    {
        let Optional::Some(value) = self else {
            return Optional::None;
        };
        match selector(&value) {
            Optional::Some(selected) => Optional::Some(projection(value, selected)),
            Optional::None => Optional::None,
        }
    }

    /// Keeps the payload only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Some(value) if predicate(&value) => Optional::Some(value),
            _ => Optional::None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(source: Option<T>) -> Self {
        Optional::from_nullable(source)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

// Equal to a raw `T` only when present with an equal payload.
impl<T: PartialEq> PartialEq<T> for Optional<T> {
    fn eq(&self, other: &T) -> bool {
        self.contains(other)
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Optional::Some(value) => value.hash(state),
            Optional::None => NONE_HASH.hash(state),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(value) => write!(f, "Some({})", value),
            Optional::None => write!(f, "None"),
        }
    }
}
