//! Free constructors and the [`Absent`] tag.

use crate::optional_type::Optional;

/// A type-parameter-free "no value".
///
/// Converts into `Optional<T>` for any `T` at the construction site, so a single
/// `absent()` can be returned from functions with different element types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absent;

impl<T> From<Absent> for Optional<T> {
    fn from(_: Absent) -> Self {
        Optional::None
    }
}

pub fn absent() -> Absent {
    Absent
}

pub fn some<T>(value: T) -> Optional<T> {
    Optional::some(value)
}

pub fn none<T>() -> Optional<T> {
    Optional::none()
}

pub fn from_nullable<T>(source: Option<T>) -> Optional<T> {
    Optional::from_nullable(source)
}
