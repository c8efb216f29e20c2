//! Extension-style entry points. Each one is a thin call-through to a
//! constructor on [`Optional`].

use crate::optional_type::Optional;

/// Wraps any value as present.
pub trait OptionalExt: Sized {
    fn as_optional(self) -> Optional<Self>;
}

impl<T> OptionalExt for T {
    fn as_optional(self) -> Optional<T> {
        Optional::some(self)
    }
}

/// Adapts a nullable source (`Option<T>`) into an [`Optional`].
pub trait NullableExt<T> {
    fn into_optional(self) -> Optional<T>;
}

impl<T> NullableExt<T> for Option<T> {
    fn into_optional(self) -> Optional<T> {
        Optional::from_nullable(self)
    }
}

pub trait IterExt: IntoIterator + Sized {
    /// The first element, or absence for an empty sequence. Pulls at most one item.
    fn first_or_none(self) -> Optional<Self::Item> {
        first_or_none(self)
    }
}

impl<I: IntoIterator> IterExt for I {}

pub fn first_or_none<I: IntoIterator>(sequence: I) -> Optional<I::Item> {
    Optional::from_nullable(sequence.into_iter().next())
}
