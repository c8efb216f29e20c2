mod optional_type;
pub mod absent;
pub mod error;
pub mod ext;
#[cfg(feature = "serde")]
pub mod serialization;
#[cfg(feature = "serde")]
pub mod json;
#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
mod property_tests;

pub use optional_type::*;
pub use absent::*;
pub use error::*;
pub use ext::*;
