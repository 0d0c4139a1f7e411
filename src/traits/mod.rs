//! Capability traits shared across outcome shapes.

pub mod into_outcome;
pub mod railway;

pub use self::into_outcome::IntoOutcome;
pub use self::railway::Railway;
