//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use railway::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`combine!`]
//! - **Types**: [`Outcome`], [`Errors`], [`Combined`]
//! - **Functions**: [`combine()`], [`sequence`], [`sequence_unit`], [`lift`], [`lift_bind`]
//! - **Traits**: [`Railway`], [`IntoOutcome`], [`Invoke`]
//!
//! # Examples
//!
//! ```
//! use railway::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().into_outcome_or(format!("invalid port {raw:?}"))
//! }
//!
//! let ports = sequence(["80", "http", "443"].map(parse_port));
//! assert_eq!(ports.errors(), ["invalid port \"http\""]);
//! ```

// Brings in the `combine!` macro together with the `combine` function.
pub use crate::combine;
pub use crate::combine::Combined;
pub use crate::lift::{lift, lift_bind, Invoke};
pub use crate::outcome::Outcome;
pub use crate::sequence::{sequence, sequence_unit};
pub use crate::traits::{IntoOutcome, Railway};
pub use crate::types::Errors;
