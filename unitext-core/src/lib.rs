//! unitext Core - Fundamental types
//!
//! This crate provides the types shared by the unit catalog, the engine and
//! the binaries:
//! - `Error`: the conversion error taxonomy
//! - `Measurement`: the final value of a conversion

mod error;
mod measurement;

pub use error::{Error, Result, codes};
pub use measurement::Measurement;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Error, Result, Measurement};
    pub use crate::error::codes;
}
