//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use cubeta::prelude::*;
//! ```

pub use crate::array::FeatureArray;
pub use crate::encoder::{HashingConfig, HashingEncoder, Salt};
pub use crate::error::{CubetaError, Result};
pub use crate::token::Token;
