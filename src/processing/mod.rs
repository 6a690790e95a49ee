//! Subnet calculation logic.
//!
//! - [`calc`] - deriving subnet fields and counting mask bits

mod calc;

pub use calc::{count_set_bits, derive_subnet};
