//! Domain models for the subnet calculator.
//!
//! - `ipv4` helpers: dotted-quad parsing and octet-wise arithmetic
//! - [`SubnetInfo`] - the derived subnet record

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    big_endian_value, host_order_bytes, host_order_value, octet_and, octet_decrement,
    octet_increment, octet_not, octet_or, parse_dotted_quad,
};
pub use subnet::SubnetInfo;
