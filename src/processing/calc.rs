//! Subnet arithmetic.
//!
//! Derives every [`SubnetInfo`] field from an address and a mask. Increments
//! and decrements run on the ordered octets (see [`crate::models`]), so e.g.
//! `192.168.10.0 + 1` is `192.168.10.1` on every host, never `193.168.10.0`.

use crate::models::{
    big_endian_value, octet_and, octet_decrement, octet_increment, octet_not, octet_or,
    SubnetInfo,
};
use std::net::Ipv4Addr;

/// Compute network id, wildcard, broadcast, host range, host count and prefix length.
///
/// The mask is not validated. A non-contiguous mask gives well-defined but
/// meaningless values.
///
/// # Examples
/// ```
/// use calciprog::processing::derive_subnet;
/// use std::net::Ipv4Addr;
/// let info = derive_subnet(Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(255, 255, 255, 252));
/// assert_eq!(info.network(), "10.0.0.0/30");
/// assert_eq!(info.host_count, 2);
/// ```
pub fn derive_subnet(address: Ipv4Addr, mask: Ipv4Addr) -> SubnetInfo {
    let network_id = octet_and(address, mask);
    let wildcard = octet_not(mask);
    let broadcast = octet_or(network_id, wildcard);
    let host_min = octet_increment(network_id);
    let host_max = octet_decrement(broadcast);
    // /32 has wildcard 0 -> no usable hosts instead of wrapping to u32::MAX
    let host_count = big_endian_value(wildcard).saturating_sub(1);
    let cidr = count_set_bits(mask);

    log::debug!(
        "derive_subnet({address}, {mask}) -> {network_id}/{cidr} hosts={host_count}"
    );

    SubnetInfo {
        address,
        mask,
        network_id,
        wildcard,
        broadcast,
        host_min,
        host_max,
        host_count,
        cidr,
    }
}

/// Count the 1-bits of a mask, giving its CIDR prefix length.
///
/// Counts every set bit, so a non-contiguous mask yields its population
/// count rather than a real prefix length.
pub fn count_set_bits(mask: Ipv4Addr) -> u8 {
    let mut bits = big_endian_value(mask);
    let mut cidr = 0u8;
    while bits != 0 {
        cidr += (bits & 0x01) as u8;
        bits >>= 1;
    }
    cidr
}
