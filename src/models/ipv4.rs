//! IPv4 address utilities.
//!
//! Addresses are kept as four ordered octets ([`Ipv4Addr`]), first dotted-quad
//! octet first. All arithmetic works on that octet sequence as a base-256
//! number, so results never depend on the byte order of the executing host.

use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Parse a dotted-quad string (e.g. "192.168.10.3").
///
/// Only the strict four-part decimal form is accepted: no leading zeros,
/// no surrounding whitespace, every part in 0..=255.
///
/// # Examples
/// ```
/// use calciprog::models::parse_dotted_quad;
/// assert_eq!(parse_dotted_quad("10.0.0.1").unwrap().octets(), [10, 0, 0, 1]);
/// assert!(parse_dotted_quad("not.an.ip").is_err());
/// ```
pub fn parse_dotted_quad(text: &str) -> Result<Ipv4Addr, Box<dyn Error>> {
    Ipv4Addr::from_str(text).map_err(|e| format!("Invalid address '{text}': {e}").into())
}

/// Add one to the address, carrying from the last octet towards the first.
///
/// `255.255.255.255` wraps to `0.0.0.0`.
pub fn octet_increment(addr: Ipv4Addr) -> Ipv4Addr {
    let mut octets = addr.octets();
    for octet in octets.iter_mut().rev() {
        let (value, carry) = octet.overflowing_add(1);
        *octet = value;
        if !carry {
            break;
        }
    }
    Ipv4Addr::from(octets)
}

/// Subtract one from the address, borrowing from the last octet towards the first.
///
/// `0.0.0.0` wraps to `255.255.255.255`.
pub fn octet_decrement(addr: Ipv4Addr) -> Ipv4Addr {
    let mut octets = addr.octets();
    for octet in octets.iter_mut().rev() {
        let (value, borrow) = octet.overflowing_sub(1);
        *octet = value;
        if !borrow {
            break;
        }
    }
    Ipv4Addr::from(octets)
}

pub fn octet_and(a: Ipv4Addr, b: Ipv4Addr) -> Ipv4Addr {
    zip_octets(a, b, |x, y| x & y)
}

pub fn octet_or(a: Ipv4Addr, b: Ipv4Addr) -> Ipv4Addr {
    zip_octets(a, b, |x, y| x | y)
}

/// Bitwise complement over the full 32-bit width.
pub fn octet_not(a: Ipv4Addr) -> Ipv4Addr {
    let mut octets = a.octets();
    for octet in octets.iter_mut() {
        *octet = !*octet;
    }
    Ipv4Addr::from(octets)
}

fn zip_octets(a: Ipv4Addr, b: Ipv4Addr, op: impl Fn(u8, u8) -> u8) -> Ipv4Addr {
    let (a, b) = (a.octets(), b.octets());
    Ipv4Addr::new(op(a[0], b[0]), op(a[1], b[1]), op(a[2], b[2]), op(a[3], b[3]))
}

/// Numeric value of the address in dotted-quad order (first octet most significant).
pub fn big_endian_value(addr: Ipv4Addr) -> u32 {
    u32::from_be_bytes(addr.octets())
}

/// The value a little-endian host reads when the network-order octets sit in memory.
///
/// This is the raw integer a C program would hold in `in_addr.s_addr` on x86.
pub fn host_order_value(addr: Ipv4Addr) -> u32 {
    u32::from_le_bytes(addr.octets())
}

/// Split a 32-bit value into its bytes, least significant first.
pub fn host_order_bytes(value: u32) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = ((value >> (8 * i)) & 0xFF) as u8;
    }
    bytes
}
