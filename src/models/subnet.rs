//! Subnet calculation result.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// All fields derived from one address + mask pair.
///
/// Built once by [`crate::processing::derive_subnet`], never mutated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetInfo {
    /// The address given on input (any address inside the network).
    pub address: Ipv4Addr,
    /// The subnet mask as given on input.
    pub mask: Ipv4Addr,
    /// `address & mask`.
    pub network_id: Ipv4Addr,
    /// `!mask`.
    pub wildcard: Ipv4Addr,
    /// `network_id | wildcard`.
    pub broadcast: Ipv4Addr,
    /// First usable host, `network_id + 1`.
    pub host_min: Ipv4Addr,
    /// Last usable host, `broadcast - 1`.
    pub host_max: Ipv4Addr,
    /// Usable host count, `wildcard - 1` saturating at zero.
    pub host_count: u32,
    /// Number of 1-bits in the mask.
    pub cidr: u8,
}

impl SubnetInfo {
    /// Network in `a.b.c.d/len` form.
    pub fn network(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for SubnetInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network_id, self.cidr)
    }
}

impl Serialize for SubnetInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("SubnetInfo", 10)?;
        s.serialize_field("address", &self.address.to_string())?;
        s.serialize_field("netmask", &self.mask.to_string())?;
        s.serialize_field("network", &self.network())?;
        s.serialize_field("network_id", &self.network_id.to_string())?;
        s.serialize_field("cidr", &self.cidr)?;
        s.serialize_field("wildcard", &self.wildcard.to_string())?;
        s.serialize_field("host_min", &self.host_min.to_string())?;
        s.serialize_field("host_max", &self.host_max.to_string())?;
        s.serialize_field("broadcast", &self.broadcast.to_string())?;
        s.serialize_field("hosts", &self.host_count)?;
        s.end()
    }
}
