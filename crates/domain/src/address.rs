use crate::errors::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Decode a raw network-order address as sent by the resolver:
/// 4 bytes for IPv4, 16 bytes for IPv6.
pub fn ip_from_octets(octets: &[u8]) -> Result<IpAddr, DomainError> {
    if let Ok(v4) = <[u8; 4]>::try_from(octets) {
        return Ok(IpAddr::V4(Ipv4Addr::from(v4)));
    }
    if let Ok(v6) = <[u8; 16]>::try_from(octets) {
        return Ok(IpAddr::V6(Ipv6Addr::from(v6)));
    }
    Err(DomainError::InvalidIpAddress(format!(
        "expected 4 or 16 address bytes, got {}",
        octets.len()
    )))
}
