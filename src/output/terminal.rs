//! Text report for the terminal.

use crate::models::{host_order_bytes, host_order_value, SubnetInfo};
use itertools::Itertools;
use std::error::Error;
use std::io::Write;

/// Write the fixed-label report, one field per line.
///
/// # Arguments
/// * `info` - The derived subnet
/// * `out` - Destination, normally stdout
pub fn print_report(info: &SubnetInfo, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_report() for {info}");
    for line in report_lines(info) {
        writeln!(out, "{line}").map_err(|e| format!("Error writing report: {e}"))?;
    }
    Ok(())
}

/// Build the report lines without the trailing newlines.
pub fn report_lines(info: &SubnetInfo) -> Vec<String> {
    vec![
        format!("Network:\t{}", info.network()),
        format!("Wildcard:\t{}", info.wildcard),
        format!("Netmask:\t{}", info.mask),
        format!("Hostmin:\t{}", info.host_min),
        format!("Hostmax:\t{}", info.host_max),
        format!("Broadcast:\t{}", info.broadcast),
        format!("Hosts:\t\t{}", info.host_count),
        bytewise_line(info),
    ]
}

/// Network id as host-order bytes, most significant first, and their value.
fn bytewise_line(info: &SubnetInfo) -> String {
    let value = host_order_value(info.network_id);
    let bytes = host_order_bytes(value);
    format!(
        "NetID-Bytewise: {} -> {value}",
        bytes.iter().rev().join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::derive_subnet;
    use std::net::Ipv4Addr;

    #[test]
    fn test_report_lines_24() {
        let info = derive_subnet(Ipv4Addr::new(192, 168, 10, 3), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(
            report_lines(&info),
            vec![
                "Network:\t192.168.10.0/24",
                "Wildcard:\t0.0.0.255",
                "Netmask:\t255.255.255.0",
                "Hostmin:\t192.168.10.1",
                "Hostmax:\t192.168.10.254",
                "Broadcast:\t192.168.10.255",
                "Hosts:\t\t254",
                "NetID-Bytewise: 0 10 168 192 -> 698560",
            ]
        );
    }

    #[test]
    fn test_bytewise_line_zero() {
        let info = derive_subnet(Ipv4Addr::new(9, 9, 9, 9), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(bytewise_line(&info), "NetID-Bytewise: 0 0 0 0 -> 0");
    }

    #[test]
    fn test_print_report_writes_all_lines() {
        let info = derive_subnet(Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(255, 255, 255, 252));
        let mut out = Vec::new();
        print_report(&info, &mut out).expect("report should write");
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(text.starts_with("Network:\t10.0.0.0/30\n"));
        assert!(text.contains("Hosts:\t\t2\n"));
        assert!(text.ends_with("NetID-Bytewise: 0 0 0 10 -> 10\n"));
    }
}
