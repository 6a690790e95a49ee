//! IPv4 subnet calculator.
//!
//! Takes an address and a subnet mask in dotted-quad form and derives network
//! id, wildcard, broadcast, host range, host count and CIDR prefix length.
//!
//! # Modules
//! - [`models`] - Addresses, octet arithmetic and [`models::SubnetInfo`]
//! - [`processing`] - Subnet arithmetic
//! - [`output`] - Text and JSON reports
//! - [`cli`] - Argument parsing
//! - [`config`] / [`logging`] - Runtime settings and log4rs setup

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use cli::Args;
use colored::Colorize;
use models::{parse_dotted_quad, SubnetInfo};
use std::error::Error;
use std::io::Write;

/// What [`run`] did with the arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The subnet was derived and printed.
    Printed(SubnetInfo),
    /// The address or mask did not parse. Nothing was printed.
    Skipped,
}

/// Parse both addresses, derive the subnet and write the report to `out`.
///
/// A malformed address or mask is not an error: it is logged and nothing is
/// written. Only a failing writer makes this return `Err`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<Outcome, Box<dyn Error>> {
    log::info!("#Start run({} {})", args.ip, args.subnetmask);

    let Some(info) = calculate(&args.ip, &args.subnetmask) else {
        return Ok(Outcome::Skipped);
    };

    if args.json {
        output::print_json(&info, out)?;
    } else {
        output::print_report(&info, out)?;
    }
    out.flush().map_err(|e| format!("Error flushing output: {e}"))?;

    Ok(Outcome::Printed(info))
}

/// Parse `ip` and `mask` and derive the subnet, or `None` if either is malformed.
pub fn calculate(ip: &str, mask: &str) -> Option<SubnetInfo> {
    let address = parse_or_warn(ip, "ip")?;
    let mask = parse_or_warn(mask, "subnetmask")?;
    Some(processing::derive_subnet(address, mask))
}

fn parse_or_warn(text: &str, what: &str) -> Option<std::net::Ipv4Addr> {
    match parse_dotted_quad(text) {
        Ok(addr) => Some(addr),
        Err(e) => {
            log::warn!("{skipped} {what}: {e}", skipped = "skipped".on_red());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(ip: &str, mask: &str, json: bool) -> Args {
        Args {
            ip: ip.to_string(),
            subnetmask: mask.to_string(),
            json,
        }
    }

    #[test]
    fn test_calculate() {
        let info = calculate("192.168.10.3", "255.255.255.0").unwrap();
        assert_eq!(info.network(), "192.168.10.0/24");
        assert!(calculate("not.an.ip", "255.255.255.0").is_none());
        assert!(calculate("192.168.10.3", "255.255.255").is_none());
    }

    #[test]
    fn test_run_text() {
        let mut out = Vec::new();
        let outcome = run(&args("10.0.0.1", "255.255.255.252", false), &mut out).unwrap();
        assert!(matches!(outcome, Outcome::Printed(info) if info.host_count == 2));
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Network:\t10.0.0.0/30\n"));
    }

    #[test]
    fn test_run_json() {
        let mut out = Vec::new();
        run(&args("10.0.0.1", "255.255.255.252", true), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["network"], "10.0.0.0/30");
    }

    #[test]
    fn test_run_malformed_prints_nothing() {
        let mut out = Vec::new();
        let outcome = run(&args("not.an.ip", "255.255.255.0", false), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(out.is_empty());

        let outcome = run(&args("10.0.0.1", "255.255.255.0.0", false), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(out.is_empty());
    }
}
