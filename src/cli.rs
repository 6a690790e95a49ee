//! Command line arguments.

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use std::ffi::OsString;
use std::path::Path;

const DEFAULT_PROGRAM: &str = "calciprog";
const JSON_FLAG: &str = "--json";
const INFO_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "IPv4 subnet calculator", long_about = None)]
pub struct Args {
    /// Any IPv4 address inside the network, e.g. 192.168.10.3
    #[arg(allow_hyphen_values = true)]
    pub ip: String,
    /// Subnet mask in dotted-quad form, e.g. 255.255.255.0
    #[arg(allow_hyphen_values = true)]
    pub subnetmask: String,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Why the arguments did not produce an [`Args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Wrong argument count. Holds the usage line for stderr.
    Usage(String),
    /// `--help` or `--version` was asked for. Holds the text for stdout.
    Info(String),
}

impl ArgsError {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            ArgsError::Usage(_) => 1,
            ArgsError::Info(_) => 0,
        }
    }
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ArgsError::Usage(msg) | ArgsError::Info(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Parse `argv` (program name first).
///
/// Every token other than `--json` counts as a positional, `--` included, and
/// there must be exactly two. They reach clap behind a `--` so text such as
/// `-1.2.3.4` stays an (invalid) address instead of an unknown flag.
pub fn parse_args<I, T>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first());
    let tokens = args.get(1..).unwrap_or_default();

    let (flags, positionals): (Vec<&OsString>, Vec<&OsString>) =
        tokens.iter().partition(|t| t.as_os_str() == JSON_FLAG);

    let clap_args: Vec<OsString> = if positionals.len() == 2 {
        let mut clap_args = vec![OsString::from(&program)];
        clap_args.extend(flags.into_iter().cloned());
        clap_args.push(OsString::from("--"));
        clap_args.extend(positionals.into_iter().cloned());
        clap_args
    } else if tokens.iter().any(|t| INFO_FLAGS.iter().any(|f| t.as_os_str() == *f)) {
        args.clone()
    } else {
        log::debug!("Expected 2 positional arguments, got {}", positionals.len());
        return Err(ArgsError::Usage(usage(&program)));
    };

    Args::try_parse_from(clap_args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgsError::Info(e.to_string()),
        _ => {
            log::debug!("Rejected arguments: {:?}", e.kind());
            ArgsError::Usage(usage(&program))
        }
    })
}

/// The one-line usage message.
pub fn usage(program: &str) -> String {
    format!("{}: {program} <ip> <subnetmask>", "usage".bold())
}

fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|p| Path::new(p).file_name())
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}
