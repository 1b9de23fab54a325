//! Command-line arguments and the client configuration built from them
//!
//! Usage: precinct <BADGE_ID> [HOST] [PORT]

use clap::{Parser, ValueEnum};
use precinct_core::logging_facility::Profile;

pub const DEFAULT_REGISTRY_HOST: &str = "localhost";
pub const DEFAULT_REGISTRY_PORT: u16 = 1100;

const USAGE_NOTES: &str = "\
Officer record client. Connects to the record service of the officer's station \
and runs an interactive menu on the terminal.

The badge identifier is the station acronym followed by a number, e.g. PD1234; \
the acronym selects which station server to use.
If a port is given, a host must be given as well.
Audit entries are appended to <BADGE_ID>.log in the current directory.";

#[derive(Debug, Parser)]
#[command(name = "precinct", version)]
#[command(about = "Officer record client", long_about = USAGE_NOTES)]
pub struct Cli {
    /// Officer badge identifier (station acronym followed by a number)
    pub badge_id: String,

    /// Host the registry server runs on
    #[arg(env = "PRECINCT_REGISTRY_HOST", default_value = DEFAULT_REGISTRY_HOST)]
    pub host: String,

    /// Port the registry server listens on
    #[arg(env = "PRECINCT_REGISTRY_PORT", default_value_t = DEFAULT_REGISTRY_PORT)]
    pub port: u16,

    /// Console logging format
    #[arg(long, value_enum, default_value_t = LogProfile::Development)]
    pub log_profile: LogProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    /// Human-readable
    Development,
    /// JSON lines
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

/// Everything the client needs to start a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub badge: String,
    pub host: String,
    pub port: u16,
    pub log_profile: Profile,
}

impl From<Cli> for ClientConfig {
    fn from(cli: Cli) -> Self {
        Self {
            badge: cli.badge_id,
            host: cli.host,
            port: cli.port,
            log_profile: cli.log_profile.into(),
        }
    }
}
