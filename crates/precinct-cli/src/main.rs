//! Precinct CLI
//!
//! Interactive officer record client

use std::io;

use clap::Parser;
use precinct_core::logging_facility::{audit_file_for, init_with_audit_file, AuditRecorder};
use precinct_core::{launch, BadgeId, Console, Termination};
use precinct_core_types::SessionId;
use precinct_remote::RegistryLocator;

mod config;

use config::{Cli, ClientConfig};

fn main() {
    let config = ClientConfig::from(Cli::parse());
    std::process::exit(run(config));
}

fn run(config: ClientConfig) -> i32 {
    let audit_path = audit_file_for(&config.badge);
    let sink = init_with_audit_file(config.log_profile, Some(audit_path.as_path()));

    let badge = BadgeId::new(config.badge);
    let audit = AuditRecorder::new(SessionId::new(), badge.as_str());
    tracing::debug!(
        session_id = audit.session_id().as_str(),
        host = config.host.as_str(),
        port = config.port,
        audit_sink = ?sink,
        "starting officer session"
    );

    let locator = match RegistryLocator::new(&config.host, config.port) {
        Ok(locator) => locator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());

    let termination = launch(badge, &locator, audit, console);
    if let Termination::Fatal { message, error } = &termination {
        tracing::debug!(err_code = error.code(), "session ended: {}", error);
        eprintln!("{}", message);
    }
    termination.exit_code()
}
