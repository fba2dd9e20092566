//! Command-line interface definitions using clap derive macros.
//!
//! The [`Cli`] parser takes two positional arguments — the [`Operation`]
//! to perform and the path to a JSON request file — plus flags for the
//! AWS region, operation polling, and logging. Every flag has an
//! environment variable equivalent for CI pipelines.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "signpost",
    version,
    about = "AWS Cloud Map service discovery CLI",
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        signpost register_instance service.json    Register an instance\n  \
        signpost get_instances service.json        List registered instances\n  \
        signpost deregister_instance service.json  Remove an instance\n  \
        signpost delete_service service.json       Delete an empty service\n\n  \
        The JSON file carries: namespace, service_name, type, instance_name."
)]
pub struct Cli {
    /// Operation to perform against Cloud Map
    #[arg(value_enum)]
    pub operation: Operation,

    /// Path to the JSON request file
    pub file: PathBuf,

    /// AWS region (defaults to the profile/environment region)
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    // -- Tuning --
    /// Seconds between operation status polls
    #[arg(
        long,
        env = "POLL_INTERVAL_SECS",
        default_value_t = 5,
        help_heading = "Tuning"
    )]
    pub poll_interval: u64,

    /// Seconds to wait for a submitted operation before giving up
    #[arg(
        long,
        env = "OPERATION_TIMEOUT_SECS",
        default_value_t = 3600,
        help_heading = "Tuning"
    )]
    pub operation_timeout: u64,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json_logs: bool,
}

/// The remote operations the dispatcher knows how to perform.
///
/// Value names are snake_case to match the keys the request file uses,
/// so `signpost register_instance service.json` reads like the JSON it
/// consumes. An unrecognized name is rejected by clap before the
/// request file is ever opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Register an instance under a service
    #[value(name = "register_instance")]
    RegisterInstance,

    /// List the instances registered under a service
    #[value(name = "get_instances")]
    GetInstances,

    /// Deregister an instance by its instance_name attribute
    #[value(name = "deregister_instance")]
    DeregisterInstance,

    /// Delete a service (expects no registered instances)
    #[value(name = "delete_service")]
    DeleteService,
}

impl Operation {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RegisterInstance => "register_instance",
            Self::GetInstances => "get_instances",
            Self::DeregisterInstance => "deregister_instance",
            Self::DeleteService => "delete_service",
        }
    }

    /// Request file keys that must be present and non-empty before any
    /// remote call is issued for this operation.
    #[must_use]
    pub const fn required_keys(self) -> &'static [&'static str] {
        match self {
            Self::RegisterInstance => {
                &["namespace", "service_name", "type", "instance_name"]
            }
            Self::GetInstances | Self::DeleteService => &["namespace", "service_name"],
            Self::DeregisterInstance => &["namespace", "service_name", "instance_name"],
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}
