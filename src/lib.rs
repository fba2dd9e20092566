//! Signpost is a command-line client for AWS Cloud Map service discovery.
//!
//! It maps a JSON request file onto a single Cloud Map operation:
//! registering an instance, listing the instances of a service,
//! deregistering an instance, or deleting a service. Every invocation
//! follows the same linear sequence — resolve the namespace name to an
//! ID, resolve the service name within that namespace, perform the
//! operation, print the structured result as JSON on stdout.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Operation dispatch and per-operation handlers
//!   (register, instances, deregister, delete).
//! - [`discovery`] -- The [`DiscoveryApi`](discovery::DiscoveryApi)
//!   trait over the remote service-discovery API, name-to-ID resolution
//!   helpers, operation polling, and the AWS Cloud Map implementation.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`logging`] -- Structured tracing setup on stderr, keeping stdout
//!   reserved for operation responses.
//! - [`request`] -- The JSON request file model and required-key checks.

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod request;
