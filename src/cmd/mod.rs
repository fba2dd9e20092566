//! Operation dispatch and execution.
//!
//! [`dispatch`] wires a parsed CLI invocation to the real Cloud Map
//! client; [`run`] is the transport-agnostic dispatcher used by both
//! production code and tests. Each operation handler lives in its own
//! submodule and returns the JSON value that ends up on stdout.

pub mod delete;
pub mod deregister;
pub mod instances;
pub mod register;

use std::time::Duration;

use crate::cli::{Cli, Operation};
use crate::discovery::aws::CloudMapApi;
use crate::discovery::{self, DiscoveryApi, WaitSettings};
use crate::error::SignpostError;
use crate::logging;
use crate::request::Request;

pub async fn dispatch(cli: Cli) -> Result<(), SignpostError> {
    let log_format = logging::resolve_format(cli.pretty, cli.json_logs);
    logging::init(&cli.log_level, log_format);

    let request = Request::load(&cli.file)?;

    let api = CloudMapApi::new(cli.region.as_deref()).await;
    let wait = WaitSettings {
        poll_interval: Duration::from_secs(cli.poll_interval),
        timeout: Duration::from_secs(cli.operation_timeout),
    };

    let response = run(cli.operation, &api, &request, &wait).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Resolve names to IDs, then hand off to the operation handler.
///
/// Required keys are checked up front so an incomplete request file
/// fails before the first remote call.
pub async fn run(
    operation: Operation,
    api: &dyn DiscoveryApi,
    request: &Request,
    wait: &WaitSettings,
) -> Result<serde_json::Value, SignpostError> {
    request.require_for(operation)?;

    let namespace = request.require("namespace", operation.name())?;
    let service_name = request.require("service_name", operation.name())?;

    tracing::info!(
        operation = operation.name(),
        namespace,
        service = service_name,
        "dispatching"
    );

    let namespace_id = discovery::resolve_namespace(api, namespace).await?;
    let service_id = discovery::resolve_service(api, &namespace_id, service_name).await?;

    match operation {
        Operation::RegisterInstance => {
            register::execute(api, &namespace_id, service_id, request, wait).await
        }
        Operation::GetInstances => instances::execute(api, service_id, request).await,
        Operation::DeregisterInstance => {
            deregister::execute(api, service_id, request, wait).await
        }
        Operation::DeleteService => delete::execute(api, service_id, request).await,
    }
}

/// Operations other than `register_instance` require the service to
/// already exist.
fn require_service(
    service_id: Option<String>,
    request: &Request,
) -> Result<String, SignpostError> {
    service_id.ok_or_else(|| SignpostError::ServiceNotFound {
        name: request.key("service_name").unwrap_or_default().to_string(),
        namespace: request.key("namespace").unwrap_or_default().to_string(),
    })
}
