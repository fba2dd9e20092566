//! The seam between the dispatcher and the remote service-discovery API.
//!
//! Defines the [`DiscoveryApi`] trait with plain-data summary types so
//! the operation handlers never touch SDK types directly, plus the
//! shared name-to-ID resolution helpers and the [`await_operation`]
//! polling loop for asynchronous Cloud Map operations. The only
//! production implementation lives in [`aws`].

pub mod aws;

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::SignpostError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceSummary {
    pub id: String,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Submitted,
    Pending,
    Success,
    Fail,
}

/// Point-in-time view of an asynchronous Cloud Map operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSnapshot {
    pub status: OperationStatus,
    pub message: Option<String>,
}

// async_trait is required here because DiscoveryApi is used as
// &dyn DiscoveryApi and native async fn in traits does not support
// dyn dispatch.
#[async_trait]
pub trait DiscoveryApi: Send + Sync {
    async fn list_namespaces(&self) -> Result<Vec<NamespaceSummary>, SignpostError>;

    async fn list_services(&self, namespace_id: &str)
        -> Result<Vec<ServiceSummary>, SignpostError>;

    /// Create an HTTP service and return its ID.
    async fn create_service(
        &self,
        namespace_id: &str,
        name: &str,
        description: &str,
    ) -> Result<String, SignpostError>;

    /// Returns the ID of the submitted operation.
    async fn register_instance(
        &self,
        service_id: &str,
        instance_id: &str,
        attributes: &BTreeMap<String, String>,
    ) -> Result<String, SignpostError>;

    async fn list_instances(&self, service_id: &str)
        -> Result<Vec<InstanceSummary>, SignpostError>;

    /// Returns the ID of the submitted operation.
    async fn deregister_instance(
        &self,
        service_id: &str,
        instance_id: &str,
    ) -> Result<String, SignpostError>;

    async fn delete_service(&self, service_id: &str) -> Result<(), SignpostError>;

    async fn get_operation(&self, operation_id: &str)
        -> Result<OperationSnapshot, SignpostError>;
}

/// How [`await_operation`] paces itself. Both knobs come straight from
/// the CLI (`--poll-interval`, `--operation-timeout`).
#[derive(Debug, Clone, Copy)]
pub struct WaitSettings {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

pub async fn resolve_namespace(
    api: &dyn DiscoveryApi,
    name: &str,
) -> Result<String, SignpostError> {
    api.list_namespaces()
        .await?
        .into_iter()
        .find(|namespace| namespace.name == name)
        .map(|namespace| namespace.id)
        .ok_or_else(|| SignpostError::NamespaceNotFound {
            name: name.to_string(),
        })
}

/// Resolve a service name within a namespace. A missing service is not
/// an error at this level: `register_instance` creates it, the other
/// operations turn `None` into [`SignpostError::ServiceNotFound`].
pub async fn resolve_service(
    api: &dyn DiscoveryApi,
    namespace_id: &str,
    name: &str,
) -> Result<Option<String>, SignpostError> {
    Ok(api
        .list_services(namespace_id)
        .await?
        .into_iter()
        .find(|service| service.name == name)
        .map(|service| service.id))
}

/// Find the registered instance whose `instance_name` attribute matches.
/// Cloud Map instance IDs are caller-chosen, so the lookup goes through
/// the attribute the register operation stamped on the instance.
pub async fn find_instance(
    api: &dyn DiscoveryApi,
    service_id: &str,
    instance_name: &str,
) -> Result<Option<InstanceSummary>, SignpostError> {
    Ok(api
        .list_instances(service_id)
        .await?
        .into_iter()
        .find(|instance| {
            instance.attributes.get("instance_name").map(String::as_str) == Some(instance_name)
        }))
}

/// Poll a submitted operation until it reaches a terminal status.
///
/// Returns the terminal [`OperationStatus::Success`], or an error when
/// the remote reports `FAIL` or the configured timeout elapses.
pub async fn await_operation(
    api: &dyn DiscoveryApi,
    operation_id: &str,
    wait: &WaitSettings,
) -> Result<OperationStatus, SignpostError> {
    let started = tokio::time::Instant::now();
    loop {
        tracing::debug!(operation_id, "checking operation status");
        let snapshot = api.get_operation(operation_id).await?;
        match snapshot.status {
            OperationStatus::Success => {
                tracing::info!(operation_id, "operation succeeded");
                return Ok(OperationStatus::Success);
            }
            OperationStatus::Fail => {
                return Err(SignpostError::OperationFailed {
                    operation_id: operation_id.to_string(),
                    message: snapshot
                        .message
                        .unwrap_or_else(|| "remote reported status FAIL".to_string()),
                });
            }
            OperationStatus::Submitted | OperationStatus::Pending => {}
        }

        let elapsed = started.elapsed();
        if elapsed > wait.timeout {
            return Err(SignpostError::OperationTimeout {
                operation_id: operation_id.to_string(),
                elapsed_secs: elapsed.as_secs(),
            });
        }
        tracing::info!(operation_id, "operation still in flight, waiting");
        tokio::time::sleep(wait.poll_interval).await;
    }
}
