//! `signpost deregister_instance` — remove a registered instance.
//!
//! The instance is located by its `instance_name` attribute rather than
//! its Cloud Map instance ID, mirroring how registration stamps the
//! attribute on. A name that matches nothing is an error, not a no-op.

use crate::discovery::{self, DiscoveryApi, WaitSettings};
use crate::error::SignpostError;
use crate::request::Request;

pub async fn execute(
    api: &dyn DiscoveryApi,
    service_id: Option<String>,
    request: &Request,
    wait: &WaitSettings,
) -> Result<serde_json::Value, SignpostError> {
    let service_id = super::require_service(service_id, request)?;
    let instance_name = request.require("instance_name", "deregister_instance")?;

    let instance = discovery::find_instance(api, &service_id, instance_name)
        .await?
        .ok_or_else(|| SignpostError::InstanceNotFound {
            name: instance_name.to_string(),
            service: request.key("service_name").unwrap_or_default().to_string(),
        })?;

    tracing::info!(
        instance = instance_name,
        instance_id = %instance.id,
        "deregistering instance"
    );
    let operation_id = api.deregister_instance(&service_id, &instance.id).await?;

    tracing::info!(operation_id = %operation_id, "operation submitted, awaiting result");
    let status = discovery::await_operation(api, &operation_id, wait).await?;

    Ok(serde_json::json!({
        "operation_id": operation_id,
        "status": status,
        "service_id": service_id,
        "instance_id": instance.id,
    }))
}
