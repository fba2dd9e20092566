//! `signpost register_instance` — register an instance under a service.
//!
//! Creates the service first when the name does not resolve (HTTP type,
//! custom health check, `description` required at that point), then
//! registers the instance with the request file's string keys as
//! attributes and polls the submitted operation until it settles.

use crate::discovery::{self, DiscoveryApi, WaitSettings};
use crate::error::SignpostError;
use crate::request::Request;

pub async fn execute(
    api: &dyn DiscoveryApi,
    namespace_id: &str,
    service_id: Option<String>,
    request: &Request,
    wait: &WaitSettings,
) -> Result<serde_json::Value, SignpostError> {
    let service_name = request.require("service_name", "register_instance")?;
    let instance_name = request.require("instance_name", "register_instance")?;

    let service_id = match service_id {
        Some(id) => id,
        None => {
            // Auto-creating needs a description, which is otherwise optional.
            let description = request.require("description", "register_instance")?;
            tracing::info!(service = service_name, "service not found, creating it");
            api.create_service(namespace_id, service_name, description)
                .await?
        }
    };

    tracing::info!(
        instance = instance_name,
        service_id = %service_id,
        "registering instance"
    );
    let operation_id = api
        .register_instance(&service_id, instance_name, &request.instance_attributes())
        .await?;

    tracing::info!(operation_id = %operation_id, "operation submitted, awaiting result");
    let status = discovery::await_operation(api, &operation_id, wait).await?;

    Ok(serde_json::json!({
        "operation_id": operation_id,
        "status": status,
        "service_id": service_id,
        "instance_id": instance_name,
    }))
}
