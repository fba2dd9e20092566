//! `signpost delete_service` — delete a service.
//!
//! Expects the service to have no registered instances; Cloud Map
//! rejects the delete otherwise and that rejection is surfaced as-is.
//! Extra request keys (`type`, `instance_name`) are ignored.

use crate::discovery::DiscoveryApi;
use crate::error::SignpostError;
use crate::request::Request;

pub async fn execute(
    api: &dyn DiscoveryApi,
    service_id: Option<String>,
    request: &Request,
) -> Result<serde_json::Value, SignpostError> {
    let service_id = super::require_service(service_id, request)?;

    tracing::info!(service_id = %service_id, "deleting service");
    api.delete_service(&service_id).await?;

    Ok(serde_json::json!({
        "service_id": service_id,
        "deleted": true,
    }))
}
