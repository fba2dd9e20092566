//! `signpost get_instances` — list the instances registered under a service.

use crate::discovery::DiscoveryApi;
use crate::error::SignpostError;
use crate::request::Request;

pub async fn execute(
    api: &dyn DiscoveryApi,
    service_id: Option<String>,
    request: &Request,
) -> Result<serde_json::Value, SignpostError> {
    let service_id = super::require_service(service_id, request)?;

    let instances = api.list_instances(&service_id).await?;
    tracing::info!(service_id = %service_id, count = instances.len(), "listed instances");

    Ok(serde_json::json!({
        "service_id": service_id,
        "instances": instances,
    }))
}
