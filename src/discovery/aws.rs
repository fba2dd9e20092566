//! AWS Cloud Map implementation of [`DiscoveryApi`].
//!
//! Thin adapter over `aws-sdk-servicediscovery`: list calls go through
//! the SDK paginators, responses are flattened into the crate's summary
//! types, and SDK errors are boxed into
//! [`SignpostError::Remote`](crate::error::SignpostError::Remote)
//! without translation. Credentials and the default region come from
//! the standard `aws-config` provider chain; `--region` overrides the
//! region only.

use std::collections::BTreeMap;

use async_trait::async_trait;
use aws_sdk_servicediscovery::types::{
    FilterCondition, HealthCheckCustomConfig, OperationStatus as SdkOperationStatus,
    ServiceFilter, ServiceFilterName, ServiceTypeOption,
};
use aws_sdk_servicediscovery::Client;

use super::{
    DiscoveryApi, InstanceSummary, NamespaceSummary, OperationSnapshot, OperationStatus,
    ServiceSummary,
};
use crate::error::SignpostError;

pub struct CloudMapApi {
    client: Client,
}

impl CloudMapApi {
    pub async fn new(region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region.to_string()));
        }
        let sdk_config = loader.load().await;

        Self {
            client: Client::new(&sdk_config),
        }
    }
}

fn remote(
    action: &'static str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> SignpostError {
    SignpostError::Remote {
        action,
        source: Box::new(source),
    }
}

fn incomplete(action: &'static str, what: &str) -> SignpostError {
    SignpostError::Remote {
        action,
        source: format!("response contained no {what}").into(),
    }
}

#[async_trait]
impl DiscoveryApi for CloudMapApi {
    async fn list_namespaces(&self) -> Result<Vec<NamespaceSummary>, SignpostError> {
        let mut pages = self.client.list_namespaces().into_paginator().send();

        let mut namespaces = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| remote("ListNamespaces", e))?;
            for namespace in page.namespaces() {
                if let (Some(id), Some(name)) = (namespace.id(), namespace.name()) {
                    namespaces.push(NamespaceSummary {
                        id: id.to_string(),
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(namespaces)
    }

    async fn list_services(
        &self,
        namespace_id: &str,
    ) -> Result<Vec<ServiceSummary>, SignpostError> {
        let filter = ServiceFilter::builder()
            .name(ServiceFilterName::NamespaceId)
            .values(namespace_id.to_string())
            .condition(FilterCondition::Eq)
            .build()
            .map_err(|e| remote("ListServices", e))?;

        let mut pages = self
            .client
            .list_services()
            .filters(filter)
            .into_paginator()
            .send();

        let mut services = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| remote("ListServices", e))?;
            for service in page.services() {
                if let (Some(id), Some(name)) = (service.id(), service.name()) {
                    services.push(ServiceSummary {
                        id: id.to_string(),
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(services)
    }

    async fn create_service(
        &self,
        namespace_id: &str,
        name: &str,
        description: &str,
    ) -> Result<String, SignpostError> {
        let output = self
            .client
            .create_service()
            .name(name)
            .namespace_id(namespace_id)
            .description(description)
            .health_check_custom_config(
                HealthCheckCustomConfig::builder().failure_threshold(1).build(),
            )
            .r#type(ServiceTypeOption::Http)
            .send()
            .await
            .map_err(|e| remote("CreateService", e))?;

        output
            .service()
            .and_then(|service| service.id())
            .map(ToString::to_string)
            .ok_or_else(|| incomplete("CreateService", "service id"))
    }

    async fn register_instance(
        &self,
        service_id: &str,
        instance_id: &str,
        attributes: &BTreeMap<String, String>,
    ) -> Result<String, SignpostError> {
        let output = self
            .client
            .register_instance()
            .service_id(service_id)
            .instance_id(instance_id)
            .set_attributes(Some(
                attributes
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ))
            .send()
            .await
            .map_err(|e| remote("RegisterInstance", e))?;

        output
            .operation_id()
            .map(ToString::to_string)
            .ok_or_else(|| incomplete("RegisterInstance", "operation id"))
    }

    async fn list_instances(
        &self,
        service_id: &str,
    ) -> Result<Vec<InstanceSummary>, SignpostError> {
        let mut pages = self
            .client
            .list_instances()
            .service_id(service_id)
            .into_paginator()
            .send();

        let mut instances = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| remote("ListInstances", e))?;
            for instance in page.instances() {
                if let Some(id) = instance.id() {
                    instances.push(InstanceSummary {
                        id: id.to_string(),
                        attributes: instance
                            .attributes()
                            .map(|attributes| {
                                attributes
                                    .iter()
                                    .map(|(k, v)| (k.clone(), v.clone()))
                                    .collect()
                            })
                            .unwrap_or_default(),
                    });
                }
            }
        }
        Ok(instances)
    }

    async fn deregister_instance(
        &self,
        service_id: &str,
        instance_id: &str,
    ) -> Result<String, SignpostError> {
        let output = self
            .client
            .deregister_instance()
            .service_id(service_id)
            .instance_id(instance_id)
            .send()
            .await
            .map_err(|e| remote("DeregisterInstance", e))?;

        output
            .operation_id()
            .map(ToString::to_string)
            .ok_or_else(|| incomplete("DeregisterInstance", "operation id"))
    }

    async fn delete_service(&self, service_id: &str) -> Result<(), SignpostError> {
        self.client
            .delete_service()
            .id(service_id)
            .send()
            .await
            .map_err(|e| remote("DeleteService", e))?;
        Ok(())
    }

    async fn get_operation(
        &self,
        operation_id: &str,
    ) -> Result<OperationSnapshot, SignpostError> {
        let output = self
            .client
            .get_operation()
            .operation_id(operation_id)
            .send()
            .await
            .map_err(|e| remote("GetOperation", e))?;

        let operation = output
            .operation()
            .ok_or_else(|| incomplete("GetOperation", "operation"))?;

        let status = match operation.status() {
            Some(SdkOperationStatus::Success) => OperationStatus::Success,
            Some(SdkOperationStatus::Fail) => OperationStatus::Fail,
            Some(SdkOperationStatus::Submitted) => OperationStatus::Submitted,
            // PENDING plus whatever future statuses the service grows
            _ => OperationStatus::Pending,
        };

        Ok(OperationSnapshot {
            status,
            message: operation.error_message().map(ToString::to_string),
        })
    }
}
