//! The JSON request file model.
//!
//! A [`Request`] is loaded once per invocation, consumed once, and
//! discarded at process exit. The four documented keys (`namespace`,
//! `service_name`, `type`, `instance_name`) are typed fields; any other
//! string keys are captured and forwarded as custom instance attributes
//! on registration. An empty string counts as a missing key.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::cli::Operation;
use crate::error::SignpostError;

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub service_name: Option<String>,

    #[serde(default, rename = "type")]
    pub record_type: Option<String>,

    #[serde(default)]
    pub instance_name: Option<String>,

    /// Service description, consumed only when a missing service has to
    /// be created during `register_instance`. Never forwarded as an
    /// instance attribute.
    #[serde(default)]
    pub description: Option<String>,

    /// Custom attributes to associate with the instance on registration.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Request {
    pub fn load(path: &Path) -> Result<Self, SignpostError> {
        if !path.exists() {
            return Err(SignpostError::ConfigFileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content, &path.display().to_string())
    }

    pub fn from_json(content: &str, origin: &str) -> Result<Self, SignpostError> {
        serde_json::from_str(content).map_err(|e| SignpostError::ConfigParse {
            path: origin.to_string(),
            source: Box::new(e),
        })
    }

    /// Look up one of the four documented keys. Empty values are
    /// treated as absent, matching how the request files are written
    /// (keys are often templated in and left blank).
    #[must_use]
    pub fn key(&self, name: &str) -> Option<&str> {
        let value = match name {
            "namespace" => self.namespace.as_deref(),
            "service_name" => self.service_name.as_deref(),
            "type" => self.record_type.as_deref(),
            "instance_name" => self.instance_name.as_deref(),
            "description" => self.description.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        };
        value.filter(|v| !v.is_empty())
    }

    pub fn require(
        &self,
        key: &'static str,
        operation: &'static str,
    ) -> Result<&str, SignpostError> {
        self.key(key)
            .ok_or(SignpostError::MissingKey { key, operation })
    }

    /// Check every key the operation needs, before any remote call.
    pub fn require_for(&self, operation: Operation) -> Result<(), SignpostError> {
        for key in operation.required_keys() {
            self.require(key, operation.name())?;
        }
        Ok(())
    }

    /// The attribute map sent with `register_instance`: every string
    /// key of the request file except `description`.
    #[must_use]
    pub fn instance_attributes(&self) -> BTreeMap<String, String> {
        let mut attributes = self.extra.clone();
        for (key, value) in [
            ("namespace", &self.namespace),
            ("service_name", &self.service_name),
            ("type", &self.record_type),
            ("instance_name", &self.instance_name),
        ] {
            if let Some(value) = value {
                attributes.insert(key.to_string(), value.clone());
            }
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "namespace": "ns1",
        "service_name": "svc1",
        "type": "A",
        "instance_name": "i-1",
        "description": "demo service",
        "team": "platform"
    }"#;

    #[test]
    fn parses_all_documented_keys() {
        let request = Request::from_json(FULL, "test").unwrap();
        assert_eq!(request.key("namespace"), Some("ns1"));
        assert_eq!(request.key("service_name"), Some("svc1"));
        assert_eq!(request.key("type"), Some("A"));
        assert_eq!(request.key("instance_name"), Some("i-1"));
        assert_eq!(request.key("team"), Some("platform"));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let request = Request::from_json(r#"{"namespace": ""}"#, "test").unwrap();
        assert_eq!(request.key("namespace"), None);
        assert!(matches!(
            request.require("namespace", "get_instances"),
            Err(SignpostError::MissingKey {
                key: "namespace",
                ..
            })
        ));
    }

    #[test]
    fn require_for_checks_every_operation_key() {
        let request = Request::from_json(
            r#"{"namespace": "ns1", "service_name": "svc1", "instance_name": "i-1"}"#,
            "test",
        )
        .unwrap();
        // register_instance also needs "type"
        assert!(matches!(
            request.require_for(Operation::RegisterInstance),
            Err(SignpostError::MissingKey { key: "type", .. })
        ));
        assert!(request.require_for(Operation::DeregisterInstance).is_ok());
        assert!(request.require_for(Operation::GetInstances).is_ok());
        assert!(request.require_for(Operation::DeleteService).is_ok());
    }

    #[test]
    fn get_instances_needs_neither_type_nor_instance_name() {
        let request =
            Request::from_json(r#"{"namespace": "ns1", "service_name": "svc1"}"#, "test").unwrap();
        assert!(request.require_for(Operation::GetInstances).is_ok());
    }

    #[test]
    fn attributes_carry_extras_but_not_description() {
        let request = Request::from_json(FULL, "test").unwrap();
        let attributes = request.instance_attributes();
        assert_eq!(attributes.get("type").map(String::as_str), Some("A"));
        assert_eq!(
            attributes.get("instance_name").map(String::as_str),
            Some("i-1")
        );
        assert_eq!(attributes.get("team").map(String::as_str), Some("platform"));
        assert!(!attributes.contains_key("description"));
    }

    #[test]
    fn non_string_extra_is_a_parse_error() {
        let result = Request::from_json(r#"{"namespace": "ns1", "weight": 3}"#, "test");
        assert!(matches!(result, Err(SignpostError::ConfigParse { .. })));
    }

    #[test]
    fn missing_file_is_reported_as_such() {
        let result = Request::load(Path::new("/nonexistent/request.json"));
        assert!(matches!(
            result,
            Err(SignpostError::ConfigFileNotFound { .. })
        ));
    }
}
