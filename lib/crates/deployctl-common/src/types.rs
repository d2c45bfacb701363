use serde::{Deserialize, Serialize};

/// A single output exported by a deployed stack.
///
/// Field names follow the provider's wire shape so the raw outputs can be
/// re-emitted verbatim in the `info` report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StackOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub output_key: String,
    pub output_value: String,
}

/// A deployed function as shown in the info report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInfo {
    /// Logical name from the service file.
    pub name: String,
    /// Physical name of the deployed function.
    pub deployed_name: String,
    /// Artifact size in bytes. Never computed by the stack gatherer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_size: Option<u64>,
}

/// A deployed layer version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayerInfo {
    pub name: String,
    pub arn: String,
}

/// Human-oriented summary of a deployed service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatheredInfo {
    pub functions: Vec<FunctionInfo>,
    pub layers: Vec<LayerInfo>,
    pub endpoints: Vec<String>,
    /// CloudFront distribution domain. Absent (not null) when the stack
    /// exports none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_front: Option<String>,
    pub service: String,
    pub stage: String,
    pub region: String,
    pub stack: String,
}

/// Full `info` payload: the summary plus the raw stack outputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StackInfo {
    pub info: GatheredInfo,
    pub outputs: Vec<StackOutput>,
}

impl StackOutput {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            description: None,
            output_key: key.into(),
            output_value: value.into(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
